use super::*;

#[test]
fn insert_lookup_and_miss_outside_interval() {
    let mut m = IntervalMap::with_capacity(8).unwrap();
    assert!(m.insert(10, 20, 100));
    assert_eq!(m.lookup(10), Some(100));
    assert_eq!(m.lookup(19), Some(100));
    assert_eq!(m.lookup(20), None); // half-open: x1 excluded
    assert_eq!(m.lookup(9), None);
}

#[test]
fn insert_rejects_overlap() {
    let mut m = IntervalMap::with_capacity(8).unwrap();
    assert!(m.insert(10, 20, 1));
    assert!(!m.insert(15, 25, 2)); // overlaps [10,20)
    assert!(!m.insert(5, 15, 2)); // overlaps [10,20)
    assert!(!m.insert(10, 20, 2)); // exact duplicate
    assert!(m.insert(20, 30, 2)); // adjacent, not overlapping
    assert!(m.insert(0, 10, 3)); // adjacent below, not overlapping
}

#[test]
fn remove_drops_the_containing_interval() {
    let mut m = IntervalMap::with_capacity(8).unwrap();
    m.insert(10, 20, 1);
    m.insert(30, 40, 2);
    m.remove(15);
    assert_eq!(m.lookup(15), None);
    assert_eq!(m.lookup(35), Some(2));
}

#[test]
fn remove_outside_any_interval_is_a_noop() {
    let mut m = IntervalMap::with_capacity(8).unwrap();
    m.insert(10, 20, 1);
    m.remove(25);
    assert_eq!(m.lookup(10), Some(1));
}

#[test]
fn iterate_visits_intervals_in_ascending_order_of_upper_bound() {
    let mut m = IntervalMap::with_capacity(8).unwrap();
    m.insert(30, 40, 3);
    m.insert(0, 10, 1);
    m.insert(15, 20, 2);
    let mut iter = MapIter::default();
    let mut seen = Vec::new();
    let mut next = m.iterate(&mut iter, true);
    while let Some(p) = next {
        seen.push((p.x0, p.x1, p.y));
        next = m.iterate(&mut iter, false);
    }
    assert_eq!(seen, vec![(0, 10, 1), (15, 20, 2), (30, 40, 3)]);
}

// Scenario 7 from spec.md §8.
#[test]
fn interval_scenario_overlap_rejection_and_locate() {
    let mut m = IntervalMap::with_capacity(8).unwrap();
    assert!(m.insert(1100, 1200, 101100));
    assert!(m.insert(1300, 1400, 101300));
    assert!(!m.insert(1000, 1500, 1)); // spans both existing intervals
    assert!(!m.insert(1000, 1350, 1)); // overlaps the tail of [1300,1400)
    assert_eq!(m.lookup(1199), Some(101100));
    assert_eq!(m.lookup(1200), None); // half-open: upper bound excluded
    assert_eq!(m.lookup(1300), Some(101300));

    let mut iter = MapIter::default();
    let found = m.locate(&mut iter, 1200).unwrap();
    assert_eq!((found.x0, found.x1, found.y), (1300, 1400, 101300));
}

#[test]
fn locate_finds_the_interval_containing_or_next_above_a_point() {
    let mut m = IntervalMap::with_capacity(8).unwrap();
    m.insert(10, 20, 1);
    m.insert(30, 40, 2);
    let mut iter = MapIter::default();
    let hit = m.locate(&mut iter, 15).unwrap();
    assert_eq!((hit.x0, hit.x1, hit.y), (10, 20, 1));

    let mut iter2 = MapIter::default();
    let gap = m.locate(&mut iter2, 25).unwrap();
    assert_eq!((gap.x0, gap.x1, gap.y), (30, 40, 2));

    let mut iter3 = MapIter::default();
    assert!(m.locate(&mut iter3, 100).is_none());
}
