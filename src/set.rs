//! A sparse set of `u64` elements, built on [`crate::map::IntMap`] by
//! packing 26 elements into each inline value via a bitmap.
//!
//! Grounded on `examples/original_source/iset.h`: an element `e` is split
//! into a quotient `q = e / 26` (a map key) and remainder `r = e % 26` (a
//! bit position within that key's 26-bit inline value). 26 is exactly
//! [`crate::slot::SBITS`], the number of payload bits an inline scalar
//! slot has — the set packs the densest run of elements a single map key
//! can hold without ever boxing a value.

use crate::map::{Iter as MapIter, IntMap, ValueWidth};

const WORD_BITS: u64 = crate::slot::SBITS as u64;

fn bsf(x: u32) -> u32 {
    debug_assert_ne!(x, 0);
    x.trailing_zeros()
}

/// A set of `u64` elements.
pub struct IntSet {
    map: IntMap,
}

impl IntSet {
    pub fn with_capacity(n: u32) -> Result<Self, crate::error::MapError> {
        Ok(IntSet {
            map: IntMap::with_capacity(n, ValueWidth::Inline0)?,
        })
    }

    pub fn reserve(&mut self, n: u32) -> Result<(), crate::error::MapError> {
        self.map.reserve(n)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains(&self, x: u64) -> bool {
        let q = x / WORD_BITS;
        let r = (x % WORD_BITS) as u32;
        match self.map.lookup(q) {
            Some(slot) => self.map.getval0(slot) & (1 << r) != 0,
            None => false,
        }
    }

    /// Add `x` to the set. Call [`IntSet::reserve`] first if `x` falls in
    /// a word not already present.
    pub fn insert(&mut self, x: u64) {
        let q = x / WORD_BITS;
        let r = (x % WORD_BITS) as u32;
        let slot = self.map.assign(q);
        let word = self.map.getval0(slot) | (1 << r);
        self.map.setval0(slot, word);
    }

    pub fn remove(&mut self, x: u64) {
        let q = x / WORD_BITS;
        let r = (x % WORD_BITS) as u32;
        if let Some(slot) = self.map.lookup(q) {
            let word = self.map.getval0(slot) & !(1 << r);
            if word != 0 {
                self.map.setval0(slot, word);
            } else {
                self.map.remove(q);
            }
        }
    }
}

/// Iteration cursor for [`IntSet`]: the underlying map cursor plus the
/// base element and remaining-bits bitmap for the word currently being
/// drained.
#[derive(Default)]
pub struct Iter {
    inner: MapIter,
    x_base: u64,
    y_bits: u32,
}

impl IntSet {
    pub fn iterate(&self, iter: &mut Iter, restart: bool) -> Option<u64> {
        if restart {
            iter.x_base = 0;
            iter.y_bits = 0;
        } else if iter.y_bits != 0 {
            return Some(Self::drain_one(iter));
        }
        let pair = self.map.iterate(&mut iter.inner, restart)?;
        iter.y_bits = self.map.getval0(pair.slot);
        iter.x_base = pair.key * WORD_BITS;
        Some(Self::drain_one(iter))
    }

    /// The least element `>= x`.
    pub fn locate(&self, iter: &mut Iter, x: u64) -> Option<u64> {
        let q = x / WORD_BITS;
        let r = (x % WORD_BITS) as u32;
        iter.x_base = 0;
        iter.y_bits = 0;
        let mut pair = self.map.locate(&mut iter.inner, q)?;
        let mut y = self.map.getval0(pair.slot);
        if pair.key == q {
            // Only the word we actually asked for needs masking below `r`;
            // every subsequent word's elements are already `> x`.
            y &= !((1u32 << r) - 1);
            if y == 0 {
                pair = self.map.iterate(&mut iter.inner, false)?;
                y = self.map.getval0(pair.slot);
            }
        }
        iter.x_base = pair.key * WORD_BITS;
        iter.y_bits = y;
        Some(Self::drain_one(iter))
    }

    fn drain_one(iter: &mut Iter) -> u64 {
        let dirn = bsf(iter.y_bits);
        iter.y_bits &= !(1 << dirn);
        iter.x_base + dirn as u64
    }
}
