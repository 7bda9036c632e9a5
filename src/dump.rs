//! Pre-order, read-only traversal that hands each reachable trie node to a
//! caller-supplied sink — the crate's only operation that performs I/O
//! (`spec.md` §5), and only indirectly, through that sink. Modeled on
//! `imap_dump`/`imap_dump_node` in `examples/original_source/imap.h`: a
//! goto-based loop there becomes the same stack-advance shape
//! [`crate::map::IntMap::iterate`] already uses here. `dump` never mutates
//! the tree and is safe on an empty tree (the sink is simply never
//! called).
//!
//! The original emits one of two textual formats (a plain record, or a
//! Graphviz node/edge pair) by swapping the `dumpfn` callback; this crate
//! exposes the decoded [`DumpNode`] instead and leaves formatting to the
//! caller, who can trivially recover either original format (see the
//! `textual`/`graphviz` helpers below) without `dump` itself touching a
//! `Write` impl.

use crate::map::{ChildSlot, IntMap};
use crate::slot;

/// One visited node: its arena offset, 60-bit prefix, branch position, and
/// the decoded contents of its sixteen slots. A boxed slot's `children`
/// entry already carries its resolved stored value (see
/// [`crate::map::ChildSlot`]), not the raw out-of-line cell index.
#[derive(Debug, Clone)]
pub struct DumpNode {
    pub offset: u32,
    pub prefix: u64,
    pub pos: u32,
    pub children: [ChildSlot; 16],
}

/// Visit every node reachable from `tree`'s root in pre-order (parent
/// before children, children in ascending digit order), calling `sink`
/// once per node. A leaf (`pos == 0`) is still visited — its record is
/// emitted — but never descended into, since its slots hold values, not
/// child references, matching `imap_dump`'s `IMAP_DUMP_NODE(...)` guard
/// on the returned `pos`.
pub fn dump<F: FnMut(DumpNode)>(tree: &IntMap, mut sink: F) {
    let mut stack: [u32; 16] = [0; 16];
    let mut stackp: usize = 0;
    let mut cur = Some((0u32, 0u32));

    while let Some((frame, dirn)) = cur {
        let node_offset = frame & slot::VALUE_MASK;
        let sval = tree.raw_slot(node_offset, dirn as usize);
        if slot::is_node(sval) {
            let child_offset = slot::value_bits(sval);
            let (prefix, pos) = tree.node_prefix_pos(child_offset);
            sink(DumpNode {
                offset: child_offset,
                prefix,
                pos,
                children: tree.node_children(child_offset),
            });
            if pos != 0 {
                stack[stackp] = child_offset;
                stackp += 1;
            }
        }
        cur = advance(&mut stack, &mut stackp);
    }
}

fn advance(stack: &mut [u32; 16], stackp: &mut usize) -> Option<(u32, u32)> {
    loop {
        if *stackp == 0 {
            return None;
        }
        let top = *stackp - 1;
        let sval = stack[top];
        stack[top] = sval.wrapping_add(1);
        let dirn = sval & 31;
        if dirn > 15 {
            *stackp -= 1;
            continue;
        }
        return Some((sval, dirn));
    }
}

/// Render one [`DumpNode`] the way `imap_dump_node` does: offset, prefix,
/// pos, then one `dirn->target` token per non-empty slot.
pub fn textual(node: &DumpNode) -> String {
    use std::fmt::Write;
    let mut out = format!("{:08x}: {:016x}/{:x}", node.offset, node.prefix, node.pos);
    for (dirn, kind) in node.children.iter().enumerate() {
        match *kind {
            ChildSlot::Empty => {}
            ChildSlot::Child { node_offset } => {
                let _ = write!(out, " {dirn:x}->*{node_offset:x}");
            }
            ChildSlot::Inline { value } => {
                let _ = write!(out, " {dirn:x}->{value:x}");
            }
            ChildSlot::Boxed { value } => {
                let _ = write!(out, " {dirn:x}->{value:x}");
            }
        }
    }
    out
}

/// Render one [`DumpNode`] as Graphviz `dot` fragments: a record-shaped
/// node declaration followed by one edge per non-empty slot, mirroring
/// `imap_dump_node_gv`.
pub fn graphviz(node: &DumpNode) -> String {
    use std::fmt::Write;
    let mut out = format!(
        "\"N{:x}\" [shape=record label=\"{{{:016x} / {:x}|{{<0>0|<1>1|<2>2|<3>3|<4>4|<5>5|<6>6|<7>7|<8>8|<9>9|<A>A|<B>B|<C>C|<D>D|<E>E|<F>F}}}}\"]\n",
        node.offset, node.prefix, node.pos
    );
    for (dirn, kind) in node.children.iter().enumerate() {
        match *kind {
            ChildSlot::Empty => {}
            ChildSlot::Child { node_offset } => {
                let _ = writeln!(out, "\"N{:x}\":\"{:x}\":s->\"N{:x}\":n", node.offset, dirn, node_offset);
            }
            ChildSlot::Inline { value } => {
                let _ = writeln!(out, "\"N{:x}\":\"{:x}\":s->\"{:x}\":n", node.offset, dirn, value);
            }
            ChildSlot::Boxed { value } => {
                let _ = writeln!(out, "\"N{:x}\":\"{:x}\":s->\"{:x}\":n", node.offset, dirn, value);
            }
        }
    }
    out
}
