//! A compact ordered map from `u64` keys to payload values.
//!
//! The core data structure is a 16-ary radix trie ("digit" = 4 bits of the
//! key) whose nodes are packed into exactly 64 bytes and allocated from a
//! single contiguous, 64-byte-aligned arena. A tagged 32-bit slot encoding
//! lets small values live inline in the trie and larger ones live in
//! out-of-line value cells recycled from the same arena.
//!
//! Two overlays are built purely on the core map's public contract:
//! [`set`] (a sparse bitset over `u64` elements) and [`interval`] (a map
//! from non-overlapping half-open `u64` intervals to a payload).
//!
//! This crate is single-threaded and synchronous: no operation blocks,
//! yields, or performs I/O except [`dump`], which calls into a
//! caller-supplied sink.

pub mod arena;
pub mod dump;
pub mod error;
pub mod interval;
pub mod map;
pub mod node;
pub mod set;
pub mod slot;

pub use error::MapError;
pub use interval::IntervalMap;
pub use map::{Iter, IntMap, Pair, SlotRef, ValueWidth};
pub use set::IntSet;
