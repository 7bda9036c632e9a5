//! Error taxonomy for the arena allocator.
//!
//! Only out-of-memory conditions are surfaced as [`MapError`]; everything
//! else the original design calls a "contract violation" (a stale
//! [`crate::map::SlotRef`], mixing value widths on one tree, growing
//! without a matching [`crate::map::IntMap::reserve`]) is a caller bug and
//! is checked with `debug_assert!` at the call site instead, the same
//! split the teacher's arena allocators use for `ArenaAllocError`.

/// The hard ceiling on arena capacity, in bytes.
///
/// The original C implementation enforces `0x2000_0000` here; this crate
/// follows the spec's explicit `2^31` figure instead (see `DESIGN.md`).
pub const MAX_ARENA_BYTES: u32 = 0x8000_0000;

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("requested arena capacity exceeds the {0}-byte ceiling")]
    CapacityExceeded(u32),
    #[error("global allocator refused to allocate {requested} bytes")]
    AllocFailed { requested: usize },
}
