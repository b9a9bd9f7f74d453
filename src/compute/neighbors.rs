//! Moore neighborhood on the integer lattice.
//!
//! Candidate generation and live-neighbor counting both go through
//! [`neighbors`], so the two always agree on what "adjacent" means.

use super::{CellSet, Coord};

/// Offsets `{-1, 0, 1} x {-1, 0, 1}` without the origin.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The cells adjacent to `c`: all 8 of them, except on the `i64` edge where
/// the ones past the edge are skipped.
#[inline]
pub fn neighbors(c: Coord) -> impl Iterator<Item = Coord> {
    NEIGHBOR_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| c.checked_offset(d_row, d_col))
}

/// Count of `c`'s neighbors present in `alive`.
#[inline]
pub fn live_neighbor_count(alive: &CellSet, c: Coord) -> usize {
    neighbors(c).filter(|&n| alive.contains(n)).count()
}
