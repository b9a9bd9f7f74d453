//! Sparse set of alive cells on an unbounded integer lattice.

use std::collections::HashSet;
use std::collections::hash_set;

use serde::{Deserialize, Serialize};

/// A cell position `(row, col)` on the infinite plane.
///
/// Any `i64` pair can hold a cell. Neighbors that would fall outside the
/// `i64` range do not exist, so a cell on that edge simply has fewer of them;
/// [`offset`](Self::offset) itself is unchecked and is meant for stamps and
/// translations within that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i64,
    pub col: i64,
}

impl Coord {
    #[inline]
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Coordinate shifted by `(d_row, d_col)`.
    #[inline]
    pub const fn offset(self, d_row: i64, d_col: i64) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Coordinate shifted by `(d_row, d_col)`, or `None` past the `i64` edge.
    #[inline]
    pub const fn checked_offset(self, d_row: i64, d_col: i64) -> Option<Self> {
        match (self.row.checked_add(d_row), self.col.checked_add(d_col)) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }
}

impl From<(i64, i64)> for Coord {
    #[inline]
    fn from((row, col): (i64, i64)) -> Self {
        Self { row, col }
    }
}

impl From<Coord> for (i64, i64) {
    #[inline]
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

/// Inclusive bounding box of a set of coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_row: i64,
    pub max_row: i64,
    pub min_col: i64,
    pub max_col: i64,
}

impl Bounds {
    /// Box grown by `padding` cells on every side.
    pub fn padded(self, padding: i64) -> Self {
        Self {
            min_row: self.min_row.saturating_sub(padding),
            max_row: self.max_row.saturating_add(padding),
            min_col: self.min_col.saturating_sub(padding),
            max_col: self.max_col.saturating_add(padding),
        }
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        (self.min_row..=self.max_row).contains(&c.row)
            && (self.min_col..=self.max_col).contains(&c.col)
    }

    fn include(&mut self, c: Coord) {
        self.min_row = self.min_row.min(c.row);
        self.max_row = self.max_row.max(c.row);
        self.min_col = self.min_col.min(c.col);
        self.max_col = self.max_col.max(c.col);
    }
}

/// Unordered collection of alive cells.
///
/// A coordinate is present at most once; absence means dead. Equality is
/// set-equality, so two sets built in different orders compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellSet {
    alive: HashSet<Coord>,
}

impl CellSet {
    /// Create an empty set (every cell dead).
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.alive.contains(&c)
    }

    /// Flip the state of `c`: remove it if alive, insert it otherwise.
    pub fn toggle(&mut self, c: Coord) {
        if !self.alive.remove(&c) {
            self.alive.insert(c);
        }
    }

    /// Mark `c` alive. Returns `true` if it was previously dead.
    #[inline]
    pub fn insert(&mut self, c: Coord) -> bool {
        self.alive.insert(c)
    }

    /// Mark `c` dead. Returns `true` if it was previously alive.
    #[inline]
    pub fn remove(&mut self, c: Coord) -> bool {
        self.alive.remove(&c)
    }

    /// Iterate over alive cells in unspecified order.
    pub fn iter(&self) -> hash_set::Iter<'_, Coord> {
        self.alive.iter()
    }

    /// Number of alive cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.alive.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    /// Tight bounding box of the alive cells, or `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut iter = self.alive.iter();
        let first = *iter.next()?;
        let mut bounds = Bounds {
            min_row: first.row,
            max_row: first.row,
            min_col: first.col,
            max_col: first.col,
        };
        for &c in iter {
            bounds.include(c);
        }
        Some(bounds)
    }

    /// The same set shifted by `(d_row, d_col)`.
    pub fn translated(&self, d_row: i64, d_col: i64) -> Self {
        self.alive.iter().map(|c| c.offset(d_row, d_col)).collect()
    }
}

impl FromIterator<Coord> for CellSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            alive: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(i64, i64)> for CellSet {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        iter.into_iter().map(Coord::from).collect()
    }
}

impl Extend<Coord> for CellSet {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        self.alive.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = &'a Coord;
    type IntoIter = hash_set::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.alive.iter()
    }
}

impl IntoIterator for CellSet {
    type Item = Coord;
    type IntoIter = hash_set::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.alive.into_iter()
    }
}
