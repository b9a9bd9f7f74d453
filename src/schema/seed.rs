//! Seed types for initializing Life simulations.
//!
//! A seed is a list of stamps. Each stamp places a named pattern at an
//! anchor by toggling every offset cell, so stamps that overlap cancel on
//! the cells they share.

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::compute::{CellSet, Coord};

/// 2x2 still life.
pub const BLOCK: &[(i64, i64)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];
/// Period-2 oscillator, horizontal phase, centered on the anchor.
pub const BLINKER: &[(i64, i64)] = &[(0, -1), (0, 0), (0, 1)];
/// Smallest spaceship; travels one cell down-right every four generations.
pub const GLIDER: &[(i64, i64)] = &[(-1, 0), (0, 1), (1, -1), (1, 0), (1, 1)];
/// Methuselah that stabilizes after 1103 generations.
pub const R_PENTOMINO: &[(i64, i64)] = &[(-1, 0), (-1, 1), (0, -1), (0, 0), (1, 0)];

/// Complete seed specification for simulation initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    /// Stamps applied in order.
    pub stamps: Vec<Stamp>,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            stamps: vec![
                Stamp::new(Pattern::Block, 0, 0),
                Stamp::new(Pattern::Blinker, 5, 1),
                Stamp::new(Pattern::Glider, 1, 5),
                Stamp::new(Pattern::RPentomino, 12, 12),
            ],
        }
    }
}

/// A pattern placed at an anchor `(row, col)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stamp {
    pub pattern: Pattern,
    pub anchor: (i64, i64),
}

/// Predefined patterns for initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    Block,
    Blinker,
    Glider,
    RPentomino,
    /// Explicit `(row, col)` offsets from the anchor.
    Custom { cells: Vec<(i64, i64)> },
    /// Random fill of a `height x width` rectangle whose top-left is the anchor.
    Soup {
        width: u32,
        height: u32,
        /// Probability that a cell is set (0.0-1.0).
        density: f64,
        /// Random seed; the same seed always yields the same soup.
        seed: u64,
    },
}

impl Pattern {
    /// Human-readable pattern name.
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Block => "block",
            Pattern::Blinker => "blinker",
            Pattern::Glider => "glider",
            Pattern::RPentomino => "r-pentomino",
            Pattern::Custom { .. } => "custom",
            Pattern::Soup { .. } => "soup",
        }
    }

    /// Offsets relative to the anchor, in application order.
    pub fn offsets(&self) -> Vec<(i64, i64)> {
        match self {
            Pattern::Block => BLOCK.to_vec(),
            Pattern::Blinker => BLINKER.to_vec(),
            Pattern::Glider => GLIDER.to_vec(),
            Pattern::RPentomino => R_PENTOMINO.to_vec(),
            Pattern::Custom { cells } => cells.clone(),
            Pattern::Soup {
                width,
                height,
                density,
                seed,
            } => soup_offsets(*width, *height, *density, *seed),
        }
    }
}

impl Stamp {
    pub fn new(pattern: Pattern, row: i64, col: i64) -> Self {
        Self {
            pattern,
            anchor: (row, col),
        }
    }

    /// Absolute cells this stamp toggles.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + use<> {
        let anchor = Coord::from(self.anchor);
        self.pattern
            .offsets()
            .into_iter()
            .map(move |(d_row, d_col)| anchor.offset(d_row, d_col))
    }

    /// Toggle every cell of the stamp in `cells`.
    pub fn apply(&self, cells: &mut CellSet) {
        for c in self.cells() {
            cells.toggle(c);
        }
    }
}

impl Seed {
    /// Build the initial alive set by applying every stamp to an empty set.
    pub fn to_cells(&self) -> CellSet {
        let mut cells = CellSet::new();
        for stamp in &self.stamps {
            stamp.apply(&mut cells);
        }
        cells
    }

    /// Validate stamp parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, stamp) in self.stamps.iter().enumerate() {
            if let Pattern::Soup {
                width,
                height,
                density,
                ..
            } = stamp.pattern
            {
                if !(0.0..=1.0).contains(&density) {
                    return Err(ConfigError::InvalidDensity { stamp: i, density });
                }
                if width == 0 || height == 0 {
                    return Err(ConfigError::EmptySoup { stamp: i });
                }
            }
        }
        Ok(())
    }
}

fn soup_offsets(width: u32, height: u32, density: f64, seed: u64) -> Vec<(i64, i64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut offsets = Vec::new();
    for row in 0..i64::from(height) {
        for col in 0..i64::from(width) {
            if rng.gen_range(0.0..1.0) < density {
                offsets.push((row, col));
            }
        }
    }
    offsets
}
