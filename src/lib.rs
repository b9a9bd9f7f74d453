//! Sparse Life - Conway's Game of Life on an unbounded grid.
//!
//! Alive cells are stored in a hash set of integer coordinates, so the plane
//! has no edges and memory scales with population rather than area. Each
//! step evaluates only the alive cells and their neighbors.
//!
//! # Architecture
//!
//! - `schema`: Configuration types and seed stamps (block, blinker, glider, ...)
//! - `compute`: The cell set, neighbor rule and simulation engine
//! - `render`: Character-grid output for terminals
//!
//! # Example
//!
//! ```rust
//! use sparse_life::{
//!     compute::SimulationEngine,
//!     schema::{Pattern, Stamp},
//! };
//!
//! let mut engine = SimulationEngine::new();
//! engine.stamp(&Stamp::new(Pattern::Glider, 0, 0));
//!
//! let before = engine.cells().clone();
//! engine.run(4);
//!
//! // A glider moves one cell diagonally every four generations.
//! assert_eq!(engine.cells(), &before.translated(1, 1));
//! assert!(!engine.is_finished());
//! ```

pub mod compute;
pub mod render;
pub mod schema;

// Re-export commonly used types
pub use compute::{CellSet, Coord, SimulationEngine, SimulationStats};
pub use schema::{Pattern, Seed, SimulationConfig, Stamp};
