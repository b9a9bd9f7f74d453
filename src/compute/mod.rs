//! Compute module - Sparse Game of Life core.

mod cell_set;
mod engine;
mod neighbors;

pub use cell_set::*;
pub use engine::*;
pub use neighbors::*;
