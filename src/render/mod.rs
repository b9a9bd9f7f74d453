//! Text rendering of the alive set.
//!
//! The renderer only reads cells through [`CellSet::bounds`] and
//! [`CellSet::contains`]; it never reaches into the engine.
//!
//! [`CellSet::bounds`]: crate::compute::CellSet::bounds
//! [`CellSet::contains`]: crate::compute::CellSet::contains

mod text;

pub use text::{render_cells, render_status};
