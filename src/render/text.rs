//! Character-grid renderer and engine status block.

use std::fmt;

use crate::compute::{CellSet, Coord, SimulationEngine};
use crate::schema::RenderConfig;

/// Draw `cells` as rows of glyphs over their padded bounding box.
///
/// Rows are joined by `\n` with no trailing newline. An empty set renders
/// as an empty string.
pub fn render_cells(cells: &CellSet, config: &RenderConfig) -> String {
    let Some(bounds) = cells.bounds() else {
        return String::new();
    };
    let area = bounds.padded(i64::from(config.padding));

    let mut out = String::new();
    for row in area.min_row..=area.max_row {
        if row != area.min_row {
            out.push('\n');
        }
        for col in area.min_col..=area.max_col {
            if col != area.min_col {
                out.push_str(&config.separator);
            }
            out.push(if cells.contains(Coord::new(row, col)) {
                config.alive
            } else {
                config.dead
            });
        }
    }
    out
}

/// Generation, population and grid, separated by a blank line.
pub fn render_status(engine: &SimulationEngine, config: &RenderConfig) -> String {
    format!(
        "current time: {}\ncells alive: {}\n\n{}",
        engine.generation(),
        engine.population(),
        render_cells(engine.cells(), config)
    )
}

impl fmt::Display for SimulationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_status(self, &RenderConfig::default()))
    }
}

impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_cells(self, &RenderConfig::default()))
    }
}
