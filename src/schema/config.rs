//! Configuration types for the driver loop and text renderer.

use serde::{Deserialize, Serialize};

fn default_delay_ms() -> u64 {
    100
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Pause between rendered generations, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Stop after this many generations even if not converged.
    /// `None` runs until convergence or interrupt.
    #[serde(default)]
    pub max_generations: Option<u64>,
    /// Text rendering options.
    #[serde(default)]
    pub render: RenderConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            max_generations: None,
            render: RenderConfig::default(),
        }
    }
}

/// Glyphs and layout for the character-grid renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Marker for an alive cell.
    pub alive: char,
    /// Filler for a dead cell.
    pub dead: char,
    /// Inserted between cells of a row.
    pub separator: String,
    /// Dead border drawn around the bounding box of alive cells.
    pub padding: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            alive: '@',
            dead: '.',
            separator: " ".to_string(),
            padding: 1,
        }
    }
}

impl SimulationConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.render.alive == self.render.dead {
            return Err(ConfigError::IndistinctGlyphs(self.render.alive));
        }
        if self.render.separator.contains('\n') {
            return Err(ConfigError::InvalidSeparator);
        }
        if self.max_generations == Some(0) {
            return Err(ConfigError::InvalidGenerationLimit);
        }
        Ok(())
    }
}

/// Configuration and seed validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Alive and dead glyphs must differ (both are {0:?})")]
    IndistinctGlyphs(char),
    #[error("Cell separator must not contain a newline")]
    InvalidSeparator,
    #[error("Generation limit must be non-zero")]
    InvalidGenerationLimit,
    #[error("Stamp {stamp} has soup density {density} outside [0, 1]")]
    InvalidDensity { stamp: usize, density: f64 },
    #[error("Stamp {stamp} has an empty soup area")]
    EmptySoup { stamp: usize },
}
