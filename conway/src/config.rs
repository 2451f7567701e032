//! Simulation configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Fixed period between generations while running.
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Well-known save location, relative to the working directory.
pub const DEFAULT_SAVE_FILE: &str = "gamestate.dat";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Where `save` writes and `load` reads the grid.
    pub save_path: PathBuf,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_FILE),
        }
    }
}

impl SimulationConfig {
    #[must_use]
    pub fn with_save_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.save_path = path.as_ref().to_path_buf();
        self
    }
}
