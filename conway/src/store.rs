//! On-disk persistence of a single grid.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::Result;
use crate::grid::Grid;

/// Reads and writes one grid at a fixed path.
#[derive(Debug, Clone)]
pub struct GridStore {
    path: PathBuf,
}

impl GridStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Write `grid`, replacing any previous save only once the new one is complete.
    pub fn save(&self, grid: &Grid) -> Result<()> {
        let bytes = grid.encode()?;
        let staging = self.staging_path();
        let written = write_synced(&staging, &bytes).and_then(|()| fs::rename(&staging, &self.path));
        if let Err(err) = written {
            warn!(path = %self.path.display(), error = %err, "save failed");
            let _ = fs::remove_file(&staging);
            return Err(err.into());
        }
        info!(path = %self.path.display(), live = grid.live_cells(), "grid saved");
        Ok(())
    }

    pub fn load(&self) -> Result<Grid> {
        let bytes = fs::read(&self.path).inspect_err(|err| {
            warn!(path = %self.path.display(), error = %err, "load failed");
        })?;
        let grid = Grid::decode(&bytes).inspect_err(|err| {
            warn!(path = %self.path.display(), error = %err, "stored grid rejected");
        })?;
        info!(path = %self.path.display(), live = grid.live_cells(), "grid loaded");
        Ok(grid)
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_path_is_sibling() {
        let store = GridStore::new("/var/tmp/life/gamestate.dat");
        assert_eq!(store.staging_path(), PathBuf::from("/var/tmp/life/gamestate.dat.tmp"));
    }
}
