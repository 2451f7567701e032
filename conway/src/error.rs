//! Error types for the simulation core.

use thiserror::Error;

use crate::grid::{GRID_HEIGHT, GRID_WIDTH};

/// Errors raised by grid access and persistence.
#[derive(Error, Debug)]
pub enum LifeError {
    /// A coordinate outside the grid. Raised as a panic payload, never returned:
    /// it means the input collaborator is miswired.
    #[error("cell ({x}, {y}) is outside the {}x{} grid", GRID_WIDTH, GRID_HEIGHT)]
    OutOfRange { x: usize, y: usize },

    /// Storage could not be read or written
    #[error("storage failure: {0}")]
    Io(#[from] std::io::Error),

    /// Stored snapshot has the wrong shape or cannot be parsed
    #[error("corrupt grid data: {0}")]
    CorruptData(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, LifeError>;

impl LifeError {
    /// True for failures of the underlying storage rather than of its content.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl From<serde_json::Error> for LifeError {
    fn from(err: serde_json::Error) -> Self {
        match err.io_error_kind() {
            Some(kind) => Self::Io(std::io::Error::new(kind, err)),
            None => Self::CorruptData(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = LifeError::OutOfRange { x: 40, y: 3 };
        assert_eq!(err.to_string(), "cell (40, 3) is outside the 40x40 grid");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LifeError = io_err.into();
        assert!(err.is_io());
    }

    #[test]
    fn test_json_syntax_error_is_corrupt() {
        let json_err = serde_json::from_str::<Vec<bool>>("[true,").unwrap_err();
        let err: LifeError = json_err.into();
        assert!(matches!(err, LifeError::CorruptData(_)));
    }
}
