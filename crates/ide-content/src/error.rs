//! Error types for ide-content

use std::path::PathBuf;

use crate::position::Position;

/// Result type for ide-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ide-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Range ends on line {line} but the file has {line_count} lines")]
    FileRangeOutOfBounds { line: usize, line_count: usize },

    #[error("Invalid range: start {from} is after end {to}")]
    InvalidRange { from: Position, to: Position },

    #[error("Invalid position '{input}': expected LINE:COLUMN")]
    InvalidPosition { input: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Fs(#[from] ide_fs::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
