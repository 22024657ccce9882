use std::path::PathBuf;

/// Errors raised while reading a project or assembling its index.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No manifest at `<project root>/elm.json`.
    #[error("project manifest not found: {path}")]
    ManifestMissing { path: PathBuf },

    /// The manifest is not valid JSON or lacks a required key.
    #[error("malformed project manifest at {path}: {message}")]
    ManifestMalformed { path: PathBuf, message: String },

    /// The package cache root does not exist or cannot be read.
    #[error("dependency cache unavailable at {path}")]
    DependencyCacheUnavailable { path: PathBuf },

    /// Filesystem failure while walking or reading files.
    #[error(transparent)]
    Fs(#[from] ide_fs::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
