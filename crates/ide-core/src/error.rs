//! Error types for ide-core

use serde::{Deserialize, Serialize};

/// Result type for ide-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ide-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A command omitted its project root and no project is open
    #[error("no project is open in this session")]
    NoActiveProject,

    /// A host message that does not decode to a known command
    #[error("invalid command: {message}")]
    InvalidCommand { message: String },

    // Transparent wrappers for underlying crate errors
    /// Editing error from ide-content
    #[error(transparent)]
    Content(#[from] ide_content::Error),

    /// Manifest, listing or indexing error from ide-project
    #[error(transparent)]
    Project(#[from] ide_project::Error),

    /// Filesystem or configuration error from ide-fs
    #[error(transparent)]
    Fs(#[from] ide_fs::Error),
}

/// Failure category reported to the host.
///
/// Every failure the host may want to react to keeps its own kind; nothing
/// is folded into a generic failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    FileNotFound,
    FileRangeOutOfBounds,
    InvalidRange,
    ManifestMissing,
    ManifestMalformed,
    DependencyCacheUnavailable,
    NoActiveProject,
    InvalidCommand,
    Config,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoActiveProject => ErrorKind::NoActiveProject,
            Self::InvalidCommand { .. } => ErrorKind::InvalidCommand,
            Self::Content(err) => match err {
                ide_content::Error::FileNotFound { .. } => ErrorKind::FileNotFound,
                ide_content::Error::FileRangeOutOfBounds { .. } => ErrorKind::FileRangeOutOfBounds,
                ide_content::Error::InvalidRange { .. }
                | ide_content::Error::InvalidPosition { .. } => ErrorKind::InvalidRange,
                ide_content::Error::Io { .. } => ErrorKind::Io,
                ide_content::Error::Fs(err) => fs_kind(err),
            },
            Self::Project(err) => match err {
                ide_project::Error::ManifestMissing { .. } => ErrorKind::ManifestMissing,
                ide_project::Error::ManifestMalformed { .. } => ErrorKind::ManifestMalformed,
                ide_project::Error::DependencyCacheUnavailable { .. } => {
                    ErrorKind::DependencyCacheUnavailable
                }
                ide_project::Error::Fs(err) => fs_kind(err),
            },
            Self::Fs(err) => fs_kind(err),
        }
    }
}

fn fs_kind(err: &ide_fs::Error) -> ErrorKind {
    match err {
        ide_fs::Error::ConfigParse { .. }
        | ide_fs::Error::ConfigSerialize { .. }
        | ide_fs::Error::UnsupportedFormat { .. } => ErrorKind::Config,
        ide_fs::Error::Io { .. }
        | ide_fs::Error::NotADirectory { .. }
        | ide_fs::Error::LockFailed { .. } => ErrorKind::Io,
    }
}
