//! Error types for ide-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from ide-core
    #[error(transparent)]
    Core(#[from] ide_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Tracing subscriber could not be installed
    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },
}
