use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{CliError, Result};

/// Install the global subscriber.
///
/// Logs go to stderr so that stdout carries only command output. The level
/// comes from `RUST_LOG`, defaulting to "info"; `verbose` forces "debug".
pub fn init(verbose: bool) -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer = if verbose {
        EnvFilter::try_new("debug")
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))
    }
    .map_err(|e| CliError::Logging {
        message: e.to_string(),
    })?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::Logging {
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, info, warn};

    #[test]
    fn test_logging_init() {
        // Only one subscriber per process
        let _ = init(true);

        debug!("This is a debug message");
        info!("This is an info message");
        warn!("This is a warning message");
    }
}
