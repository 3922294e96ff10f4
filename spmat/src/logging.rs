//! Logging setup for the shell binary
//!
//! Diagnostics go to stderr through `tracing`, leaving stdout for printed
//! cell values.

use tracing_subscriber::EnvFilter;

use crate::error::{Result, ShellError};

/// Default filter when neither `RUST_LOG` nor an explicit level is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Build the filter for the subscriber
///
/// `RUST_LOG` takes precedence over `level` when it is set and valid.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(level).map_err(|e| ShellError::Logging(format!("{level:?}: {e}")))
}

/// Install the global fmt subscriber writing to stderr
pub fn init_logging(level: &str) -> Result<()> {
    let filter = build_filter(level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| ShellError::Logging(e.to_string()))
}
