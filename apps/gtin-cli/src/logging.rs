//! Tracing setup. Logs go to stderr; stdout carries only report lines.

use tracing_subscriber::EnvFilter;

use crate::error::{CliError, CliResult};

/// Installs the global fmt subscriber with `filter` as its directive.
pub fn init(filter: &str) -> CliResult<()> {
    let filter = EnvFilter::try_new(filter).map_err(|e| CliError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
