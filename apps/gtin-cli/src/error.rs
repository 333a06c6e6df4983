//! Error types for the CLI.
//!
//! A rejected GTIN is not an error here: it is a report line and an exit
//! code. These variants cover the cases where the tool itself cannot run.

use crate::config::ConfigError;

/// CLI errors.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;
