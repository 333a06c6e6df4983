//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, then overridden by command-line flags.

use std::env;
use std::fmt;
use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use crate::cli::Args;

/// Env var selecting the output format.
pub const FORMAT_VAR: &str = "GTIN_FORMAT";

/// Env var holding the log filter directive.
pub const LOG_VAR: &str = "GTIN_LOG";

/// Log filter used when neither the flag nor the env var is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// How each verdict is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated `input  valid|invalid  detail`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue(FORMAT_VAR.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Output format for verdicts
    pub output_format: OutputFormat,

    /// `tracing` filter directive, e.g. `warn` or `gtin_cli=debug`
    pub log_filter: String,

    /// Suppress all stdout output
    pub quiet: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            output_format: OutputFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            quiet: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_format = match lookup(FORMAT_VAR) {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        let log_filter = match lookup(LOG_VAR) {
            Some(value) => parse_log_filter(&value, LOG_VAR)?,
            None => DEFAULT_LOG_FILTER.to_string(),
        };

        Ok(CliConfig {
            output_format,
            log_filter,
            quiet: false,
        })
    }

    /// Apply command-line overrides. Flags win over env vars.
    pub fn with_args(mut self, args: &Args) -> Result<Self, ConfigError> {
        if let Some(format) = args.format {
            self.output_format = format;
        }
        if let Some(level) = &args.log_level {
            self.log_filter = parse_log_filter(level, "--log-level")?;
        }
        self.quiet = args.quiet;
        Ok(self)
    }
}

fn parse_log_filter(value: &str, source: &str) -> Result<String, ConfigError> {
    let value = value.trim();
    if value.is_empty() || EnvFilter::try_new(value).is_err() {
        return Err(ConfigError::InvalidValue(source.to_string()));
    }
    Ok(value.to_string())
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config = CliConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_env_values_are_read() {
        let config =
            CliConfig::from_lookup(lookup_from(&[("GTIN_FORMAT", "JSON"), ("GTIN_LOG", "debug")]))
                .unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_env_values_are_rejected() {
        let err = CliConfig::from_lookup(lookup_from(&[("GTIN_FORMAT", "xml")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for GTIN_FORMAT");

        let err = CliConfig::from_lookup(lookup_from(&[("GTIN_LOG", "")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for GTIN_LOG");
    }

    #[test]
    fn test_flags_override_env() {
        let config =
            CliConfig::from_lookup(lookup_from(&[("GTIN_FORMAT", "json"), ("GTIN_LOG", "info")]))
                .unwrap();
        let args = Args::parse_from(["gtin", "--format", "text", "--log-level", "trace", "-q"]);

        let config = config.with_args(&args).unwrap();
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.log_filter, "trace");
        assert!(config.quiet);
    }

    #[test]
    fn test_env_kept_without_flags() {
        let config = CliConfig::from_lookup(lookup_from(&[("GTIN_FORMAT", "json")])).unwrap();
        let args = Args::parse_from(["gtin", "12345670"]);

        let config = config.with_args(&args).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(!config.quiet);
    }
}
