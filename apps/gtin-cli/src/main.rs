//! # gtin
//!
//! Validates GTINs given as arguments, or one per line on stdin.
//!
//! ## Usage
//! ```bash
//! gtin 4006381333931 036000291452
//! cat gtins.txt | gtin --format json
//! GTIN_LOG=debug gtin -q 12345670 && echo ok
//! ```

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use gtin_cli::{exit_codes, logging, run, Args, CliConfig};

fn main() -> ExitCode {
    let args = Args::parse();

    match try_main(args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            // Logging may not be initialized yet
            eprintln!("{}", fatal_line(&e));
            ExitCode::from(exit_codes::INTERNAL_ERROR)
        }
    }
}

fn try_main(args: Args) -> anyhow::Result<u8> {
    let config = CliConfig::load()
        .and_then(|config| config.with_args(&args))
        .context("loading configuration")?;

    logging::init(&config.log_filter).context("initializing logging")?;
    info!(format = %config.output_format, quiet = config.quiet, "Configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = if args.gtins.is_empty() {
        run::run(run::from_reader(io::stdin().lock()), &config, &mut out)
    } else {
        run::run(run::from_args(args.gtins), &config, &mut out)
    };
    let summary = result.context("validating input")?;

    Ok(summary.exit_code())
}

fn fatal_line(e: &anyhow::Error) -> String {
    format!("gtin: {e:#}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_failure_reaches_stderr_line() {
        let result = gtin_cli::config::CliConfig::from_lookup(|key| {
            (key == gtin_cli::config::FORMAT_VAR).then(|| "xml".to_string())
        })
        .context("loading configuration");

        let err = result.unwrap_err();
        assert_eq!(
            fatal_line(&err),
            "gtin: loading configuration: Invalid value for GTIN_FORMAT"
        );
    }
}
