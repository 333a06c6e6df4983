//! The validation loop: inputs in, report lines out.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::exit_codes;
use crate::report::Report;

/// Counts collected over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub valid: usize,
}

impl Summary {
    pub fn invalid(&self) -> usize {
        self.total - self.valid
    }

    /// `SUCCESS` when every input was valid, `INVALID_INPUT` otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.invalid() == 0 {
            exit_codes::SUCCESS
        } else {
            exit_codes::INVALID_INPUT
        }
    }
}

/// Validates each input and writes one report line per input to `out`.
///
/// Stops at the first I/O error from `inputs` or `out`.
pub fn run<I, W>(inputs: I, config: &CliConfig, out: &mut W) -> CliResult<Summary>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let mut summary = Summary::default();

    for input in inputs {
        let input = input?;
        let report = Report::new(&input);

        debug!(
            len = input.len(),
            valid = report.is_valid(),
            error = ?report.verdict.error,
            "Validated input"
        );

        summary.total += 1;
        if report.is_valid() {
            summary.valid += 1;
        }

        if !config.quiet {
            report.write_to(out, config.output_format)?;
        }
    }

    out.flush()?;

    info!(
        total = summary.total,
        valid = summary.valid,
        invalid = summary.invalid(),
        "Validation complete"
    );

    Ok(summary)
}

/// Positional arguments as an input source.
pub fn from_args(gtins: Vec<String>) -> impl Iterator<Item = io::Result<String>> {
    gtins.into_iter().map(Ok)
}

/// One candidate per line; only the line terminator is removed.
///
/// Lines that are not UTF-8 are still yielded (with replacement characters),
/// so they fail the character stage instead of aborting the run.
pub fn from_reader<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n').map(|line| {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Ok(String::from_utf8(line)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
    })
}
