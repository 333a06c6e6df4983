//! Per-input report lines.
//!
//! ```text
//! text:  12345670        valid    GTIN-8
//!        12345678        invalid  check digit is not correct (expected 0, got 8)
//! json:  {"input":"12345670","is_valid":true,"error":null,"format":"gtin8"}
//! ```

use std::io::Write;

use gtin_core::{validate_gtin, GtinError, GtinFormat, Verdict};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::CliResult;

/// The outcome for one input, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report<'a> {
    pub input: &'a str,
    #[serde(flatten)]
    pub verdict: Verdict,
    pub format: Option<GtinFormat>,
    #[serde(skip)]
    pub reason: Option<GtinError>,
}

impl<'a> Report<'a> {
    /// Validates `input` and captures everything needed to print it.
    pub fn new(input: &'a str) -> Self {
        let result = validate_gtin(input);
        Report {
            input,
            verdict: Verdict::from(result),
            format: result.ok(),
            reason: result.err(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.verdict.is_valid
    }

    /// Writes this report as one line in `format`.
    pub fn write_to<W: Write>(&self, out: &mut W, format: OutputFormat) -> CliResult<()> {
        match format {
            OutputFormat::Text => self.write_text(out),
            OutputFormat::Json => self.write_json(out),
        }
    }

    fn write_text<W: Write>(&self, out: &mut W) -> CliResult<()> {
        match (self.format, self.reason) {
            (Some(format), _) => writeln!(out, "{}\tvalid\t{}", self.input, format)?,
            (None, Some(reason)) => writeln!(out, "{}\tinvalid\t{}", self.input, reason)?,
            (None, None) => writeln!(out, "{}\tinvalid", self.input)?,
        }
        Ok(())
    }

    fn write_json<W: Write>(&self, out: &mut W) -> CliResult<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtin_core::ErrorKind;

    fn render(input: &str, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        Report::new(input).write_to(&mut buf, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_report_captures_result() {
        let report = Report::new("1234567890128");
        assert!(report.is_valid());
        assert_eq!(report.format, Some(GtinFormat::Gtin13));
        assert_eq!(report.reason, None);

        let report = Report::new("12a");
        assert!(!report.is_valid());
        assert_eq!(report.verdict.error, Some(ErrorKind::InvalidCharacters));
        assert_eq!(report.reason, Some(GtinError::InvalidCharacters));
    }

    #[test]
    fn test_text_lines() {
        assert_eq!(render("12345670", OutputFormat::Text), "12345670\tvalid\tGTIN-8\n");
        assert_eq!(
            render("1234567", OutputFormat::Text),
            "1234567\tinvalid\tGTINs must be 8, 12, 13, or 14 digits long (got 7)\n"
        );
        assert_eq!(
            render("12345678", OutputFormat::Text),
            "12345678\tinvalid\tcheck digit is not correct (expected 0, got 8)\n"
        );
    }

    #[test]
    fn test_json_lines() {
        assert_eq!(
            render("00123456789012", OutputFormat::Json),
            "{\"input\":\"00123456789012\",\"is_valid\":true,\"error\":null,\"format\":\"gtin14\"}\n"
        );
        assert_eq!(
            render("", OutputFormat::Json),
            "{\"input\":\"\",\"is_valid\":false,\"error\":\"invalid_characters\",\"format\":null}\n"
        );
    }
}
