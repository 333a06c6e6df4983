//! # Domain Types
//!
//! Types produced by the validator.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   GtinFormat    │   │     Verdict     │   │      Gtin       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Gtin8          │   │  is_valid       │   │  validated      │       │
//! │  │  Gtin12 (UPC-A) │   │  error (kind)   │   │  digit string   │       │
//! │  │  Gtin13 (EAN)   │   └─────────────────┘   └─────────────────┘       │
//! │  │  Gtin14         │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Parse, Don't Validate
//! A [`Gtin`] can only be built through the validator, so code holding one
//! never has to check it again.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ErrorKind, GtinError, ValidationResult};
use crate::validation::{last_digit, validate_gtin};
use crate::GTIN14_LENGTH;

// =============================================================================
// GTIN Format
// =============================================================================

/// The four accepted GTIN widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum GtinFormat {
    /// 8 digits (EAN-8).
    Gtin8,
    /// 12 digits (UPC-A).
    Gtin12,
    /// 13 digits (EAN-13).
    Gtin13,
    /// 14 digits (ITF-14 / case codes).
    Gtin14,
}

impl GtinFormat {
    /// Maps a digit count to its format, `None` for any other length.
    #[inline]
    pub const fn from_len(len: usize) -> Option<Self> {
        match len {
            8 => Some(GtinFormat::Gtin8),
            12 => Some(GtinFormat::Gtin12),
            13 => Some(GtinFormat::Gtin13),
            14 => Some(GtinFormat::Gtin14),
            _ => None,
        }
    }

    /// Number of digits, check digit included.
    #[inline]
    pub const fn digit_count(&self) -> usize {
        match self {
            GtinFormat::Gtin8 => 8,
            GtinFormat::Gtin12 => 12,
            GtinFormat::Gtin13 => 13,
            GtinFormat::Gtin14 => 14,
        }
    }
}

impl fmt::Display for GtinFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GTIN-{}", self.digit_count())
    }
}

// =============================================================================
// Verdict
// =============================================================================

/// Outcome of validating one candidate.
///
/// `is_valid` is true exactly when `error` is `None`. Build it with
/// [`Verdict::VALID`], [`Verdict::invalid`] or `From<ValidationResult<_>>`.
///
/// ## JSON Shape
/// ```text
/// { "is_valid": true,  "error": null }
/// { "is_valid": false, "error": "invalid_length" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Verdict {
    pub is_valid: bool,
    pub error: Option<ErrorKind>,
}

impl Verdict {
    /// The verdict for a candidate that passed every stage.
    pub const VALID: Verdict = Verdict {
        is_valid: true,
        error: None,
    };

    /// The verdict for a candidate rejected with `kind`.
    #[inline]
    pub const fn invalid(kind: ErrorKind) -> Self {
        Verdict {
            is_valid: false,
            error: Some(kind),
        }
    }
}

impl<T> From<ValidationResult<T>> for Verdict {
    fn from(result: ValidationResult<T>) -> Self {
        match result {
            Ok(_) => Verdict::VALID,
            Err(err) => Verdict::invalid(err.kind()),
        }
    }
}

// =============================================================================
// Gtin
// =============================================================================

/// A GTIN that has passed validation.
///
/// ## Example
/// ```rust
/// use gtin_core::{Gtin, GtinFormat};
///
/// let gtin: Gtin = "4006381333931".parse().unwrap();
/// assert_eq!(gtin.format(), GtinFormat::Gtin13);
/// assert_eq!(gtin.check_digit(), 1);
/// assert_eq!(gtin.to_gtin14(), "04006381333931");
///
/// assert!("4006381333932".parse::<Gtin>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gtin {
    digits: String,
    format: GtinFormat,
}

impl Gtin {
    /// The digits exactly as supplied.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Width of this GTIN, as reported by the validator.
    #[inline]
    pub fn format(&self) -> GtinFormat {
        self.format
    }

    /// The final digit.
    #[inline]
    pub fn check_digit(&self) -> u8 {
        last_digit(&self.digits)
    }

    /// The same item in 14-digit form, left-padded with zeros.
    ///
    /// Padding never changes validity: leading zeros contribute nothing to
    /// the checksum.
    pub fn to_gtin14(&self) -> String {
        format!("{:0>width$}", self.digits, width = GTIN14_LENGTH)
    }
}

impl FromStr for Gtin {
    type Err = GtinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.to_string().try_into()
    }
}

impl TryFrom<String> for Gtin {
    type Error = GtinError;

    fn try_from(digits: String) -> Result<Self, Self::Error> {
        let format = validate_gtin(&digits)?;
        Ok(Gtin { digits, format })
    }
}

impl TryFrom<&str> for Gtin {
    type Error = GtinError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Gtin> for String {
    fn from(gtin: Gtin) -> Self {
        gtin.digits
    }
}

impl AsRef<str> for Gtin {
    fn as_ref(&self) -> &str {
        &self.digits
    }
}

impl fmt::Display for Gtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_len() {
        assert_eq!(GtinFormat::from_len(8), Some(GtinFormat::Gtin8));
        assert_eq!(GtinFormat::from_len(14), Some(GtinFormat::Gtin14));
        assert_eq!(GtinFormat::from_len(0), None);
        assert_eq!(GtinFormat::from_len(11), None);
        assert_eq!(GtinFormat::from_len(15), None);

        for len in [8, 12, 13, 14] {
            assert_eq!(GtinFormat::from_len(len).map(|f| f.digit_count()), Some(len));
        }
    }

    #[test]
    fn test_format_display() {
        assert_eq!(GtinFormat::Gtin8.to_string(), "GTIN-8");
        assert_eq!(GtinFormat::Gtin13.to_string(), "GTIN-13");
    }

    #[test]
    fn test_verdict_from_result() {
        let ok: ValidationResult<()> = Ok(());
        assert_eq!(Verdict::from(ok), Verdict::VALID);

        let err: ValidationResult<()> = Err(GtinError::InvalidLength { length: 3 });
        let verdict = Verdict::from(err);
        assert!(!verdict.is_valid);
        assert_eq!(verdict.error, Some(ErrorKind::InvalidLength));
    }

    #[test]
    fn test_verdict_json() {
        let json = serde_json::to_string(&Verdict::VALID).unwrap();
        assert_eq!(json, r#"{"is_valid":true,"error":null}"#);

        let json = serde_json::to_string(&Verdict::invalid(ErrorKind::InvalidCharacters)).unwrap();
        assert_eq!(json, r#"{"is_valid":false,"error":"invalid_characters"}"#);
    }

    #[test]
    fn test_gtin_parse() {
        let gtin: Gtin = "12345670".parse().unwrap();
        assert_eq!(gtin.as_str(), "12345670");
        assert_eq!(gtin.format(), GtinFormat::Gtin8);
        assert_eq!(gtin.check_digit(), 0);
        assert_eq!(gtin.to_gtin14(), "00000012345670");

        assert_eq!(
            "12345678".parse::<Gtin>(),
            Err(GtinError::InvalidCheckDigit {
                expected: 0,
                actual: 8
            })
        );
        assert_eq!(Gtin::try_from(""), Err(GtinError::InvalidCharacters));
    }

    #[test]
    fn test_gtin_format_matches_validator() {
        for raw in ["96385074", "036000291452", "4006381333931", "04006381333931"] {
            let gtin: Gtin = raw.parse().unwrap();
            assert_eq!(Ok(gtin.format()), validate_gtin(raw));
            assert_eq!(gtin.format().digit_count(), raw.len());
        }
    }

    #[test]
    fn test_gtin14_form_stays_valid() {
        for raw in ["12345670", "123456789012", "1234567890128", "12345678901231"] {
            let gtin = Gtin::try_from(raw.to_string()).unwrap();
            let padded = gtin.to_gtin14();
            assert_eq!(padded.len(), GTIN14_LENGTH);
            assert_eq!(padded.parse::<Gtin>().unwrap().format(), GtinFormat::Gtin14);
        }
    }

    #[test]
    fn test_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Gtin>();
        assert_send_sync::<Verdict>();
        assert_send_sync::<GtinError>();
    }

    #[test]
    fn test_gtin_serde() {
        let gtin: Gtin = serde_json::from_str("\"036000291452\"").unwrap();
        assert_eq!(gtin.format(), GtinFormat::Gtin12);
        assert_eq!(serde_json::to_string(&gtin).unwrap(), "\"036000291452\"");

        assert!(serde_json::from_str::<Gtin>("\"036000291453\"").is_err());
        assert!(serde_json::from_str::<Gtin>("\"not a gtin\"").is_err());
    }
}
