//! # Validation Module
//!
//! The GTIN validator.
//!
//! ## Validation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Stages                                  │
//! │                                                                         │
//! │  Stage 1: Characters                                                   │
//! │  ├── Non-empty, ASCII '0'-'9' only                                     │
//! │  └── Fail → InvalidCharacters                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Stage 2: Length                                                       │
//! │  ├── 8, 12, 13 or 14 digits                                            │
//! │  └── Fail → InvalidLength                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Stage 3: Check digit                                                  │
//! │  ├── Weighted checksum over the body, in a 13-digit frame              │
//! │  └── Fail → InvalidCheckDigit                                          │
//! │                                                                         │
//! │  First failure wins. Later stages never see malformed input.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gtin_core::validation::{validate, validate_gtin};
//! use gtin_core::{ErrorKind, GtinFormat};
//!
//! assert_eq!(validate_gtin("1234567890128"), Ok(GtinFormat::Gtin13));
//!
//! let verdict = validate("1234567890123");
//! assert!(!verdict.is_valid);
//! assert_eq!(verdict.error, Some(ErrorKind::InvalidCheckDigit));
//! ```

use crate::error::{GtinError, ValidationResult};
use crate::types::{GtinFormat, Verdict};
use crate::GTIN14_LENGTH;

// =============================================================================
// Public Entry Points
// =============================================================================

/// Validates a candidate GTIN and returns a [`Verdict`].
///
/// This is the `(is_valid, error)` form of [`validate_gtin`]; both always
/// agree.
///
/// ## Example
/// ```rust
/// use gtin_core::validation::validate;
/// use gtin_core::ErrorKind;
///
/// assert!(validate("12345670").is_valid);
/// assert_eq!(validate("").error, Some(ErrorKind::InvalidCharacters));
/// assert_eq!(validate("1234567").error, Some(ErrorKind::InvalidLength));
/// ```
pub fn validate(input: &str) -> Verdict {
    Verdict::from(validate_gtin(input))
}

/// Validates a candidate GTIN, returning its format on success.
///
/// ## Rules
/// - Must not be empty
/// - Must contain only ASCII digits (no spaces, dashes, or Unicode digits)
/// - Must be 8, 12, 13 or 14 digits long
/// - The final digit must match the checksum of the preceding digits
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Barcode scanned / GTIN typed in                                        │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_gtin("4006381333931") ← THIS FUNCTION                        │
/// │       │                                                                 │
/// │       ├── "40063813339x1"? → InvalidCharacters                         │
/// │       │                                                                 │
/// │       ├── "40063813339"?  → InvalidLength { length: 11 }               │
/// │       │                                                                 │
/// │       ├── "4006381333932"? → InvalidCheckDigit { expected: 1, .. }     │
/// │       │                                                                 │
/// │       └── OK → Ok(GtinFormat::Gtin13)                                  │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_gtin(input: &str) -> ValidationResult<GtinFormat> {
    if !contains_only_digits(input) {
        return Err(GtinError::InvalidCharacters);
    }

    // All ASCII from here on, so byte length == character count
    let format = GtinFormat::from_len(input.len()).ok_or(GtinError::InvalidLength {
        length: input.len(),
    })?;

    let expected = calculate_check_digit(input);
    let actual = last_digit(input);
    if expected != actual {
        return Err(GtinError::InvalidCheckDigit { expected, actual });
    }

    Ok(format)
}

// =============================================================================
// Stage Helpers
// =============================================================================

fn contains_only_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Weighted sum of every digit except the last.
///
/// The body is right-aligned in a 13-position frame (left-padded with zeros
/// up to GTIN-14 width). Frame positions alternate weight 3, 1, 3, ...
/// starting from frame position 0, so the digit right before the check digit
/// always gets weight 3 whatever the input length.
///
/// Callers must have passed the character and length stages.
pub(crate) fn calculate_checksum(gtin: &str) -> u32 {
    debug_assert!(GtinFormat::from_len(gtin.len()).is_some());

    let padding = GTIN14_LENGTH - gtin.len();
    let body = &gtin.as_bytes()[..gtin.len() - 1];

    body.iter()
        .enumerate()
        .map(|(i, &b)| {
            let digit = u32::from(b - b'0');
            if (padding + i) % 2 == 0 {
                digit * 3
            } else {
                digit
            }
        })
        .sum()
}

/// Distance from the checksum up to the next multiple of ten (0 if already one).
pub(crate) fn calculate_check_digit(gtin: &str) -> u8 {
    let checksum = calculate_checksum(gtin);
    ((10 - checksum % 10) % 10) as u8
}

pub(crate) fn last_digit(gtin: &str) -> u8 {
    gtin.as_bytes()[gtin.len() - 1] - b'0'
}

// =============================================================================
// Unit Tests
// =============================================================================
