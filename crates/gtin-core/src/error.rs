//! # Error Types
//!
//! Validation error types for gtin-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gtin-core errors (this file)                                          │
//! │  ├── GtinError   - Why a candidate GTIN was rejected (with context)    │
//! │  └── ErrorKind   - The same classification, field-less and Copy        │
//! │                                                                         │
//! │  gtin-cli errors (separate crate)                                      │
//! │  └── CliError    - I/O, config and output failures                     │
//! │                                                                         │
//! │  Flow: GtinError ──► ErrorKind ──► Verdict ──► JSON / text report      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (length, digits)
//! 3. Errors are enum variants, never String
//! 4. The set of variants is closed: exactly one per validation stage

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// GTIN Error
// =============================================================================

/// Reasons a candidate GTIN is rejected.
///
/// Each variant corresponds to exactly one validation stage, and stages run
/// in declaration order. The first failing stage decides the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GtinError {
    /// The input is empty or contains something other than ASCII `0`-`9`.
    #[error("only digits are allowed")]
    InvalidCharacters,

    /// The input is all digits but not 8, 12, 13 or 14 of them.
    #[error("GTINs must be 8, 12, 13, or 14 digits long (got {length})")]
    InvalidLength { length: usize },

    /// Characters and length are fine, the final digit is wrong.
    ///
    /// ## When This Occurs
    /// ```text
    /// Scanner reads "12345678"
    ///      │
    ///      ▼
    /// Body "1234567" → checksum 60 → expected check digit 0
    ///      │
    ///      ▼
    /// InvalidCheckDigit { expected: 0, actual: 8 }
    /// ```
    #[error("check digit is not correct (expected {expected}, got {actual})")]
    InvalidCheckDigit { expected: u8, actual: u8 },
}

impl GtinError {
    /// Returns the field-less classification of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            GtinError::InvalidCharacters => ErrorKind::InvalidCharacters,
            GtinError::InvalidLength { .. } => ErrorKind::InvalidLength,
            GtinError::InvalidCheckDigit { .. } => ErrorKind::InvalidCheckDigit,
        }
    }
}

// =============================================================================
// Error Kind
// =============================================================================

/// Classification of a validation failure.
///
/// Serialized in snake_case (`"invalid_check_digit"`), which is what the
/// JSON output of the CLI and the generated TypeScript union use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ErrorKind {
    InvalidCharacters,
    InvalidLength,
    InvalidCheckDigit,
}

impl From<GtinError> for ErrorKind {
    fn from(err: GtinError) -> Self {
        err.kind()
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with GtinError.
pub type ValidationResult<T> = Result<T, GtinError>;

// =============================================================================
// Unit Tests
// =============================================================================
