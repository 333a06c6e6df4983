//! # gtin-core: Pure GTIN Validation
//!
//! This crate validates Global Trade Item Numbers as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        GTIN Tools Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    gtin-cli (binary: gtin)                      │   │
//! │  │    args / stdin ──► validate ──► text or JSON lines ──► exit   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gtin-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────┐  ┌─────────────┐  ┌─────────────┐            │   │
//! │  │   │ validation  │  │    types    │  │    error    │            │   │
//! │  │   │  validate   │  │  Verdict    │  │  GtinError  │            │   │
//! │  │   │  checksum   │  │  Gtin       │  │  ErrorKind  │            │   │
//! │  │   └─────────────┘  └─────────────┘  └─────────────┘            │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`validation`] - The three-stage validator
//! - [`types`] - `GtinFormat`, `Verdict`, and the validated `Gtin` newtype
//! - [`error`] - `GtinError` and its `ErrorKind` classification
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same verdict, safe from any thread
//! 2. **No I/O**: file system, network and logging stay in the CLI
//! 3. **Closed Errors**: exactly three failure kinds, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use gtin_core::{validate, ErrorKind};
//!
//! let verdict = validate("00123456789012");
//! assert!(verdict.is_valid);
//! assert_eq!(verdict.error, None);
//!
//! let verdict = validate("123456789019");
//! assert!(!verdict.is_valid);
//! assert_eq!(verdict.error, Some(ErrorKind::InvalidCheckDigit));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ErrorKind, GtinError, ValidationResult};
pub use types::{Gtin, GtinFormat, Verdict};
pub use validation::{validate, validate_gtin};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Width of the longest GTIN.
///
/// Shorter GTINs are checksummed as if left-padded with zeros to this width.
pub const GTIN14_LENGTH: usize = 14;
