//! # gtin-cli
//!
//! Command-line wrapper around `gtin-core`.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          gtin (binary)                                  │
//! │                                                                         │
//! │  env (GTIN_*) ──► CliConfig ◄── flags (clap)                           │
//! │                       │                                                 │
//! │  args or stdin ──► run ──► Report::new ──► gtin_core::validate_gtin    │
//! │                       │                                                 │
//! │                       ├──► stdout: text / JSON lines                   │
//! │                       ├──► stderr: tracing                             │
//! │                       └──► exit code: 0 valid, 1 invalid, 2 error      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod report;
pub mod run;

pub use cli::Args;
pub use config::{CliConfig, OutputFormat};
pub use error::{CliError, CliResult};
pub use run::Summary;
