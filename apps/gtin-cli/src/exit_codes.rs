//! Process exit codes. Part of the CLI's public contract.

pub const SUCCESS: u8 = 0;
pub const INVALID_INPUT: u8 = 1; // At least one input failed validation
pub const INTERNAL_ERROR: u8 = 2; // Usage, config or I/O failure
