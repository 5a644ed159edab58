//! Unified exit codes for the aha CLI.
//! These codes are part of the public contract for CI use.

pub const SUCCESS: i32 = 0;
pub const INVALID_VERDICT: i32 = 1; // validate: response failed the format check
pub const CONFIG_ERROR: i32 = 2; // config, IO, or other fatal error
