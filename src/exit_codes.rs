//! Exit code constants for the campgen CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing inputs, no session)
//! - 2: Configuration failure (missing API key, invalid config)
//! - 3: Model failure (network, authentication, safety block)
//! - 4: Filesystem failure (report or session write)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or missing campaign inputs.
pub const USER_ERROR: i32 = 1;

/// Configuration failure: missing API key or invalid config values.
pub const CONFIG_FAILURE: i32 = 2;

/// Model failure: the generation request did not produce text.
pub const MODEL_FAILURE: i32 = 3;

/// Filesystem failure: a report or session file could not be written or read.
pub const IO_FAILURE: i32 = 4;
