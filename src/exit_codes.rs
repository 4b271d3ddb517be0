//! Exit code constants for the weir CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing config, I/O)
//! - 2: Configuration failure (parse error or failed validation)
//! - 3: Git operation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing configuration, or I/O failure.
pub const USER_ERROR: i32 = 1;

/// Configuration failure: the config file could not be parsed or did not validate.
pub const CONFIG_FAILURE: i32 = 2;

/// Git operation failure: repository detection or git command errors.
pub const GIT_FAILURE: i32 = 3;
