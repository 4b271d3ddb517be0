//! Error types for the weir CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for weir operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum WeirError {
    /// User provided invalid arguments or the system is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// Configuration could not be parsed or failed validation.
    #[error("{0}")]
    ConfigError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),
}

impl WeirError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            WeirError::UserError(_) => exit_codes::USER_ERROR,
            WeirError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            WeirError::GitError(_) => exit_codes::GIT_FAILURE,
        }
    }
}

/// Result type alias for weir operations.
pub type Result<T> = std::result::Result<T, WeirError>;
