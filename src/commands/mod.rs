//! Command implementations for weir.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod init;
mod plan;
mod validate_cmd;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Init(args) => init::cmd_init(args),
        Command::Validate(args) => validate_cmd::cmd_validate(args),
        Command::Plan(args) => plan::cmd_plan(args),
    }
}
