//! Git command runner for weir.
//!
//! Weir only needs git to locate the repository root; everything it reads
//! and writes lives in the working tree. All git invocations go through
//! this module so failures surface as one error shape.

use crate::error::{Result, WeirError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Run a git command and return its trimmed stdout.
///
/// A non-zero exit maps to [`WeirError::GitError`] with stderr folded into
/// the message.
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .current_dir(cwd.as_ref())
        .args(args)
        .output()
        .map_err(|e| {
            WeirError::GitError(format!(
                "failed to execute git {}: {} (is git installed?)",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();

    if output.status.success() {
        Ok(stdout)
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let message = if stderr.is_empty() { stdout } else { stderr };

        Err(WeirError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            output.status.code().unwrap_or(-1),
            message
        )))
    }
}

/// Repository root via `git rev-parse --show-toplevel`.
///
/// Works from any directory inside the repository. Running outside a git
/// repository is a clean user error (exit 1), not a git failure (exit 3).
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    match run_git(cwd, &["rev-parse", "--show-toplevel"]) {
        Ok(stdout) => Ok(PathBuf::from(stdout)),
        Err(WeirError::GitError(message)) if message.contains("not a git repository") => {
            Err(WeirError::UserError(
                "not inside a git repository. Run this command from within a git repository."
                    .to_string(),
            ))
        }
        Err(err) => Err(err),
    }
}
