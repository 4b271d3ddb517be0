//! Filesystem utilities for weir.
//!
//! The only operation needed is an atomic file write: content goes to a
//! temporary file in the target's directory, is synced, and then renamed
//! over the target. `weir init` writes the config this way so a crash
//! never leaves a half-written `.weir.yaml`.

use crate::error::{Result, WeirError};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write a string to a file.
///
/// The temporary file lives in the same directory as the target, so the
/// final rename stays on one filesystem and is atomic.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| {
        WeirError::UserError(format!(
            "failed to create temporary file in '{}': {}",
            dir.display(),
            e
        ))
    })?;

    file.write_all(content.as_bytes())
        .and_then(|_| file.as_file().sync_all())
        .map_err(|e| WeirError::UserError(format!("failed to write temporary file: {}", e)))?;

    file.persist(path).map_err(|e| {
        WeirError::UserError(format!("failed to write '{}': {}", path.display(), e))
    })?;

    Ok(())
}
