//! Repository context resolution for weir.
//!
//! Commands that read the configuration need two things: the upstream
//! repository root (found with git from any working directory) and the
//! config file inside it. The config file is discovered by probing the
//! recognized names at the repo root, in order; an explicit `--config`
//! path skips discovery entirely.

use crate::config::types::CONFIG_FILE_NAMES;
use crate::error::{Result, WeirError};
use crate::git;
use std::env;
use std::path::{Path, PathBuf};

/// Resolved location of the upstream repository.
#[derive(Debug, Clone)]
pub struct RepoContext {
    /// Absolute path to the repository root.
    pub repo_root: PathBuf,
}

impl RepoContext {
    /// Resolve the repository context from the current working directory.
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            WeirError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(&cwd)
    }

    /// Resolve the repository context from a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P) -> Result<Self> {
        let repo_root = git::get_repo_root(cwd)?;
        Ok(Self { repo_root })
    }

    /// Find the config file at the repo root, trying each recognized name.
    pub fn find_config_file(&self) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| self.repo_root.join(name))
            .find(|path| path.is_file())
    }

    /// Where `weir init` writes a new config file.
    pub fn default_config_path(&self) -> PathBuf {
        self.repo_root.join(CONFIG_FILE_NAMES[0])
    }
}

/// Locate the config file: an explicit path when given, discovery otherwise.
pub fn locate_config(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(WeirError::UserError(format!(
            "config file '{}' not found",
            path.display()
        )));
    }

    let ctx = RepoContext::resolve()?;
    ctx.find_config_file().ok_or_else(|| {
        WeirError::UserError(format!(
            "no configuration found in '{}' (looked for {}).\n\
             Run `weir init` to create one.",
            ctx.repo_root.display(),
            CONFIG_FILE_NAMES.join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{DirGuard, create_test_repo};
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_from_repo_root() {
        let temp_dir = create_test_repo();
        let ctx = RepoContext::resolve_from(temp_dir.path()).unwrap();

        let expected = temp_dir.path().canonicalize().unwrap();
        assert_eq!(ctx.repo_root.canonicalize().unwrap(), expected);
    }

    #[test]
    fn test_resolve_from_subdirectory() {
        let temp_dir = create_test_repo();
        let subdir = temp_dir.path().join("src").join("nested");
        std::fs::create_dir_all(&subdir).unwrap();

        let ctx = RepoContext::resolve_from(&subdir).unwrap();

        let expected = temp_dir.path().canonicalize().unwrap();
        assert_eq!(ctx.repo_root.canonicalize().unwrap(), expected);
    }

    #[test]
    fn test_resolve_outside_repo_fails() {
        let temp_dir = TempDir::new().unwrap(); // Not a git repo
        let result = RepoContext::resolve_from(temp_dir.path());

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, WeirError::UserError(_)));
        assert!(err.to_string().contains("not inside a git repository"));
    }

    #[test]
    fn test_find_config_file_none_by_default() {
        let temp_dir = create_test_repo();
        let ctx = RepoContext::resolve_from(temp_dir.path()).unwrap();

        assert_eq!(ctx.find_config_file(), None);
    }

    #[test]
    fn test_find_config_file_probes_names_in_order() {
        let temp_dir = create_test_repo();
        let ctx = RepoContext::resolve_from(temp_dir.path()).unwrap();

        std::fs::write(temp_dir.path().join("weir.yml"), "{}\n").unwrap();
        let found = ctx.find_config_file().unwrap();
        assert!(found.ends_with("weir.yml"));

        // The dotted spelling wins over the bare one.
        std::fs::write(temp_dir.path().join(".weir.yaml"), "{}\n").unwrap();
        let found = ctx.find_config_file().unwrap();
        assert!(found.ends_with(".weir.yaml"));
    }

    #[test]
    fn test_default_config_path() {
        let temp_dir = create_test_repo();
        let ctx = RepoContext::resolve_from(temp_dir.path()).unwrap();

        assert!(ctx.default_config_path().ends_with(".weir.yaml"));
    }

    #[test]
    fn test_locate_config_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.yaml");
        std::fs::write(&path, "{}\n").unwrap();

        let located = locate_config(Some(&path)).unwrap();
        assert_eq!(located, path);
    }

    #[test]
    fn test_locate_config_explicit_path_missing() {
        let result = locate_config(Some(Path::new("/nonexistent/weir.yaml")));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    #[serial]
    fn test_locate_config_discovers_from_cwd() {
        let temp_dir = create_test_repo();
        std::fs::write(temp_dir.path().join(".weir.yaml"), "{}\n").unwrap();
        let _guard = DirGuard::new(temp_dir.path());

        let located = locate_config(None).unwrap();
        assert!(located.ends_with(".weir.yaml"));
    }

    #[test]
    #[serial]
    fn test_locate_config_reports_missing_with_hint() {
        let temp_dir = create_test_repo();
        let _guard = DirGuard::new(temp_dir.path());

        let result = locate_config(None);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("no configuration found"));
        assert!(err.to_string().contains("weir init"));
    }
}
