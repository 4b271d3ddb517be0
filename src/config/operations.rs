//! Config loading, validation, and derived-state operations.

use super::model::{Config, PackageConfig};
use crate::error::{Result, WeirError};
use crate::sync::{SyncFilesItem, iter_srcs};
use globset::Glob;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Regex pattern for spec file source tags.
static SPEC_SOURCE_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Source\d+$").expect("Invalid spec source id regex"));

/// Regex pattern for valid dist-git package names.
static PACKAGE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._+-]*$").expect("Invalid package name regex"));

/// Regex pattern for GPG key fingerprints (short id up to full fingerprint).
static GPG_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{8,40}$").expect("Invalid GPG key regex"));

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    /// The loaded file's name is recorded as `config_file_path` (relative, so
    /// the self-sync entry stays usable as a glob pattern) unless the file
    /// sets it explicitly.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the `.weir.yaml` file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(WeirError::UserError)` - Read failure
    /// * `Err(WeirError::ConfigError)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            WeirError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config = Self::from_yaml(&content)?;

        if config.package.config_file_path.is_none() {
            config.package.config_file_path = path
                .file_name()
                .and_then(|name| name.to_str())
                .map(str::to_string);
        }

        Ok(config)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| WeirError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| WeirError::ConfigError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate the shared settings and every job's resolved settings.
    pub fn validate(&self) -> Result<()> {
        self.package.validate()?;

        for (index, job) in self.jobs.iter().enumerate() {
            if let Err(err) = job.package_config(&self.package).validate() {
                return Err(WeirError::ConfigError(format!(
                    "jobs[{}] ({} on {}): {}",
                    index, job.job, job.trigger, err
                )));
            }
        }

        Ok(())
    }
}

impl PackageConfig {
    /// Validate config values and return an error on the first invalid one.
    ///
    /// Validation rules:
    /// - `synced_files` entries need at least one source; sources and
    ///   destinations must be non-empty, relative, and valid glob patterns
    /// - action commands must split cleanly into words
    /// - `spec_source_id` must look like `Source0`
    /// - `upstream_tag_template` must contain the `{version}` placeholder
    /// - `patch_generation_patch_id_digits` must be positive
    /// - `downstream_package_name` must be a valid dist-git package name
    /// - `allowed_gpg_keys` entries must be hexadecimal fingerprints
    pub fn validate(&self) -> Result<()> {
        for (index, item) in self.synced_files.iter().enumerate() {
            if item.src.is_empty() {
                return Err(WeirError::ConfigError(format!(
                    "config validation failed: synced_files[{}] must have at least one source",
                    index
                )));
            }
            for src in &item.src {
                if src.as_os_str().is_empty() {
                    return Err(WeirError::ConfigError(format!(
                        "config validation failed: synced_files[{}] sources must be non-empty",
                        index
                    )));
                }
                if src.is_absolute() {
                    return Err(WeirError::ConfigError(format!(
                        "config validation failed: synced_files[{}] source '{}' must be relative to the upstream tree",
                        index,
                        src.display()
                    )));
                }
                if let Err(e) = Glob::new(&src.to_string_lossy()) {
                    return Err(WeirError::ConfigError(format!(
                        "config validation failed: synced_files[{}] source '{}' is an invalid glob: {}",
                        index,
                        src.display(),
                        e
                    )));
                }
            }
            if item.dest.as_os_str().is_empty() {
                return Err(WeirError::ConfigError(format!(
                    "config validation failed: synced_files[{}] must have a destination",
                    index
                )));
            }
            if item.dest.is_absolute() {
                return Err(WeirError::ConfigError(format!(
                    "config validation failed: synced_files[{}] destination '{}' must be relative to the dist-git tree",
                    index,
                    item.dest.display()
                )));
            }
        }

        for (name, action) in &self.actions {
            for command in action.commands() {
                if let Err(e) = shell_words::split(command) {
                    return Err(WeirError::ConfigError(format!(
                        "config validation failed: action '{}' has an unparsable command '{}': {}",
                        name, command, e
                    )));
                }
            }
        }

        if !SPEC_SOURCE_ID_REGEX.is_match(&self.spec_source_id) {
            return Err(WeirError::ConfigError(format!(
                "config validation failed: spec_source_id must look like 'Source0' (found '{}')",
                self.spec_source_id
            )));
        }

        if !self.upstream_tag_template.contains("{version}") {
            return Err(WeirError::ConfigError(format!(
                "config validation failed: upstream_tag_template must contain the '{{version}}' placeholder (found '{}')",
                self.upstream_tag_template
            )));
        }

        if self.patch_generation_patch_id_digits == 0 {
            return Err(WeirError::ConfigError(
                "config validation failed: patch_generation_patch_id_digits must be greater than 0"
                    .to_string(),
            ));
        }

        if let Some(name) = &self.downstream_package_name
            && !PACKAGE_NAME_REGEX.is_match(name)
        {
            return Err(WeirError::ConfigError(format!(
                "config validation failed: downstream_package_name '{}' is not a valid dist-git package name",
                name
            )));
        }

        if let Some(keys) = &self.allowed_gpg_keys {
            for key in keys {
                if !GPG_KEY_REGEX.is_match(key) {
                    return Err(WeirError::ConfigError(format!(
                        "config validation failed: allowed_gpg_keys entries must be hexadecimal fingerprints (found '{}')",
                        key
                    )));
                }
            }
        }

        Ok(())
    }

    /// Construct the dist-git repository URL from its parts.
    ///
    /// This is the pure form of the computation; it never caches and
    /// degrades to a URL with an empty segment when the package name is
    /// unset (validation is the caller's concern).
    pub fn dist_git_package_url(&self) -> String {
        format!(
            "{}{}/{}.git",
            self.dist_git_base_url,
            self.dist_git_namespace,
            self.downstream_package_name.as_deref().unwrap_or_default()
        )
    }

    /// Downstream project URL, computed and cached on first use.
    ///
    /// An explicit `downstream_project_url` (from the config file or a job
    /// override) is returned as-is. Otherwise the first call stores
    /// [`Self::dist_git_package_url`] into the field and every later call
    /// returns that stored value, even if the URL parts change in between.
    pub fn downstream_project_url(&mut self) -> String {
        match &self.downstream_project_url {
            Some(url) => url.clone(),
            None => {
                let url = self.dist_git_package_url();
                self.downstream_project_url = Some(url.clone());
                url
            }
        }
    }

    /// Sync directive for the package's spec file.
    ///
    /// The downstream spec file name is `{downstream_package_name}.spec`,
    /// or the upstream file name when no package name is set. With
    /// `from_downstream` the source and destination swap to describe the
    /// reverse copy.
    pub fn specfile_sync_item(&self, from_downstream: bool) -> SyncFilesItem {
        let upstream = PathBuf::from(self.specfile_path.clone().unwrap_or_default());
        let downstream = match &self.downstream_package_name {
            Some(name) => PathBuf::from(format!("{}.spec", name)),
            None => upstream.file_name().map(PathBuf::from).unwrap_or_default(),
        };

        if from_downstream {
            SyncFilesItem {
                src: vec![downstream],
                dest: upstream,
            }
        } else {
            SyncFilesItem {
                src: vec![upstream],
                dest: downstream,
            }
        }
    }

    /// All files that must be kept in sync with dist-git.
    ///
    /// Extends `synced_files` in place and returns the full list: the spec
    /// file and then the config file are appended unless an existing entry
    /// already lists the same source path. Repeated calls do not duplicate
    /// entries because membership is re-checked against the current list.
    pub fn files_to_sync(&mut self) -> &[SyncFilesItem] {
        if let Some(specfile_path) = self.specfile_path.clone()
            && !iter_srcs(&self.synced_files).any(|src| src == Path::new(&specfile_path))
        {
            let item = self.specfile_sync_item(false);
            self.synced_files.push(item);
        }

        if let Some(config_file_path) = self.config_file_path.clone()
            && !iter_srcs(&self.synced_files).any(|src| src == Path::new(&config_file_path))
        {
            // Kept relative: glob resolution downstream rejects absolute patterns.
            self.synced_files.push(SyncFilesItem::identity(config_file_path));
        }

        &self.synced_files
    }
}
