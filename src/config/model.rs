//! Package configuration structs and default implementations.

use super::job::JobConfig;
use super::types::*;
use crate::sync::SyncFilesItem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Contents of `.weir.yaml`.
///
/// Package-level settings are flattened at the top level of the file;
/// `jobs` lists the automation entries, each of which may override any
/// package-level setting. Unknown fields in the YAML are ignored for
/// forward compatibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Package-level settings shared by every job.
    #[serde(flatten)]
    pub package: PackageConfig,

    /// Jobs the automation runs, each optionally overriding package settings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<JobConfig>,
}

/// Settings of a single package: where its spec file lives, how its files
/// map between the upstream and dist-git trees, and how both repositories
/// are reached.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    // =========================================================================
    // Paths and layout
    // =========================================================================
    /// Path to the package spec file, relative to the upstream repo root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specfile_path: Option<String>,

    /// Name of the configuration file itself, relative to the repo root.
    /// Normally filled in by the loader so the file can be kept in sync too.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_file_path: Option<String>,

    /// Files to copy from upstream to dist-git, in copy order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synced_files: Vec<SyncFilesItem>,

    // =========================================================================
    // Upstream settings
    // =========================================================================
    /// URL (or local path) of the upstream project repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_project_url: Option<String>,

    /// Package name in the upstream ecosystem (e.g. on PyPI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_package_name: Option<String>,

    /// Last upstream git ref the downstream history is based on (source-git).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_ref: Option<String>,

    /// Template used to construct an upstream tag name from a version.
    #[serde(default = "default_upstream_tag_template")]
    pub upstream_tag_template: String,

    /// Template for the root directory inside the source archive.
    #[serde(default = "default_archive_root_dir_template")]
    pub archive_root_dir_template: String,

    // =========================================================================
    // Downstream (dist-git) settings
    // =========================================================================
    /// Package name in dist-git.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downstream_package_name: Option<String>,

    /// Downstream project URL.
    ///
    /// Usually left unset: [`PackageConfig::downstream_project_url`] fills it
    /// with the dist-git package URL on first use and the value sticks from
    /// then on. An explicit value here is returned as-is, never recomputed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downstream_project_url: Option<String>,

    /// Base URL of the dist-git instance, including a trailing slash.
    #[serde(default = "default_dist_git_base_url")]
    pub dist_git_base_url: String,

    /// Namespace of the package inside dist-git (e.g. `rpms`).
    #[serde(default = "default_dist_git_namespace")]
    pub dist_git_namespace: String,

    // =========================================================================
    // Sync behavior
    // =========================================================================
    /// Open a pull request against dist-git instead of pushing directly.
    #[serde(default = "default_true")]
    pub create_pr: bool,

    /// Copy the upstream changelog into the downstream spec file.
    #[serde(default)]
    pub sync_changelog: bool,

    /// Add a note about the automation to the synced dist-git commit.
    #[serde(default = "default_true")]
    pub create_sync_note: bool,

    /// Let CI merge the downstream pull request once checks pass.
    #[serde(default = "default_true")]
    pub merge_pr_in_ci: bool,

    /// Use the upstream release description as the changelog entry.
    #[serde(default)]
    pub copy_upstream_release_description: bool,

    /// GPG key fingerprints allowed to sign upstream commits and tags.
    /// Unset disables signature checking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_gpg_keys: Option<Vec<String>>,

    // =========================================================================
    // Spec file and archive handling
    // =========================================================================
    /// Spec file source tag the upstream archive belongs to.
    #[serde(default = "default_spec_source_id")]
    pub spec_source_id: String,

    /// Explicitly pinned spec file sources.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourcesItem>,

    // =========================================================================
    // Patch generation
    // =========================================================================
    /// Path prefixes excluded when generating patches from commits.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patch_generation_ignore_paths: Vec<String>,

    /// Number of digits in generated patch numbers (e.g. 4 -> `Patch0001`).
    #[serde(default = "default_patch_id_digits")]
    pub patch_generation_patch_id_digits: u32,

    // =========================================================================
    // Hooks and notifications
    // =========================================================================
    /// Commands hooked into (or replacing) the built-in sync steps.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub actions: BTreeMap<ActionName, ActionCommand>,

    /// Notification settings for downstream operations.
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            specfile_path: None,
            config_file_path: None,
            synced_files: Vec::new(),
            upstream_project_url: None,
            upstream_package_name: None,
            upstream_ref: None,
            upstream_tag_template: default_upstream_tag_template(),
            archive_root_dir_template: default_archive_root_dir_template(),
            downstream_package_name: None,
            downstream_project_url: None,
            dist_git_base_url: default_dist_git_base_url(),
            dist_git_namespace: default_dist_git_namespace(),
            create_pr: default_true(),
            sync_changelog: false,
            create_sync_note: default_true(),
            merge_pr_in_ci: default_true(),
            copy_upstream_release_description: false,
            allowed_gpg_keys: None,
            spec_source_id: default_spec_source_id(),
            sources: Vec::new(),
            patch_generation_ignore_paths: Vec::new(),
            patch_generation_patch_id_digits: default_patch_id_digits(),
            actions: BTreeMap::new(),
            notifications: NotificationsConfig::default(),
        }
    }
}
