//! Per-job override record and its merge into the shared package config.

use super::model::PackageConfig;
use super::types::{ActionCommand, ActionName, NotificationsConfig, SourcesItem};
use crate::sync::SyncFilesItem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Package settings a job may override.
///
/// Every field mirrors one on [`PackageConfig`], wrapped in `Option`. A
/// field left unset inherits the shared value; a set field replaces it
/// wholesale. The merge is by field presence only; lists and maps are not
/// merged element-wise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specfile_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub synced_files: Option<Vec<SyncFilesItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_project_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_package_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_ref: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_tag_template: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_root_dir_template: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub downstream_package_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub downstream_project_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dist_git_base_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dist_git_namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_pr: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_changelog: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_sync_note: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_pr_in_ci: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_upstream_release_description: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_gpg_keys: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_source_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SourcesItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_generation_ignore_paths: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_generation_patch_id_digits: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<BTreeMap<ActionName, ActionCommand>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<NotificationsConfig>,
}

impl PackageConfigOverrides {
    /// Resolve these overrides against the shared package config.
    pub fn apply(&self, base: &PackageConfig) -> PackageConfig {
        PackageConfig {
            specfile_path: self
                .specfile_path
                .clone()
                .or_else(|| base.specfile_path.clone()),
            config_file_path: self
                .config_file_path
                .clone()
                .or_else(|| base.config_file_path.clone()),
            synced_files: self
                .synced_files
                .clone()
                .unwrap_or_else(|| base.synced_files.clone()),
            upstream_project_url: self
                .upstream_project_url
                .clone()
                .or_else(|| base.upstream_project_url.clone()),
            upstream_package_name: self
                .upstream_package_name
                .clone()
                .or_else(|| base.upstream_package_name.clone()),
            upstream_ref: self
                .upstream_ref
                .clone()
                .or_else(|| base.upstream_ref.clone()),
            upstream_tag_template: self
                .upstream_tag_template
                .clone()
                .unwrap_or_else(|| base.upstream_tag_template.clone()),
            archive_root_dir_template: self
                .archive_root_dir_template
                .clone()
                .unwrap_or_else(|| base.archive_root_dir_template.clone()),
            downstream_package_name: self
                .downstream_package_name
                .clone()
                .or_else(|| base.downstream_package_name.clone()),
            downstream_project_url: self
                .downstream_project_url
                .clone()
                .or_else(|| base.downstream_project_url.clone()),
            dist_git_base_url: self
                .dist_git_base_url
                .clone()
                .unwrap_or_else(|| base.dist_git_base_url.clone()),
            dist_git_namespace: self
                .dist_git_namespace
                .clone()
                .unwrap_or_else(|| base.dist_git_namespace.clone()),
            create_pr: self.create_pr.unwrap_or(base.create_pr),
            sync_changelog: self.sync_changelog.unwrap_or(base.sync_changelog),
            create_sync_note: self.create_sync_note.unwrap_or(base.create_sync_note),
            merge_pr_in_ci: self.merge_pr_in_ci.unwrap_or(base.merge_pr_in_ci),
            copy_upstream_release_description: self
                .copy_upstream_release_description
                .unwrap_or(base.copy_upstream_release_description),
            allowed_gpg_keys: self
                .allowed_gpg_keys
                .clone()
                .or_else(|| base.allowed_gpg_keys.clone()),
            spec_source_id: self
                .spec_source_id
                .clone()
                .unwrap_or_else(|| base.spec_source_id.clone()),
            sources: self.sources.clone().unwrap_or_else(|| base.sources.clone()),
            patch_generation_ignore_paths: self
                .patch_generation_ignore_paths
                .clone()
                .unwrap_or_else(|| base.patch_generation_ignore_paths.clone()),
            patch_generation_patch_id_digits: self
                .patch_generation_patch_id_digits
                .unwrap_or(base.patch_generation_patch_id_digits),
            actions: self.actions.clone().unwrap_or_else(|| base.actions.clone()),
            notifications: self
                .notifications
                .clone()
                .unwrap_or_else(|| base.notifications.clone()),
        }
    }
}
