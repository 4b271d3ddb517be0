//! Configuration value types and defaults for weir.
//!
//! This module defines enums, constants, and default value functions
//! used by the package configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Production dist-git instance used when `DISTGIT_URL` is not set.
pub const PROD_DISTGIT_URL: &str = "https://src.fedoraproject.org/";

/// Dist-git namespace used when `DISTGIT_NAMESPACE` is not set.
pub const DISTGIT_NAMESPACE: &str = "rpms";

/// Environment variable overriding the default dist-git base URL.
pub const DISTGIT_URL_ENV: &str = "DISTGIT_URL";

/// Environment variable overriding the default dist-git namespace.
pub const DISTGIT_NAMESPACE_ENV: &str = "DISTGIT_NAMESPACE";

/// Recognized configuration file names, probed in order at the repo root.
pub const CONFIG_FILE_NAMES: &[&str] = &[".weir.yaml", ".weir.yml", "weir.yaml", "weir.yml"];

/// Hook points where user-supplied commands replace or augment built-in steps.
///
/// The configuration spelling is kebab-case, e.g. `post-upstream-clone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionName {
    /// Runs right after the upstream repository is prepared.
    PostUpstreamClone,
    /// Replaces the built-in upstream version discovery.
    GetCurrentVersion,
    /// Replaces the built-in source archive creation.
    CreateArchive,
    /// Replaces patch generation from upstream commits.
    CreatePatches,
    /// Replaces the whole spec file update step.
    PrepareFiles,
    /// Runs after the spec file is updated, before changes are committed.
    FixSpec,
}

impl ActionName {
    /// Parse an action name from its configuration spelling.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "post-upstream-clone" => Some(Self::PostUpstreamClone),
            "get-current-version" => Some(Self::GetCurrentVersion),
            "create-archive" => Some(Self::CreateArchive),
            "create-patches" => Some(Self::CreatePatches),
            "prepare-files" => Some(Self::PrepareFiles),
            "fix-spec" => Some(Self::FixSpec),
            _ => None,
        }
    }

    /// Configuration spelling of this action name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PostUpstreamClone => "post-upstream-clone",
            Self::GetCurrentVersion => "get-current-version",
            Self::CreateArchive => "create-archive",
            Self::CreatePatches => "create-patches",
            Self::PrepareFiles => "prepare-files",
            Self::FixSpec => "fix-spec",
        }
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command(s) attached to an action hook.
///
/// A single string runs as one command; a list runs each entry in order.
/// Commands are shell-words parsed by the runner, not handed to a shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionCommand {
    /// One command.
    Single(String),
    /// Several commands, run in order.
    Sequence(Vec<String>),
}

impl ActionCommand {
    /// The command strings in execution order.
    pub fn commands(&self) -> &[String] {
        match self {
            ActionCommand::Single(command) => std::slice::from_ref(command),
            ActionCommand::Sequence(commands) => commands,
        }
    }

    /// Argument vectors for each command, split with shell quoting rules.
    ///
    /// This is the form the action runner consumes; config validation has
    /// already checked that the split succeeds for loaded configs.
    pub fn to_argv(&self) -> Result<Vec<Vec<String>>, shell_words::ParseError> {
        self.commands().iter().map(|c| shell_words::split(c)).collect()
    }
}

/// Notification toggles applied after downstream operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    /// Pull request notification settings.
    pub pull_request: PullRequestNotificationsConfig,
}

/// Notification toggles for downstream pull requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullRequestNotificationsConfig {
    /// Comment on the pull request once a successful build exists.
    #[serde(default = "default_true")]
    pub successful_build: bool,
}

impl Default for PullRequestNotificationsConfig {
    fn default() -> Self {
        Self {
            successful_build: true,
        }
    }
}

/// One explicitly pinned spec file source.
///
/// Overrides where the archive referenced by the spec file is fetched from,
/// instead of deriving the URL from the upstream release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesItem {
    /// Source file name as referenced by the spec file.
    pub path: String,

    /// URL the source is downloaded from.
    pub url: String,
}

// Default value functions for serde
pub(crate) fn default_true() -> bool {
    true
}
pub(crate) fn default_spec_source_id() -> String {
    "Source0".to_string()
}
pub(crate) fn default_upstream_tag_template() -> String {
    "{version}".to_string()
}
pub(crate) fn default_archive_root_dir_template() -> String {
    "{upstream_pkg_name}-{version}".to_string()
}
pub(crate) fn default_patch_id_digits() -> u32 {
    4
}

/// Dist-git base URL: the `DISTGIT_URL` environment variable when set,
/// the production instance otherwise. Read once, when a config record is
/// constructed; the resulting field is never re-checked against the
/// environment.
pub(crate) fn default_dist_git_base_url() -> String {
    std::env::var(DISTGIT_URL_ENV).unwrap_or_else(|_| PROD_DISTGIT_URL.to_string())
}

/// Dist-git namespace: the `DISTGIT_NAMESPACE` environment variable when
/// set, `rpms` otherwise. Same construction-time semantics as the base URL.
pub(crate) fn default_dist_git_namespace() -> String {
    std::env::var(DISTGIT_NAMESPACE_ENV).unwrap_or_else(|_| DISTGIT_NAMESPACE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_name_round_trips_through_str() {
        let all = [
            ActionName::PostUpstreamClone,
            ActionName::GetCurrentVersion,
            ActionName::CreateArchive,
            ActionName::CreatePatches,
            ActionName::PrepareFiles,
            ActionName::FixSpec,
        ];
        for name in all {
            assert_eq!(ActionName::from_str(name.as_str()), Some(name));
        }
        assert_eq!(ActionName::from_str("unknown-action"), None);
    }

    #[test]
    fn action_name_display_uses_kebab_case() {
        assert_eq!(
            ActionName::PostUpstreamClone.to_string(),
            "post-upstream-clone"
        );
        assert_eq!(ActionName::FixSpec.to_string(), "fix-spec");
    }

    #[test]
    fn action_command_single_yields_one_command() {
        let action = ActionCommand::Single("make archive".to_string());
        assert_eq!(action.commands(), ["make archive"]);
    }

    #[test]
    fn action_command_sequence_preserves_order() {
        let action = ActionCommand::Sequence(vec![
            "make clean".to_string(),
            "make archive".to_string(),
        ]);
        assert_eq!(action.commands(), ["make clean", "make archive"]);
    }

    #[test]
    fn action_command_to_argv_splits_quoted_words() {
        let action = ActionCommand::Single(r#"sed -i "s/a b/c d/" pkg.spec"#.to_string());
        let argv = action.to_argv().unwrap();
        assert_eq!(argv, vec![vec!["sed", "-i", "s/a b/c d/", "pkg.spec"]]);

        let broken = ActionCommand::Single("sed 'unterminated".to_string());
        assert!(broken.to_argv().is_err());
    }

    #[test]
    fn action_command_parses_both_shapes() {
        let single: ActionCommand = serde_yaml::from_str("make archive").unwrap();
        assert_eq!(single, ActionCommand::Single("make archive".to_string()));

        let sequence: ActionCommand = serde_yaml::from_str("[make clean, make archive]").unwrap();
        assert_eq!(sequence.commands().len(), 2);
    }

    #[test]
    fn pull_request_notifications_default_on() {
        let notifications = NotificationsConfig::default();
        assert!(notifications.pull_request.successful_build);
    }
}
