//! Per-job configuration: what to run, when, and with which overrides.

use super::model::PackageConfig;
use super::overrides::PackageConfigOverrides;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of work a job performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    /// Take a new upstream release downstream: update the spec file,
    /// sync files, and open a pull request against dist-git.
    ProposeDownstream,
    /// Pull downstream spec file changes back into the upstream tree.
    SyncFromDownstream,
}

impl JobType {
    /// Parse a job type from its configuration spelling.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "propose_downstream" => Some(Self::ProposeDownstream),
            "sync_from_downstream" => Some(Self::SyncFromDownstream),
            _ => None,
        }
    }

    /// Configuration spelling of this job type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProposeDownstream => "propose_downstream",
            Self::SyncFromDownstream => "sync_from_downstream",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event that triggers a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobTrigger {
    /// A new upstream release was published.
    Release,
    /// A commit landed on the tracked branch.
    Commit,
    /// A pull request was opened or updated.
    PullRequest,
}

impl JobTrigger {
    /// Parse a trigger from its configuration spelling.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "release" => Some(Self::Release),
            "commit" => Some(Self::Commit),
            "pull_request" => Some(Self::PullRequest),
            _ => None,
        }
    }

    /// Configuration spelling of this trigger.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::Commit => "commit",
            Self::PullRequest => "pull_request",
        }
    }
}

impl fmt::Display for JobTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One job entry from `.weir.yaml`.
///
/// Override fields are flattened, so a job can restate any package-level
/// setting inline:
///
/// ```yaml
/// jobs:
///   - job: propose_downstream
///     trigger: release
///     dist_git_namespace: staging
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    /// What this job does.
    pub job: JobType,

    /// When this job runs.
    pub trigger: JobTrigger,

    /// Package settings overridden for this job only.
    #[serde(flatten)]
    pub overrides: PackageConfigOverrides,
}

impl JobConfig {
    /// Package configuration effective for this job.
    pub fn package_config(&self, base: &PackageConfig) -> PackageConfig {
        self.overrides.apply(base)
    }
}
