//! Package configuration model for weir.
//!
//! This module defines the structs behind `.weir.yaml`: the shared package
//! settings, per-job overrides, and the operations that derive dist-git
//! URLs and the effective file sync list. It supports forward-compatible
//! YAML parsing (unknown fields are ignored), sensible defaults for
//! optional fields, and validation of config values.

mod job;
mod model;
mod operations;
mod overrides;
pub mod types;


// Re-export public API
pub use job::{JobConfig, JobTrigger, JobType};
pub use model::{Config, PackageConfig};
pub use overrides::PackageConfigOverrides;
pub use types::{
    ActionCommand, ActionName, NotificationsConfig, PullRequestNotificationsConfig, SourcesItem,
};
