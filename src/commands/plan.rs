//! Implementation of the `weir plan` command.
//!
//! Builds and prints the sync plan: the resolved downstream project URL
//! and the effective file list a sync run would copy. `--from-downstream`
//! previews the reverse direction, where only the spec file flows from
//! dist-git back into the upstream tree.

use crate::cli::PlanArgs;
use crate::config::Config;
use crate::context::locate_config;
use crate::error::{Result, WeirError};
use crate::sync::SyncFilesItem;
use serde::Serialize;

/// What a sync run would do, in either direction.
#[derive(Debug, Serialize)]
pub(super) struct SyncPlan {
    pub downstream_project_url: String,
    pub files_to_sync: Vec<SyncFilesItem>,
}

impl SyncPlan {
    /// Build the plan from a loaded config.
    ///
    /// `job` selects one entry of `jobs` and resolves its overrides against
    /// the shared settings; without it the shared settings are planned
    /// directly.
    pub(super) fn build(config: &Config, job: Option<usize>, from_downstream: bool) -> Result<Self> {
        let mut package = match job {
            Some(index) => {
                let job = config.jobs.get(index).ok_or_else(|| {
                    WeirError::UserError(format!(
                        "no job at index {} (config has {} jobs)",
                        index,
                        config.jobs.len()
                    ))
                })?;
                job.package_config(&config.package)
            }
            None => config.package.clone(),
        };

        let downstream_project_url = package.downstream_project_url();

        let files_to_sync = if from_downstream {
            // Only the spec file is pulled back from dist-git.
            match package.specfile_path {
                Some(_) => vec![package.specfile_sync_item(true)],
                None => Vec::new(),
            }
        } else {
            package.files_to_sync().to_vec()
        };

        Ok(Self {
            downstream_project_url,
            files_to_sync,
        })
    }
}

/// Execute the `weir plan` command.
pub fn cmd_plan(args: PlanArgs) -> Result<()> {
    let path = locate_config(args.config.as_deref())?;
    let config = Config::load(&path)?;

    let plan = SyncPlan::build(&config, args.job, args.from_downstream)?;

    if args.json {
        let json = serde_json::to_string_pretty(&plan).map_err(|e| {
            WeirError::UserError(format!("failed to serialize plan to JSON: {}", e))
        })?;
        println!("{}", json);
        return Ok(());
    }

    println!("Downstream project URL: {}", plan.downstream_project_url);
    println!();
    if plan.files_to_sync.is_empty() {
        println!("Nothing to sync.");
    } else {
        let direction = if args.from_downstream {
            "dist-git -> upstream"
        } else {
            "upstream -> dist-git"
        };
        println!("Files to sync ({}):", direction);
        for item in &plan.files_to_sync {
            println!("  {}", item);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_config() -> Config {
        Config::from_yaml(
            r#"
specfile_path: a.spec
config_file_path: .weir.yaml
downstream_package_name: beer
dist_git_base_url: https://src.example.org/
dist_git_namespace: rpms
jobs:
  - job: propose_downstream
    trigger: release
  - job: sync_from_downstream
    trigger: commit
    dist_git_namespace: staging
"#,
        )
        .unwrap()
    }

    #[test]
    fn plan_resolves_url_and_files() {
        let config = sample_config();
        let plan = SyncPlan::build(&config, None, false).unwrap();

        assert_eq!(
            plan.downstream_project_url,
            "https://src.example.org/rpms/beer.git"
        );
        assert_eq!(plan.files_to_sync.len(), 2);
        assert_eq!(plan.files_to_sync[0].src, vec![PathBuf::from("a.spec")]);
        assert_eq!(plan.files_to_sync[0].dest, PathBuf::from("beer.spec"));
        assert_eq!(
            plan.files_to_sync[1],
            SyncFilesItem::identity(".weir.yaml")
        );
    }

    #[test]
    fn plan_does_not_mutate_the_loaded_config() {
        let config = sample_config();
        SyncPlan::build(&config, None, false).unwrap();

        // The builder works on a clone; planning twice yields the same list.
        assert!(config.package.synced_files.is_empty());
        let again = SyncPlan::build(&config, None, false).unwrap();
        assert_eq!(again.files_to_sync.len(), 2);
    }

    #[test]
    fn plan_with_job_applies_overrides() {
        let config = sample_config();
        let plan = SyncPlan::build(&config, Some(1), false).unwrap();

        assert_eq!(
            plan.downstream_project_url,
            "https://src.example.org/staging/beer.git"
        );
    }

    #[test]
    fn plan_with_bad_job_index_is_user_error() {
        let config = sample_config();
        let result = SyncPlan::build(&config, Some(5), false);

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("no job at index 5"));
        assert!(err.to_string().contains("2 jobs"));
    }

    #[test]
    fn plan_from_downstream_reverses_the_spec_file() {
        let config = sample_config();
        let plan = SyncPlan::build(&config, None, true).unwrap();

        assert_eq!(plan.files_to_sync.len(), 1);
        assert_eq!(plan.files_to_sync[0].src, vec![PathBuf::from("beer.spec")]);
        assert_eq!(plan.files_to_sync[0].dest, PathBuf::from("a.spec"));
    }

    #[test]
    fn plan_from_downstream_without_specfile_is_empty() {
        let config = Config::from_yaml("downstream_package_name: beer").unwrap();
        let plan = SyncPlan::build(&config, None, true).unwrap();

        assert!(plan.files_to_sync.is_empty());
    }

    #[test]
    fn plan_serializes_to_json() {
        let config = sample_config();
        let plan = SyncPlan::build(&config, None, false).unwrap();

        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(
            value["downstream_project_url"],
            "https://src.example.org/rpms/beer.git"
        );
        assert_eq!(value["files_to_sync"][0]["src"][0], "a.spec");
        assert_eq!(value["files_to_sync"][0]["dest"], "beer.spec");
    }
}
