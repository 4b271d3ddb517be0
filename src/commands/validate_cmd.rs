//! Implementation of the `weir validate` command.
//!
//! Loading a config already parses and validates it (shared settings plus
//! every job's resolved settings), so this command is the load step with a
//! human-readable summary on success.

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::context::locate_config;
use crate::error::Result;

/// Execute the `weir validate` command.
pub fn cmd_validate(args: ValidateArgs) -> Result<()> {
    let path = locate_config(args.config.as_deref())?;
    let config = Config::load(&path)?;

    println!("{}: OK", path.display());
    if let Some(name) = &config.package.downstream_package_name {
        println!("  downstream package: {}", name);
    }
    if let Some(specfile) = &config.package.specfile_path {
        println!("  spec file:          {}", specfile);
    }
    println!("  synced files:       {}", config.package.synced_files.len());
    println!("  jobs:               {}", config.jobs.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn validate_accepts_good_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "specfile_path: beer.spec").unwrap();
        writeln!(file, "downstream_package_name: beer").unwrap();

        let result = cmd_validate(ValidateArgs {
            config: Some(file.path().to_path_buf()),
        });
        assert!(result.is_ok());
    }

    #[test]
    fn validate_rejects_bad_config_with_config_exit_code() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "spec_source_id: bogus").unwrap();

        let result = cmd_validate(ValidateArgs {
            config: Some(file.path().to_path_buf()),
        });
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::CONFIG_FAILURE);
        assert!(err.to_string().contains("spec_source_id"));
    }

    #[test]
    fn validate_reports_bad_job_override() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "jobs:").unwrap();
        writeln!(file, "  - job: propose_downstream").unwrap();
        writeln!(file, "    trigger: release").unwrap();
        writeln!(file, "    upstream_tag_template: no-placeholder").unwrap();

        let result = cmd_validate(ValidateArgs {
            config: Some(file.path().to_path_buf()),
        });
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("jobs[0]"));
        assert!(err.to_string().contains("upstream_tag_template"));
    }

    #[test]
    fn validate_missing_explicit_config_is_user_error() {
        let result = cmd_validate(ValidateArgs {
            config: Some("/nonexistent/.weir.yaml".into()),
        });
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().exit_code(), exit_codes::USER_ERROR);
    }
}
