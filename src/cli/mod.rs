//! CLI argument parsing for weir.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Weir: keep a distribution package in sync with its upstream project.
///
/// Weir reads `.weir.yaml` at the upstream repository root. The file says
/// where the package's spec file lives, which files map between the
/// upstream and dist-git trees, and how both repositories are reached.
#[derive(Parser, Debug)]
#[command(name = "weir")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for weir.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a `.weir.yaml` template in the current repository.
    ///
    /// Detects a spec file at the repository root to prefill
    /// `specfile_path`. Refuses to overwrite an existing configuration
    /// unless `--force` is given.
    Init(InitArgs),

    /// Check the configuration file.
    ///
    /// Loads the config, validates the shared settings and every job's
    /// resolved settings, and prints a short summary.
    Validate(ValidateArgs),

    /// Show what a sync run would do.
    ///
    /// Prints the resolved downstream project URL and the effective list
    /// of files to sync, without touching any repository.
    Plan(PlanArgs),
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    #[arg(long)]
    pub force: bool,

    /// Package name in the upstream ecosystem.
    #[arg(long)]
    pub upstream_package_name: Option<String>,

    /// Package name in dist-git.
    #[arg(long)]
    pub downstream_package_name: Option<String>,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the config file (discovered at the repo root when omitted).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `plan` command.
#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Path to the config file (discovered at the repo root when omitted).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Plan for one job (index into `jobs`) instead of the shared settings.
    #[arg(long)]
    pub job: Option<usize>,

    /// Plan the reverse direction: the spec file from dist-git back upstream.
    #[arg(long)]
    pub from_downstream: bool,

    /// Emit the plan as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
