//! Implementation of the `weir init` command.
//!
//! Scaffolds a `.weir.yaml` at the repository root. A spec file found at
//! the root prefills `specfile_path`; package names come from flags or are
//! left as commented placeholders. The write is atomic so an interrupted
//! init never leaves a half-written config.

use crate::cli::InitArgs;
use crate::context::RepoContext;
use crate::error::{Result, WeirError};
use crate::fs::atomic_write_file;
use std::path::Path;

/// Execute the `weir init` command.
pub fn cmd_init(args: InitArgs) -> Result<()> {
    let ctx = RepoContext::resolve()?;

    if let Some(existing) = ctx.find_config_file()
        && !args.force
    {
        return Err(WeirError::UserError(format!(
            "configuration already exists at '{}'.\n\
             Use `weir init --force` to overwrite it.",
            existing.display()
        )));
    }

    let specfile = detect_specfile(&ctx.repo_root)?;
    let content = render_template(
        specfile.as_deref(),
        args.upstream_package_name.as_deref(),
        args.downstream_package_name.as_deref(),
    );

    let target = ctx.default_config_path();
    atomic_write_file(&target, &content)?;

    println!("Created {}", target.display());
    match &specfile {
        Some(specfile) => println!("Detected spec file: {}", specfile),
        None => println!("No spec file found at the repo root; set specfile_path by hand."),
    }
    println!();
    println!("Review the file, then check it with `weir validate`.");

    Ok(())
}

/// Find a spec file at the repository root to prefill `specfile_path`.
///
/// Takes the alphabetically first `*.spec` file so repeated runs agree.
fn detect_specfile(repo_root: &Path) -> Result<Option<String>> {
    let entries = std::fs::read_dir(repo_root).map_err(|e| {
        WeirError::UserError(format!(
            "failed to read directory '{}': {}",
            repo_root.display(),
            e
        ))
    })?;

    let mut candidates: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(".spec"))
        .collect();
    candidates.sort();

    Ok(candidates.into_iter().next())
}

/// Render the config template, with placeholders for anything unknown.
fn render_template(
    specfile: Option<&str>,
    upstream_package_name: Option<&str>,
    downstream_package_name: Option<&str>,
) -> String {
    let mut out = String::from(
        "# Package configuration for weir.\n\
         # Commented fields fall back to their defaults.\n\n",
    );

    match specfile {
        Some(specfile) => out.push_str(&format!("specfile_path: {}\n", specfile)),
        None => out.push_str("# specfile_path: <package>.spec\n"),
    }
    match upstream_package_name {
        Some(name) => out.push_str(&format!("upstream_package_name: {}\n", name)),
        None => out.push_str("# upstream_package_name: <name on the upstream forge>\n"),
    }
    match downstream_package_name {
        Some(name) => out.push_str(&format!("downstream_package_name: {}\n", name)),
        None => out.push_str("# downstream_package_name: <name in dist-git>\n"),
    }

    out.push_str(
        "\n# Extra files to copy into dist-git (the spec file and this file\n\
         # are always synced):\n\
         # synced_files:\n\
         #   - plans/\n\n\
         jobs:\n  \
         - job: propose_downstream\n    \
         trigger: release\n",
    );

    out
}
