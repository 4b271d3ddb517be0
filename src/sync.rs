//! File synchronization directives between the upstream and dist-git trees.
//!
//! A [`SyncFilesItem`] describes one copy step: one or more source paths (or
//! glob patterns) in the upstream tree and a destination in dist-git. In
//! `.weir.yaml` an entry can be written three ways:
//!
//! ```yaml
//! synced_files:
//!   - .weir.yaml                   # bare string: copy onto itself
//!   - src: fedora/foo.spec         # scalar src
//!     dest: foo.spec
//!   - src: [a.conf, b.conf]        # list of sources
//!     dest: configs/
//! ```
//!
//! All three parse into the same struct; serialization always emits the
//! explicit mapping form.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A single file synchronization directive.
///
/// Sources are copied in order to the destination. Directives are never
/// edited after parsing; operations that need more of them append new
/// entries instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncFilesItem {
    /// Source paths or glob patterns, relative to the upstream tree.
    pub src: Vec<PathBuf>,

    /// Destination path, relative to the dist-git tree.
    pub dest: PathBuf,
}

impl SyncFilesItem {
    /// Directive that copies a single path onto itself.
    pub fn identity<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        Self {
            src: vec![path.clone()],
            dest: path,
        }
    }
}

impl fmt::Display for SyncFilesItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sources: Vec<String> = self.src.iter().map(|s| s.display().to_string()).collect();
        write!(f, "{} -> {}", sources.join(", "), self.dest.display())
    }
}

/// Raw YAML shapes accepted for a sync directive.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSyncFilesItem {
    Path(PathBuf),
    Mapping { src: RawSrc, dest: PathBuf },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSrc {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

impl<'de> Deserialize<'de> for SyncFilesItem {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawSyncFilesItem::deserialize(deserializer)? {
            RawSyncFilesItem::Path(path) => SyncFilesItem::identity(path),
            RawSyncFilesItem::Mapping { src, dest } => {
                let src = match src {
                    RawSrc::One(path) => vec![path],
                    RawSrc::Many(paths) => paths,
                };
                SyncFilesItem { src, dest }
            }
        })
    }
}

/// Iterate over every source path declared across a list of directives.
///
/// This is the membership view used to decide whether a path is already
/// covered by some directive; destinations deliberately do not count.
pub fn iter_srcs(files: &[SyncFilesItem]) -> impl Iterator<Item = &Path> {
    files
        .iter()
        .flat_map(|item| item.src.iter().map(PathBuf::as_path))
}
