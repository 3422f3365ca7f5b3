//! Directory scanning.
//! Recursively enumerates regular files under the input root, in filesystem
//! traversal order, optionally keeping only one extension.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::naming;

/// Collect regular files under `root`.
///
/// `ext_filter`, when present, is matched literally (case-sensitive) against
/// each path's extension including the leading dot, e.g. `".mp3"`. Symlinks
/// are not followed; directories and other non-files are skipped.
pub fn collect_files(root: &Path, ext_filter: Option<&str>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.with_context(|| format!("scanning '{}'", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if let Some(filter) = ext_filter {
            if naming::extension_of(&path) != filter {
                continue;
            }
        }
        files.push(path);
    }
    debug!(root = %root.display(), count = files.len(), filter = ext_filter.unwrap_or("<none>"), "scan complete");
    Ok(files)
}
