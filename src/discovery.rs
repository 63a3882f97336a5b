//! Source file discovery under a directory tree.

use crate::types::SourceConfig;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Check whether `path` lies inside any of `excludes`.
///
/// Comparison is per path component: excluding `src/ui` does not exclude `src/uikit`.
pub fn is_excluded(path: &Path, excludes: &[PathBuf]) -> bool {
    excludes.iter().any(|e| path.starts_with(e))
}

/// Discover all source files under `root`.
///
/// Files are grouped by extension in `config.extensions` order and sorted
/// within each group. Anything below a `config.skip_dirs` directory is left out.
pub fn find_source_files(root: &Path, config: &SourceConfig) -> Vec<PathBuf> {
    let mut result = Vec::new();

    for ext in &config.extensions {
        let pattern = Path::new(&glob::Pattern::escape(&root.to_string_lossy()))
            .join("**")
            .join(format!("*.{}", glob::Pattern::escape(ext)));
        let mut group: Vec<PathBuf> = match glob::glob(&pattern.to_string_lossy()) {
            Ok(entries) => entries
                .flatten()
                .filter(|p| p.is_file())
                .filter(|p| !in_skipped_dir(p, root, &config.skip_dirs))
                .collect(),
            Err(e) => {
                log::warn!("bad glob pattern {}: {}", pattern.display(), e);
                continue;
            }
        };
        group.sort();
        log::debug!("found {} *.{} file(s) under {}", group.len(), ext, root.display());
        result.extend(group);
    }

    result
}

fn in_skipped_dir(path: &Path, root: &Path, skip_dirs: &[&str]) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.parent()
        .map(|dir| {
            dir.components()
                .any(|c| skip_dirs.iter().any(|s| c.as_os_str() == OsStr::new(s)))
        })
        .unwrap_or(false)
}
