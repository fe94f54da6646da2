//! Filesystem walker
//!
//! One lazy traversal per analysis pass, yielding (directory, contained file
//! names) pairs and skipping version-control metadata. Read-only; no symlink
//! cycle protection and no depth limit, matching the walk each extractor
//! expects over a freshly cloned tree.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walk a directory tree, yielding every directory with its file names.
///
/// Any path containing a `.git` component is excluded. File names within a
/// directory are sorted so the walk is deterministic for a given tree;
/// directory order is unspecified.
pub fn walk_tree<P: AsRef<Path>>(root: P) -> impl Iterator<Item = (PathBuf, Vec<String>)> {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != ".git")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| {
            let files = list_file_names(entry.path());
            (entry.into_path(), files)
        })
}

fn list_file_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
