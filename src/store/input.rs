// src/store/input.rs
//! Resolves the phase-1 input path into partition files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{LeagueError, Result};

/// Returns the partition files under `root`, sorted for reproducible runs.
///
/// A file path is its own single partition. In a directory, hidden files and
/// `_`-prefixed markers (such as `_SUCCESS`) are skipped.
///
/// # Errors
/// Returns `LeagueError::Io` if `root` does not exist or cannot be walked.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(LeagueError::io(
            root,
            std::io::Error::new(std::io::ErrorKind::NotFound, "input path does not exist"),
        ));
    }
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut paths = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_ignored(&e.file_name().to_string_lossy()));
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() {
            paths.push(entry.into_path());
        }
    }
    paths.sort();
    Ok(paths)
}

fn is_ignored(name: &str) -> bool {
    name.starts_with('.') || name.starts_with('_')
}
