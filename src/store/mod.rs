// src/store/mod.rs
//! Text formats at the phase boundaries.

pub mod input;
pub mod intermediate;
pub mod output;

use std::fs;
use std::path::Path;

use crate::error::{LeagueError, Result};

/// Writes `content` to a sibling temp file, then renames it over `path`.
///
/// Readers never observe a half-written file; a failed write leaves `path` untouched.
///
/// # Errors
/// Returns `LeagueError::Io` if the directory cannot be created or the write fails.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LeagueError::io(parent, e))?;
    }

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, content).map_err(|e| LeagueError::io(&temp_path, e))?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(LeagueError::io(path, e));
    }
    Ok(())
}

/// Removes a file left by a previous run. Missing files are fine.
///
/// # Errors
/// Returns `LeagueError::Io` if the file exists but cannot be removed.
pub fn clear(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(LeagueError::io(path, e)),
    }
}
