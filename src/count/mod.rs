// src/count/mod.rs
//! Phase 1: in-degree aggregation over edge-list lines.

pub mod parse;
pub mod popularity;

pub use self::parse::{parse_edge_line, parse_node};
pub use self::popularity::PopularityCount;

use crate::error::{LeagueError, Result};
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Lines per partition when splitting a single input in memory.
pub const DEFAULT_CHUNK_LINES: usize = 64 * 1024;

/// Single-threaded count. `first_line` is the 1-based number of the first item.
///
/// # Errors
/// Returns the first `LeagueError::Parse` encountered.
pub fn count_lines<'a, I>(lines: I, origin: &str, first_line: usize) -> Result<PopularityCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = PopularityCount::new();
    for (offset, line) in lines.into_iter().enumerate() {
        if let Some(edge) = parse_edge_line(line, origin, first_line + offset)? {
            counts.record(&edge);
        }
    }
    Ok(counts)
}

/// Counts `lines` as independent partitions of `chunk_lines` and merges the partials.
///
/// # Errors
/// Returns a parse error from any partition; no partial table is returned.
pub fn count_parallel(lines: &[&str], origin: &str, chunk_lines: usize) -> Result<PopularityCount> {
    let chunk_lines = chunk_lines.max(1);
    lines
        .par_chunks(chunk_lines)
        .enumerate()
        .map(|(i, chunk)| count_lines(chunk.iter().copied(), origin, i * chunk_lines + 1))
        .try_reduce(PopularityCount::new, |a, b| Ok(a.merge(b)))
}

/// Counts a whole text buffer.
///
/// # Errors
/// Returns a parse error if any line is malformed.
pub fn count_text(text: &str, origin: &str, chunk_lines: usize) -> Result<PopularityCount> {
    let lines: Vec<&str> = text.lines().collect();
    count_parallel(&lines, origin, chunk_lines)
}

/// Counts a set of partition files in parallel. All files must succeed before
/// the merged table is returned.
///
/// # Errors
/// Returns I/O errors for unreadable files and parse errors for malformed lines.
pub fn count_files(paths: &[PathBuf], chunk_lines: usize) -> Result<PopularityCount> {
    paths
        .par_iter()
        .map(|path| -> Result<PopularityCount> {
            let text = fs::read_to_string(path).map_err(|e| LeagueError::io(path, e))?;
            let origin = path.display().to_string();
            let partial = count_text(&text, &origin, chunk_lines)?;
            debug!(
                partition = %origin,
                nodes = partial.len(),
                edges = partial.total(),
                "partition counted"
            );
            Ok(partial)
        })
        .try_reduce(PopularityCount::new, |a, b| Ok(a.merge(b)))
}
