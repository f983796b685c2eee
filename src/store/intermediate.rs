// src/store/intermediate.rs
//! The `<node>\t<count>` hand-off between the two phases.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::count::{parse_node, PopularityCount};
use crate::error::{LeagueError, Result};
use crate::types::PopularityEntry;

/// Renders the table sorted by node id so identical inputs give identical bytes.
#[must_use]
pub fn render(counts: &PopularityCount) -> String {
    let mut out = String::with_capacity(counts.len() * 12);
    for e in counts.entries_sorted() {
        let _ = writeln!(out, "{}\t{}", e.node, e.count);
    }
    out
}

/// Persists the table atomically.
///
/// # Errors
/// Returns `LeagueError::Io` on write failure.
pub fn write(path: &Path, counts: &PopularityCount) -> Result<()> {
    super::atomic_write(path, &render(counts))
}

/// Parses one `<node> <count>` line; blank lines yield `None`.
///
/// # Errors
/// Returns `LeagueError::Parse` for a wrong field count or non-numeric field.
pub fn parse_line(line: &str, origin: &str, line_no: usize) -> Result<Option<PopularityEntry>> {
    let mut fields = line.split_whitespace();
    let Some(node) = fields.next() else {
        return Ok(None);
    };
    let node = parse_node(node, origin, line_no)?;
    let count = match (fields.next(), fields.next()) {
        (Some(c), None) => c
            .parse()
            .map_err(|_| LeagueError::parse(origin, line_no, c))?,
        (None, _) => return Err(LeagueError::parse(origin, line_no, line.trim())),
        (Some(_), Some(extra)) => return Err(LeagueError::parse(origin, line_no, extra)),
    };
    Ok(Some(PopularityEntry::new(node, count)))
}

/// Reads every entry of a persisted table in file order.
///
/// # Errors
/// Returns `LeagueError::Io` if unreadable, `LeagueError::Parse` if malformed.
pub fn read_entries(path: &Path) -> Result<Vec<PopularityEntry>> {
    let text = fs::read_to_string(path).map_err(|e| LeagueError::io(path, e))?;
    let origin = path.display().to_string();
    let mut entries = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(e) = parse_line(line, &origin, i + 1)? {
            entries.push(e);
        }
    }
    Ok(entries)
}

/// Reads a persisted table back into memory.
///
/// # Errors
/// See [`read_entries`]; duplicate nodes are `LeagueError::Consistency`.
pub fn read(path: &Path) -> Result<PopularityCount> {
    PopularityCount::from_entries(read_entries(path)?)
}
