// src/store/output.rs
//! Final `<node>\t<rank>` records.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;
use crate::rank::RankAssignment;

#[must_use]
pub fn render(assignment: &RankAssignment) -> String {
    let mut out = String::with_capacity(assignment.len() * 10);
    for r in assignment.iter() {
        let _ = writeln!(out, "{}\t{}", r.node, r.rank);
    }
    out
}

/// Writes one record per ranked node, in rank order.
///
/// # Errors
/// Returns `LeagueError::Io` on write failure.
pub fn write(path: &Path, assignment: &RankAssignment) -> Result<()> {
    super::atomic_write(path, &render(assignment))
}
