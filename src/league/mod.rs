// src/league/mod.rs
//! The league side file: the subset of nodes to rank.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{LeagueError, Result};
use crate::types::NodeId;

/// League members in file order, with a membership index.
///
/// Loaded once per ranking run and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct LeagueSet {
    members: Vec<NodeId>,
    index: HashSet<NodeId>,
}

impl LeagueSet {
    #[must_use]
    pub fn new(members: Vec<NodeId>) -> Self {
        let index = members.iter().copied().collect();
        Self { members, index }
    }

    /// Reads and parses the league file at `path`.
    ///
    /// # Errors
    /// Returns `LeagueError::Configuration` if the file is missing, unreadable,
    /// not UTF-8, or holds a line that is not a node id.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LeagueError::config(path, "league file not found"));
        }
        let content = fs::read_to_string(path)
            .map_err(|e| LeagueError::config(path, format!("cannot read league file: {e}")))?;
        Self::parse(&content, path)
    }

    /// Parses one node id per line. Lines are trimmed and blank lines skipped.
    ///
    /// # Errors
    /// Returns `LeagueError::Configuration` naming the first invalid line.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let mut members = Vec::new();
        for (i, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let node = line.parse::<NodeId>().map_err(|_| {
                LeagueError::config(origin, format!("line {}: `{line}` is not a node id", i + 1))
            })?;
            members.push(node);
        }
        Ok(Self::new(members))
    }

    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.index.contains(&node)
    }

    /// Members exactly as listed, duplicates included.
    #[must_use]
    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    /// Number of distinct members.
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_blank_line_is_ignored() {
        let league = LeagueSet::parse("4\n5\n\n", Path::new("league.txt")).unwrap();
        assert_eq!(league.members(), &[4, 5]);
    }

    #[test]
    fn whitespace_and_crlf_are_trimmed() {
        let league = LeagueSet::parse(" 4 \r\n5\r\n", Path::new("league.txt")).unwrap();
        assert_eq!(league.members(), &[4, 5]);
    }

    #[test]
    fn duplicates_are_kept_verbatim() {
        let league = LeagueSet::parse("4\n4\n5", Path::new("league.txt")).unwrap();
        assert_eq!(league.len(), 3);
        assert_eq!(league.distinct_len(), 2);
    }

    #[test]
    fn non_utf8_file_is_a_configuration_error() {
        let d = tempfile::tempdir().unwrap();
        let path = d.path().join("league.txt");
        std::fs::write(&path, [b'4', b'\n', 0xff, 0xfe, b'\n']).unwrap();
        let err = LeagueSet::load(&path).unwrap_err();
        assert!(matches!(err, LeagueError::Configuration { .. }), "Got: {err}");
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let d = tempfile::tempdir().unwrap();
        let err = LeagueSet::load(&d.path().join("league.txt")).unwrap_err();
        assert!(matches!(err, LeagueError::Configuration { .. }));
    }

    #[test]
    fn bad_entry_is_a_configuration_error() {
        let err = LeagueSet::parse("4\nfive\n", Path::new("league.txt")).unwrap_err();
        assert!(matches!(err, LeagueError::Configuration { .. }));
        assert!(err.to_string().contains("line 2"));
    }
}
