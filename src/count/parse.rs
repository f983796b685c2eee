// src/count/parse.rs
//! Edge-list line tokenizer.

use crate::error::{LeagueError, Result};
use crate::types::{EdgeRecord, NodeId};

/// Splits on any run of `:` and whitespace, so `1: 2 3`, `1:2 3` and `1 2 3` read the same.
fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c == ':' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}

/// Parses one `<source>: <dest> <dest> ...` line.
///
/// Returns `Ok(None)` for a blank line. A line holding only a source yields a
/// record with no destinations.
///
/// # Errors
/// Returns `LeagueError::Parse` if any token is not a non-negative integer.
pub fn parse_edge_line(line: &str, origin: &str, line_no: usize) -> Result<Option<EdgeRecord>> {
    let mut it = tokens(line);
    let Some(first) = it.next() else {
        return Ok(None);
    };

    let source = parse_node(first, origin, line_no)?;
    let destinations = it
        .map(|t| parse_node(t, origin, line_no))
        .collect::<Result<Vec<_>>>()?;

    Ok(Some(EdgeRecord {
        source,
        destinations,
    }))
}

/// Parses a single node id token.
///
/// # Errors
/// Returns `LeagueError::Parse` naming the token on failure.
pub fn parse_node(token: &str, origin: &str, line_no: usize) -> Result<NodeId> {
    token
        .parse::<NodeId>()
        .map_err(|_| LeagueError::parse(origin, line_no, token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_source_and_destinations() {
        let rec = parse_edge_line("1: 2 3", "t", 1).unwrap().unwrap();
        assert_eq!(rec.source, 1);
        assert_eq!(rec.destinations, vec![2, 3]);
    }

    #[test]
    fn tolerates_missing_space_after_colon() {
        let rec = parse_edge_line("7:8  9\t10", "t", 1).unwrap().unwrap();
        assert_eq!(rec.destinations, vec![8, 9, 10]);
    }

    #[test]
    fn source_only_line_has_no_destinations() {
        let rec = parse_edge_line("42:", "t", 1).unwrap().unwrap();
        assert!(rec.destinations.is_empty());
    }

    #[test]
    fn blank_line_is_skipped() {
        assert!(parse_edge_line("   ", "t", 1).unwrap().is_none());
        assert!(parse_edge_line("", "t", 1).unwrap().is_none());
    }

    #[test]
    fn non_numeric_source_is_a_parse_error() {
        let err = parse_edge_line("x: 2 3", "edges.txt", 5).unwrap_err();
        match err {
            LeagueError::Parse { origin, line, token } => {
                assert_eq!(origin, "edges.txt");
                assert_eq!(line, 5);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_destination_is_a_parse_error() {
        assert!(parse_edge_line("1: -2", "t", 1).is_err());
    }
}
