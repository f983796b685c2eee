// src/count/popularity.rs
//! The per-node in-degree table produced by the counting phase.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::{LeagueError, Result};
use crate::types::{Count, EdgeRecord, NodeId, PopularityEntry};

/// Maps every node with at least one incoming edge to its in-degree.
///
/// Absent nodes have count 0; no zero entries are ever stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopularityCount {
    counts: HashMap<NodeId, Count>,
}

impl PopularityCount {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `by` incoming edges to `node`. Adding zero is a no-op.
    pub fn add(&mut self, node: NodeId, by: Count) {
        if by == 0 {
            return;
        }
        *self.counts.entry(node).or_insert(0) += by;
    }

    /// Emits one contribution per destination of the record.
    pub fn record(&mut self, edge: &EdgeRecord) {
        for &dest in &edge.destinations {
            self.add(dest, 1);
        }
    }

    /// Combines two partial tables by adding same-node counts.
    ///
    /// Associative and commutative, so any merge tree gives the same table.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        let (mut big, small) = if self.counts.len() >= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        for (node, count) in small.counts {
            big.add(node, count);
        }
        big
    }

    /// Builds a table from persisted entries.
    ///
    /// # Errors
    /// Returns `LeagueError::Consistency` if a node appears twice.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = PopularityEntry>,
    {
        let mut counts = HashMap::new();
        for e in entries {
            match counts.entry(e.node) {
                Entry::Occupied(_) => {
                    return Err(LeagueError::Consistency {
                        node: e.node,
                        reason: "node listed more than once in popularity table".to_string(),
                    })
                }
                Entry::Vacant(v) => {
                    if e.count > 0 {
                        v.insert(e.count);
                    }
                }
            }
        }
        Ok(Self { counts })
    }

    /// Returns the in-degree of `node`, 0 if it never received an edge.
    #[must_use]
    pub fn get(&self, node: NodeId) -> Count {
        self.counts.get(&node).copied().unwrap_or(0)
    }

    /// Returns the recorded count, distinguishing "no entry" from a count.
    #[must_use]
    pub fn lookup(&self, node: NodeId) -> Option<Count> {
        self.counts.get(&node).copied()
    }

    /// Number of distinct nodes with at least one incoming edge.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the number of destination tokens consumed.
    #[must_use]
    pub fn total(&self) -> Count {
        self.counts.values().sum()
    }

    /// Iterates entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = PopularityEntry> + '_ {
        self.counts
            .iter()
            .map(|(&node, &count)| PopularityEntry::new(node, count))
    }

    /// Entries ordered by ascending node id, for reproducible persistence.
    #[must_use]
    pub fn entries_sorted(&self) -> Vec<PopularityEntry> {
        let mut out: Vec<PopularityEntry> = self.iter().collect();
        out.sort_unstable_by_key(|e| e.node);
        out
    }
}
