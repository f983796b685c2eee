// src/types.rs
use serde::Serialize;

/// Identifier of a graph vertex.
pub type NodeId = u64;

/// Number of incoming edges recorded for a node.
pub type Count = u64;

/// Dense 0-based position in ascending popularity order.
pub type Rank = usize;

/// One parsed edge-list line: a source and the nodes it links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub destinations: Vec<NodeId>,
}

/// A single `(node, count)` record handed from the counting phase to the ranking phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PopularityEntry {
    pub node: NodeId,
    pub count: Count,
}

impl PopularityEntry {
    #[must_use]
    pub fn new(node: NodeId, count: Count) -> Self {
        Self { node, count }
    }
}

/// One line of final output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedNode {
    pub node: NodeId,
    pub rank: Rank,
}

/// Summary of a completed pipeline run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub input_files: usize,
    pub edges: Count,
    pub distinct_nodes: usize,
    pub league_size: usize,
    pub ranked: usize,
    pub omitted: Vec<NodeId>,
    pub count_ms: u128,
    pub rank_ms: u128,
}

impl RunReport {
    /// Returns true if some league members were left out of the ranking.
    #[must_use]
    pub fn has_omissions(&self) -> bool {
        !self.omitted.is_empty()
    }
}
