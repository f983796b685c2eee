// src/rank/order.rs
//! Total order used to rank league members.

use std::cmp::Ordering;

use crate::types::{Count, NodeId};

/// A candidate for ranking: a league member and its popularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedPair {
    pub count: Count,
    pub node: NodeId,
}

impl RankedPair {
    #[must_use]
    pub fn new(count: Count, node: NodeId) -> Self {
        Self { count, node }
    }
}

/// Least popular first; equal counts fall back to ascending node id.
#[must_use]
pub fn popularity_order(a: &RankedPair, b: &RankedPair) -> Ordering {
    a.count.cmp(&b.count).then_with(|| a.node.cmp(&b.node))
}

impl Ord for RankedPair {
    fn cmp(&self, other: &Self) -> Ordering {
        popularity_order(self, other)
    }
}

impl PartialOrd for RankedPair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_dominates_node_id() {
        let a = RankedPair::new(1, 99);
        let b = RankedPair::new(2, 1);
        assert_eq!(popularity_order(&a, &b), Ordering::Less);
    }

    #[test]
    fn ties_break_on_node_id() {
        let a = RankedPair::new(5, 3);
        let b = RankedPair::new(5, 7);
        assert_eq!(popularity_order(&a, &b), Ordering::Less);
        assert_eq!(popularity_order(&b, &a), Ordering::Greater);
    }

    #[test]
    fn equal_only_when_both_fields_match() {
        let a = RankedPair::new(5, 3);
        assert_eq!(popularity_order(&a, &RankedPair::new(5, 3)), Ordering::Equal);
    }
}
