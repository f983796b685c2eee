// src/rank/mod.rs
//! Phase 2: filter popularity to the league and assign dense ranks.

pub mod order;

pub use self::order::{popularity_order, RankedPair};

use std::collections::{BTreeSet, HashSet};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::count::PopularityCount;
use crate::error::{LeagueError, Result};
use crate::league::LeagueSet;
use crate::types::{NodeId, PopularityEntry, Rank, RankedNode};

/// What to do with league members that never received an edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MissingPolicy {
    /// Rank the member with count 0.
    #[default]
    ZeroFill,
    /// Leave the member out and report it.
    Omit,
    /// Fail the run with a consistency error.
    Strict,
}

/// Dense ranks in ascending popularity order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankAssignment {
    ranked: Vec<RankedNode>,
}

impl RankAssignment {
    /// Returns the rank of `node`, if it was ranked.
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<Rank> {
        self.ranked.iter().find(|r| r.node == node).map(|r| r.rank)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedNode> {
        self.ranked.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[RankedNode] {
        &self.ranked
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Result of one ranking pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RankOutcome {
    pub assignment: RankAssignment,
    /// Members left out under `MissingPolicy::Omit`, ascending.
    pub omitted: Vec<NodeId>,
}

/// Streams popularity records, keeping league members in a total order.
///
/// Built once per worker with the league already loaded; `observe` is the
/// per-record step and `finish` emits the ranks.
pub struct LeagueRanker {
    league: LeagueSet,
    policy: MissingPolicy,
    candidates: BTreeSet<RankedPair>,
    seen: HashSet<NodeId>,
}

impl LeagueRanker {
    #[must_use]
    pub fn new(league: LeagueSet, policy: MissingPolicy) -> Self {
        Self {
            league,
            policy,
            candidates: BTreeSet::new(),
            seen: HashSet::new(),
        }
    }

    /// Feeds one popularity record. Non-members are dropped.
    ///
    /// # Errors
    /// Returns `LeagueError::Consistency` if a member is reported twice.
    pub fn observe(&mut self, entry: PopularityEntry) -> Result<()> {
        if !self.league.contains(entry.node) {
            return Ok(());
        }
        if !self.seen.insert(entry.node) {
            return Err(LeagueError::Consistency {
                node: entry.node,
                reason: "popularity reported more than once".to_string(),
            });
        }
        self.candidates.insert(RankedPair::new(entry.count, entry.node));
        Ok(())
    }

    /// Resolves unseen members per policy and assigns ranks `0..n`.
    ///
    /// # Errors
    /// Returns `LeagueError::Consistency` under `MissingPolicy::Strict` when a
    /// member has no recorded popularity.
    pub fn finish(mut self) -> Result<RankOutcome> {
        let missing: Vec<NodeId> = self
            .league
            .members()
            .iter()
            .copied()
            .filter(|n| !self.seen.contains(n))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let omitted = match self.policy {
            MissingPolicy::ZeroFill => {
                for &node in &missing {
                    self.candidates.insert(RankedPair::new(0, node));
                }
                Vec::new()
            }
            MissingPolicy::Omit => {
                if !missing.is_empty() {
                    warn!(count = missing.len(), nodes = ?missing, "league members without in-edges omitted");
                }
                missing
            }
            MissingPolicy::Strict => {
                if let Some(&node) = missing.first() {
                    return Err(LeagueError::Consistency {
                        node,
                        reason: "league member has no recorded popularity".to_string(),
                    });
                }
                Vec::new()
            }
        };

        let ranked = self
            .candidates
            .into_iter()
            .enumerate()
            .map(|(rank, pair)| RankedNode {
                node: pair.node,
                rank,
            })
            .collect();

        Ok(RankOutcome {
            assignment: RankAssignment { ranked },
            omitted,
        })
    }
}

/// Ranks `league` against a complete popularity table.
///
/// # Errors
/// See [`LeagueRanker::finish`].
pub fn rank(
    popularity: &PopularityCount,
    league: &LeagueSet,
    policy: MissingPolicy,
) -> Result<RankOutcome> {
    let mut ranker = LeagueRanker::new(league.clone(), policy);
    for &node in league.members() {
        if let Some(count) = popularity.lookup(node) {
            if ranker.seen.contains(&node) {
                continue;
            }
            ranker.observe(PopularityEntry::new(node, count))?;
        }
    }
    ranker.finish()
}
