// src/pipeline/mod.rs
//! Runs the counting phase, persists its table, then runs the ranking phase.

use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::count;
use crate::error::{LeagueError, Result};
use crate::league::LeagueSet;
use crate::rank::{LeagueRanker, RankOutcome};
use crate::store::{self, input, intermediate, output};
use crate::types::{Count, RunReport};

/// What the counting phase produced.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CountSummary {
    pub input_files: usize,
    pub edges: Count,
    pub distinct_nodes: usize,
    pub elapsed_ms: u128,
}

/// What the ranking phase produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RankSummary {
    pub league_size: usize,
    pub outcome: RankOutcome,
    pub elapsed_ms: u128,
}

pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    /// # Errors
    /// Returns `LeagueError::Configuration` if the config is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Counts in-degrees over the input and writes the intermediate table.
    ///
    /// Any previous intermediate is removed first, so a failed count leaves none behind.
    ///
    /// # Errors
    /// Returns configuration, I/O or parse errors.
    pub fn count_phase(&self) -> Result<CountSummary> {
        let start = Instant::now();
        let input_path = self.config.input()?;
        let table_path = &self.config.paths.intermediate;

        store::clear(table_path)?;
        let files = input::discover(input_path)?;
        info!(input = %input_path.display(), partitions = files.len(), "counting in-degrees");

        let chunk_lines = self.config.execution.chunk_lines;
        let counts = self.with_pool(|| count::count_files(&files, chunk_lines))?;
        intermediate::write(table_path, &counts)?;

        let summary = CountSummary {
            input_files: files.len(),
            edges: counts.total(),
            distinct_nodes: counts.len(),
            elapsed_ms: start.elapsed().as_millis(),
        };
        info!(
            edges = summary.edges,
            nodes = summary.distinct_nodes,
            table = %table_path.display(),
            "popularity table written"
        );
        Ok(summary)
    }

    /// Ranks the league against the intermediate table and writes the output.
    ///
    /// The league is loaded before the table is touched; the output is removed
    /// up front and only written once ranking has fully succeeded.
    ///
    /// # Errors
    /// Returns configuration errors for the league, I/O or parse errors for the
    /// table, and consistency errors from the ranker.
    pub fn rank_phase(&self) -> Result<RankSummary> {
        store::clear(self.config.output()?)?;
        let league = self.load_league()?;
        self.rank_with(league)
    }

    /// Runs both phases in order.
    ///
    /// Paths and the league file are checked before counting starts, so a
    /// configuration error leaves neither the intermediate table nor the output.
    ///
    /// # Errors
    /// Returns the first error from either phase.
    pub fn run(&self) -> Result<RunReport> {
        self.config.validate_for_run()?;
        store::clear(self.config.output()?)?;
        let league = self.load_league()?;
        let counted = self.count_phase()?;
        let ranked = self.rank_with(league)?;

        Ok(RunReport {
            input_files: counted.input_files,
            edges: counted.edges,
            distinct_nodes: counted.distinct_nodes,
            league_size: ranked.league_size,
            ranked: ranked.outcome.assignment.len(),
            omitted: ranked.outcome.omitted,
            count_ms: counted.elapsed_ms,
            rank_ms: ranked.elapsed_ms,
        })
    }

    fn load_league(&self) -> Result<LeagueSet> {
        let league = LeagueSet::load(self.config.league()?)?;
        debug!(members = league.len(), distinct = league.distinct_len(), "league loaded");
        Ok(league)
    }

    fn rank_with(&self, league: LeagueSet) -> Result<RankSummary> {
        let start = Instant::now();
        let out_path = self.config.output()?;
        let league_size = league.distinct_len();

        let table_path = &self.config.paths.intermediate;
        ensure_table(table_path)?;

        let mut ranker = LeagueRanker::new(league, self.config.ranking.missing);
        for entry in intermediate::read_entries(table_path)? {
            ranker.observe(entry)?;
        }
        let outcome = ranker.finish()?;
        output::write(out_path, &outcome.assignment)?;

        info!(
            ranked = outcome.assignment.len(),
            omitted = outcome.omitted.len(),
            output = %out_path.display(),
            "league ranked"
        );
        Ok(RankSummary {
            league_size,
            outcome,
            elapsed_ms: start.elapsed().as_millis(),
        })
    }

    fn with_pool<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce() -> Result<T> + Send,
        T: Send,
    {
        let threads = self.config.execution.threads;
        if threads == 0 {
            return op();
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| LeagueError::config(Path::new(crate::config::CONFIG_FILE), e.to_string()))?;
        pool.install(op)
    }
}

fn ensure_table(path: &Path) -> Result<()> {
    if path.is_file() {
        return Ok(());
    }
    Err(LeagueError::io(
        path,
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "popularity table missing; run the count phase first",
        ),
    ))
}
