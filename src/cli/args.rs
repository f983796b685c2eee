use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::rank::MissingPolicy;

#[derive(Parser)]
#[command(
    name = "popleague",
    version,
    about = "Rank a league of nodes by in-degree popularity"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Config file (defaults to ./popleague.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Print the summary as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count in-degrees, then rank the league
    Run(PathArgs),
    /// Count in-degrees and write the intermediate table only
    Count(PathArgs),
    /// Rank the league against an existing intermediate table
    Rank(PathArgs),
    /// Write a default popleague.toml
    Init,
}

/// Overrides for values otherwise taken from the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct PathArgs {
    /// Edge list file or directory of partition files
    #[arg(long, short, value_name = "PATH")]
    pub input: Option<PathBuf>,
    /// Output file for `<node>\t<rank>` records
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// League file, one node id per line
    #[arg(long, short, value_name = "FILE")]
    pub league: Option<PathBuf>,
    /// Location of the intermediate popularity table
    #[arg(long, value_name = "FILE")]
    pub intermediate: Option<PathBuf>,
    /// Handling of league members with no in-edges
    #[arg(long, value_enum)]
    pub missing: Option<MissingPolicy>,
    /// Counting threads (0 = all cores)
    #[arg(long)]
    pub threads: Option<usize>,
    /// Lines per in-memory partition
    #[arg(long)]
    pub chunk_lines: Option<usize>,
}

impl PathArgs {
    /// Applies every flag that was given on top of `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(p) = &self.input {
            config.paths.input = Some(p.clone());
        }
        if let Some(p) = &self.output {
            config.paths.output = Some(p.clone());
        }
        if let Some(p) = &self.league {
            config.paths.league = Some(p.clone());
        }
        if let Some(p) = &self.intermediate {
            config.paths.intermediate = p.clone();
        }
        if let Some(m) = self.missing {
            config.ranking.missing = m;
        }
        if let Some(t) = self.threads {
            config.execution.threads = t;
        }
        if let Some(c) = self.chunk_lines {
            config.execution.chunk_lines = c;
        }
    }
}
