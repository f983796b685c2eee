use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::count::DEFAULT_CHUNK_LINES;
use crate::rank::MissingPolicy;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub ranking: RankingConfig,
    pub execution: ExecutionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Edge list: a file or a directory of partition files.
    #[serde(default)]
    pub input: Option<PathBuf>,
    /// Final `<node>\t<rank>` file.
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// League side file, one node id per line.
    #[serde(default)]
    pub league: Option<PathBuf>,
    #[serde(default = "default_intermediate")]
    pub intermediate: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            league: None,
            intermediate: default_intermediate(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingConfig {
    #[serde(default)]
    pub missing: MissingPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Worker threads for counting; 0 lets rayon decide.
    #[serde(default)]
    pub threads: usize,
    #[serde(default = "default_chunk_lines")]
    pub chunk_lines: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            chunk_lines: default_chunk_lines(),
        }
    }
}

fn default_intermediate() -> PathBuf {
    PathBuf::from(".popleague/tmp/popularity.tsv")
}

const fn default_chunk_lines() -> usize {
    DEFAULT_CHUNK_LINES
}
