// src/error.rs
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::NodeId;

#[derive(Debug, Error)]
pub enum LeagueError {
    /// A token on an edge or intermediate line is not a valid node id or count.
    #[error("parse error at {origin}:{line}: invalid token `{token}`")]
    Parse {
        origin: String,
        line: usize,
        token: String,
    },

    /// League file or config file is missing, unreadable or malformed.
    #[error("configuration error ({path}): {reason}")]
    Configuration { path: PathBuf, reason: String },

    /// Popularity for a league member could not be resolved unambiguously.
    #[error("consistency error for node {node}: {reason}")]
    Consistency { node: NodeId, reason: String },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, LeagueError>;

impl LeagueError {
    pub(crate) fn parse(origin: &str, line: usize, token: &str) -> Self {
        Self::Parse {
            origin: origin.to_string(),
            line,
            token: token.to_string(),
        }
    }

    pub(crate) fn config(path: &Path, reason: impl Into<String>) -> Self {
        Self::Configuration {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            source,
            path: path.to_path_buf(),
        }
    }
}

impl From<walkdir::Error> for LeagueError {
    fn from(e: walkdir::Error) -> Self {
        let path = e.path().map_or_else(|| PathBuf::from("<unknown>"), Path::to_path_buf);
        match e.into_io_error() {
            Some(source) => LeagueError::Io { source, path },
            None => LeagueError::Io {
                source: std::io::Error::new(std::io::ErrorKind::Other, "filesystem loop"),
                path,
            },
        }
    }
}
