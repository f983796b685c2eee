//! Popularity league: in-degree counting over an edge list, then dense
//! ranking of a curated subset of nodes by that count.

pub mod cli;
pub mod config;
pub mod count;
pub mod error;
pub mod exit;
pub mod league;
pub mod logging;
pub mod pipeline;
pub mod rank;
pub mod reporting;
pub mod store;
pub mod types;

pub use error::{LeagueError, Result};
