// src/logging.rs
//! Tracing subscriber setup for the `popleague` binary.

use tracing::Level;

/// Environment variable consulted for the log level.
pub const LEVEL_ENV: &str = "POPLEAGUE_LOG_LEVEL";

/// Parses a log level string (case-insensitive).
///
/// Recognized values: `trace`, `debug`, `info`, `warn`, `error`.
#[must_use]
pub fn parse_level(s: &str) -> Option<Level> {
    match s.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// `--verbose` wins, then `POPLEAGUE_LOG_LEVEL`, then `WARN`.
#[must_use]
pub fn resolve_level(verbose: bool) -> Level {
    if verbose {
        return Level::DEBUG;
    }
    std::env::var(LEVEL_ENV)
        .ok()
        .and_then(|s| parse_level(&s))
        .unwrap_or(Level::WARN)
}

/// Installs a stderr fmt subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(resolve_level(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
