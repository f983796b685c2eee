// src/exit.rs
//! Standardized process exit codes for `popleague`.
//!
//! Provides a stable contract for the scheduler that runs the pipeline.

use std::process::Termination;

use crate::error::LeagueError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LeagueExit {
    /// Both phases completed and the output was written.
    Success = 0,
    /// Generic error (I/O, unexpected failure).
    Error = 1,
    /// Malformed edge list or intermediate record.
    ParseFailure = 2,
    /// League file or configuration missing, unreadable or invalid.
    ConfigFailure = 3,
    /// A league member's popularity could not be resolved.
    ConsistencyFailure = 4,
}

impl LeagueExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps an error chain to its exit code by finding the innermost `LeagueError`.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.chain().find_map(|e| e.downcast_ref::<LeagueError>()) {
            Some(LeagueError::Parse { .. }) => Self::ParseFailure,
            Some(LeagueError::Configuration { .. }) => Self::ConfigFailure,
            Some(LeagueError::Consistency { .. }) => Self::ConsistencyFailure,
            Some(LeagueError::Io { .. }) | None => Self::Error,
        }
    }
}

impl Termination for LeagueExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
