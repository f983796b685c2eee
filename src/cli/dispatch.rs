//! Command dispatch logic extracted from the binary to keep `main` small.

use super::args::{Cli, Commands};
use super::handlers::{handle_count, handle_init, handle_rank, handle_run, Globals};
use crate::exit::LeagueExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(cli: &Cli, command: &Commands) -> Result<LeagueExit> {
    let globals = Globals {
        config: cli.config.as_deref(),
        json: cli.json,
    };
    match command {
        Commands::Run(args) => handle_run(&globals, args),
        Commands::Count(args) => handle_count(&globals, args),
        Commands::Rank(args) => handle_rank(&globals, args),
        Commands::Init => handle_init(),
    }
}
