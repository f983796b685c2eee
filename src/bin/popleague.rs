use clap::Parser;
use colored::Colorize;
use popleague_core::cli::{dispatch, Cli};
use popleague_core::exit::LeagueExit;
use popleague_core::logging;

fn main() -> LeagueExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = if let Some(cmd) = &cli.command {
        dispatch::execute(&cli, cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(LeagueExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            LeagueExit::from_error(&e)
        }
    }
}
