// src/cli/handlers.rs
use crate::cli::args::PathArgs;
use crate::config::{self, Config};
use crate::exit::LeagueExit;
use crate::pipeline::Pipeline;
use crate::reporting;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Flags shared by every subcommand.
pub struct Globals<'a> {
    pub config: Option<&'a Path>,
    pub json: bool,
}

fn build_pipeline(globals: &Globals, args: &PathArgs) -> Result<Pipeline> {
    let mut config = Config::load(globals.config).context("Failed to load configuration")?;
    args.apply(&mut config);
    Ok(Pipeline::new(config)?)
}

/// Handles the run command.
///
/// # Errors
/// Returns error if either phase fails.
pub fn handle_run(globals: &Globals, args: &PathArgs) -> Result<LeagueExit> {
    let pipeline = build_pipeline(globals, args)?;
    let report = pipeline.run().context("Pipeline failed")?;
    if globals.json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_run_report(&report);
    }
    Ok(LeagueExit::Success)
}

/// Handles the count command.
///
/// # Errors
/// Returns error if counting fails.
pub fn handle_count(globals: &Globals, args: &PathArgs) -> Result<LeagueExit> {
    let pipeline = build_pipeline(globals, args)?;
    let summary = pipeline.count_phase().context("Count phase failed")?;
    if globals.json {
        reporting::print_json(&summary)?;
    } else {
        reporting::print_count_summary(&summary, &pipeline.config().paths.intermediate);
    }
    Ok(LeagueExit::Success)
}

/// Handles the rank command.
///
/// # Errors
/// Returns error if ranking fails.
pub fn handle_rank(globals: &Globals, args: &PathArgs) -> Result<LeagueExit> {
    let pipeline = build_pipeline(globals, args)?;
    let summary = pipeline.rank_phase().context("Rank phase failed")?;
    if globals.json {
        reporting::print_json(&summary)?;
    } else {
        reporting::print_rank_summary(&summary);
    }
    Ok(LeagueExit::Success)
}

/// Handles the init command.
///
/// # Errors
/// Returns error if the config file cannot be written.
pub fn handle_init() -> Result<LeagueExit> {
    if config::write_default(Path::new("."))? {
        println!("{}", format!("Created {}", config::CONFIG_FILE).green());
    } else {
        println!(
            "{}",
            format!("{} already exists.", config::CONFIG_FILE).yellow()
        );
    }
    Ok(LeagueExit::Success)
}
