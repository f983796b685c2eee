// src/reporting.rs
//! Console summaries for pipeline runs.

use crate::pipeline::{CountSummary, RankSummary};
use crate::types::{NodeId, RunReport};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

/// Prints any serializable summary as pretty JSON on stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_count_summary(summary: &CountSummary, table: &Path) {
    println!(
        "{} {} edges into {} nodes from {} {} in {}ms",
        "Counted".green().bold(),
        summary.edges,
        summary.distinct_nodes,
        summary.input_files,
        pluralize("partition", summary.input_files),
        summary.elapsed_ms
    );
    println!("  {} {}", "-->".blue(), table.display());
}

pub fn print_rank_summary(summary: &RankSummary) {
    let ranked = summary.outcome.assignment.len();
    println!(
        "{} {ranked} of {} league {} in {}ms",
        "Ranked".green().bold(),
        summary.league_size,
        pluralize("member", summary.league_size),
        summary.elapsed_ms
    );
    print_omitted(&summary.outcome.omitted);
}

pub fn print_run_report(report: &RunReport) {
    println!(
        "{} {} edges, {} nodes, {} {}",
        "Counted".green().bold(),
        report.edges,
        report.distinct_nodes,
        report.input_files,
        pluralize("partition", report.input_files)
    );
    println!(
        "{} {} of {} league {}",
        "Ranked".green().bold(),
        report.ranked,
        report.league_size,
        pluralize("member", report.league_size)
    );
    print_omitted(&report.omitted);
    println!(
        "{}",
        format!("Done in {}ms.", report.count_ms + report.rank_ms).dimmed()
    );
}

fn print_omitted(omitted: &[NodeId]) {
    if omitted.is_empty() {
        return;
    }
    let list: Vec<String> = omitted.iter().map(ToString::to_string).collect();
    println!(
        "{} {} without in-edges left out: {}",
        "warning:".yellow().bold(),
        pluralize("member", omitted.len()),
        list.join(", ")
    );
}

fn pluralize(word: &str, n: usize) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
