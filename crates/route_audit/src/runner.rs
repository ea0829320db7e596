//! End-to-end reconciliation run.
//!
//! Wires the input adapters, the comparison loop, and the report writer
//! together, with operator status lines and an optional progress bar.

use indicatif::{ProgressBar, ProgressStyle};

use crate::config::AuditConfig;
use crate::error::AuditError;
use crate::import::{load_edge_lengths, load_reference_distances, RouteReader};
use crate::reconcile::{Reconciliation, TerminationReason};
use crate::report::ReportWriter;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// All routes processed; every row is in the report.
    Completed,
    /// Halted on the first discrepant person (report contains all rows up
    /// to and including that person).
    DiscrepancyFound(u64),
    /// The output file already exists and overwriting was not permitted;
    /// nothing was written.
    SkippedExistingOutput,
}

/// Run one reconciliation pass with the given configuration.
///
/// Loads both lookup tables fully, then streams the route table row by row,
/// writing one comparison row per person to the output file as it goes.
///
/// # Errors
///
/// Any lookup, parse, or I/O failure aborts the run; report rows already
/// flushed remain on disk.
pub fn run(config: &AuditConfig) -> Result<RunOutcome, AuditError> {
    if config.output_file.exists() && !config.overwrite {
        println!(
            "{} already exists. Skipping (set overwrite to replace it).",
            config.output_file.display()
        );
        return Ok(RunOutcome::SkippedExistingOutput);
    }

    println!("Loading edges from {}...", config.edges_file.display());
    let edges = load_edge_lengths(&config.edges_file)?;
    println!("Loading people from {}...", config.people_file.display());
    let references = load_reference_distances(&config.people_file)?;
    println!("Loading routes from {}...", config.route_file.display());
    let routes = RouteReader::open(&config.route_file)?;

    let mut report = ReportWriter::create(&config.output_file)?;

    // One route row is expected per person, so the people count sizes the bar.
    let bar = if config.show_progress {
        let bar = ProgressBar::new(references.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(bar)
    } else {
        None
    };

    println!("Processing routes...");
    let mut reconciliation = Reconciliation::new(
        routes,
        &edges,
        &references,
        config.stop_if_discrepancy_found,
    );

    let mut last_row = None;
    for item in reconciliation.by_ref() {
        let row = item?;
        report.write_row(&row)?;
        if let Some(ref bar) = bar {
            bar.inc(1);
        }
        last_row = Some(row);
    }
    if let Some(ref bar) = bar {
        bar.finish_and_clear();
    }

    match (reconciliation.termination(), last_row) {
        (Some(TerminationReason::DiscrepancyFound(person_id)), Some(row)) => {
            println!(
                "Discrepancy has been found for person {}. \
                 Distance according to people info: {}. \
                 Distance according to sum of edges: {}. Stopping.",
                person_id, row.distance_reference, row.distance_sum_of_edges
            );
            Ok(RunOutcome::DiscrepancyFound(person_id))
        }
        _ => {
            println!("Saved {}.", config.output_file.display());
            Ok(RunOutcome::Completed)
        }
    }
}
