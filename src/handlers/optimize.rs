//! Handler for the `optimize` command.
//!
//! Loads an inventory, runs the recommendation engine, merges implementation
//! state from the ledger and renders the report.

use super::utils::Pagination;
use crate::analyzer::cost_optimize::{
    OptimizationReport, OutputFormat, analyze_resources, calculate_summary, format_report,
    format_report_to_string, load_inventory,
};
use crate::config::types::Config;
use crate::error::Result;
use crate::ledger::ImplementationLedger;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Configuration for the optimize command
#[derive(Debug, Clone, Default)]
pub struct OptimizeOptions {
    /// Output format (falls back to the configured default)
    pub format: Option<OutputFormat>,
    /// Output file
    pub output: Option<PathBuf>,
    /// Ledger file (falls back to the configured default)
    pub ledger: Option<PathBuf>,
    /// Drop implemented recommendations from the listing
    pub open_only: bool,
    /// Recommendations to skip
    pub offset: usize,
    /// Maximum recommendations to list
    pub limit: usize,
}

/// Build the optimization report for an inventory without printing it.
///
/// The summary always covers the whole inventory; `open_only` and pagination
/// only narrow the recommendation listing.
pub fn build_report(
    inventory_path: &Path,
    options: &OptimizeOptions,
    config: &Config,
) -> Result<OptimizationReport> {
    let pagination = Pagination::new(options.offset, options.limit)?;
    let start = Instant::now();

    let inventory = load_inventory(inventory_path)?;
    let mut recommendations = analyze_resources(&inventory.resources, &config.optimizer);

    let ledger_path = options
        .ledger
        .clone()
        .unwrap_or_else(|| config.output.ledger_path.clone());
    let ledger = ImplementationLedger::open(ledger_path)?;
    let applied = ledger.apply(&mut recommendations);
    log::debug!(
        "{} recommendation(s) marked implemented from {}",
        applied,
        ledger.path().display()
    );

    let mut report = OptimizationReport::new(inventory_path.to_path_buf());
    report.summary = calculate_summary(&inventory.resources, &recommendations);
    report.recommendations = recommendations;

    if options.open_only {
        report.retain_open();
    }
    report.recommendations = pagination.apply(report.recommendations);

    report.metadata.duration_ms = start.elapsed().as_millis() as u64;
    Ok(report)
}

/// Handle the `optimize` command.
pub fn handle_optimize(
    inventory_path: &Path,
    options: OptimizeOptions,
    config: &Config,
) -> Result<OptimizationReport> {
    let report = build_report(inventory_path, &options, config)?;
    let format = options.format.unwrap_or(config.output.default_format);

    if let Some(output_path) = &options.output {
        let output = format_report_to_string(&report, format);
        std::fs::write(output_path, output)?;
        println!("Report written to: {}", output_path.display());
    } else {
        format_report(&report, format);
    }

    Ok(report)
}
