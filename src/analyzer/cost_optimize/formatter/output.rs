//! Output formatting for optimization reports.
//!
//! Supports multiple output formats: table, JSON, YAML, and plain text.

use crate::analyzer::cost_optimize::rules::rule_description;
use crate::analyzer::cost_optimize::types::{OptimizationReport, Recommendation, Resource};
use colored::Colorize;
use serde::{Deserialize, Serialize};

// ============================================================================
// Output Format
// ============================================================================

/// Output format for optimization reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Boxed terminal table (default)
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// Plain text summary
    Summary,
}

const RULE: &str =
    "═══════════════════════════════════════════════════════════════════════════════════════";

// ============================================================================
// Formatting Functions
// ============================================================================

/// Format an optimization report to string.
pub fn format_report_to_string(report: &OptimizationReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => format_table(report),
        OutputFormat::Json => format_json(report),
        OutputFormat::Yaml => format_yaml(report),
        OutputFormat::Summary => format_summary(report),
    }
}

/// Format and print an optimization report.
pub fn format_report(report: &OptimizationReport, format: OutputFormat) {
    println!("{}", format_report_to_string(report, format));
}

// ============================================================================
// Table Format
// ============================================================================

fn format_table(report: &OptimizationReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{}\n", RULE.bright_blue()));
    output.push_str(&format!(
        "{}\n",
        "💰 CLOUD COST OPTIMIZATION REPORT".bright_white().bold()
    ));
    output.push_str(&format!("{}\n\n", RULE.bright_blue()));

    output.push_str(&format_summary_section(report));

    if report.has_recommendations() {
        output.push_str(&format!(
            "\n{}\n",
            "┌─ Recommendations ─────────────────────────────────────────────────────────────────┐"
                .bright_blue()
        ));

        for (i, rec) in report.recommendations.iter().enumerate() {
            output.push_str(&format_recommendation(rec));

            if i < report.recommendations.len() - 1 {
                output.push_str(&format!(
                    "│{}",
                    "────────────────────────────────────────────────────────────────────────────────\n"
                        .dimmed()
                ));
            }
        }

        output.push_str(&format!(
            "{}\n",
            "└───────────────────────────────────────────────────────────────────────────────────┘"
                .bright_blue()
        ));
    } else {
        output.push_str(&format!(
            "\n{}\n",
            "✅ No optimization opportunities found! Your resources look right-sized.".green()
        ));
    }

    output.push_str(&format!("\n{}\n", RULE.bright_blue()));

    output
}

fn format_recommendation(rec: &Recommendation) -> String {
    let mut output = String::new();

    let status = if rec.implemented {
        "implemented".green()
    } else {
        "open".yellow()
    };

    output.push_str(&format!(
        "│\n│ {} {} {} #{} {}\n",
        format!("[{}]", rec.rule_code).bright_cyan(),
        rec.kind.as_str().bold(),
        status,
        rec.resource_id,
        rec.resource_name.bright_white()
    ));
    output.push_str(&format!(
        "│   {} {}\n",
        "Rule:".dimmed(),
        rule_description(rec.rule_code.as_str())
    ));
    output.push_str(&format!("│   {} {}\n", "Reason:".dimmed(), rec.reason));
    output.push_str(&format!(
        "│   {} {}\n",
        "Current:".dimmed(),
        rec.current_config.red()
    ));
    output.push_str(&format!(
        "│   {} {}\n",
        "Suggested:".dimmed(),
        rec.suggested_config.green()
    ));
    output.push_str(&format!(
        "│   {} ${:.2}/month     {} {:.0}%\n",
        "Saving:".dimmed(),
        rec.potential_saving,
        "Confidence:".dimmed(),
        rec.confidence * 100.0
    ));

    output
}

fn format_summary_section(report: &OptimizationReport) -> String {
    let summary = &report.summary;
    let mut output = String::new();

    output.push_str(&format!(
        "{}",
        "┌─ Summary ─────────────────────────────────────────────────────────────────────────┐\n"
            .bright_blue()
    ));

    output.push_str(&format!(
        "│ {} {:>6}     {} {:>10}     {} {:>6}\n",
        "Resources:".dimmed(),
        summary.total_resources.to_string().bright_white(),
        "Monthly cost:".dimmed(),
        format!("${:.2}", summary.total_monthly_cost).bright_white(),
        "Open:".dimmed(),
        if summary.open_recommendations > 0 {
            summary.open_recommendations.to_string().yellow()
        } else {
            summary.open_recommendations.to_string().green()
        },
    ));

    output.push_str(&format!(
        "│ {} ${:.2}/month ({}%)\n",
        "Potential savings:".dimmed(),
        summary.total_potential_savings,
        summary.savings_percentage.to_string().green(),
    ));

    output.push_str(&format!(
        "│ {} {}ms     {} {}\n",
        "Duration:".dimmed(),
        report.metadata.duration_ms.to_string().dimmed(),
        "Inventory:".dimmed(),
        report.metadata.source.display().to_string().dimmed(),
    ));

    output.push_str(&format!(
        "{}",
        "└───────────────────────────────────────────────────────────────────────────────────┘\n"
            .bright_blue()
    ));

    output
}

// ============================================================================
// JSON Format
// ============================================================================

fn format_json(report: &OptimizationReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

// ============================================================================
// YAML Format
// ============================================================================

fn format_yaml(report: &OptimizationReport) -> String {
    serde_yaml::to_string(report).unwrap_or_default()
}

// ============================================================================
// Summary Format
// ============================================================================

fn format_summary(report: &OptimizationReport) -> String {
    let summary = &report.summary;
    let mut output = String::new();

    output.push_str("▶ COST OPTIMIZATION SUMMARY\n");
    output.push_str("──────────────────────────────────────────────────\n");
    output.push_str(&format!("│ Resources: {}\n", summary.total_resources));
    output.push_str(&format!(
        "│ Monthly cost: ${:.2}\n",
        summary.total_monthly_cost
    ));
    output.push_str(&format!(
        "│ Open recommendations: {}\n",
        summary.open_recommendations
    ));
    output.push_str(&format!(
        "│ Potential savings: ${:.2}/month ({}%)\n",
        summary.total_potential_savings, summary.savings_percentage
    ));
    output.push_str(&format!(
        "│ Analysis Time: {}ms\n",
        report.metadata.duration_ms
    ));
    output.push_str("──────────────────────────────────────────────────\n");

    output
}

// ============================================================================
// Resource Listing
// ============================================================================

/// Format a resource listing as a plain table.
pub fn format_resources(resources: &[Resource]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:>4}  {:<20} {:<9} {:<7} {:<16} {:>6} {:>6} {:>8} {:>10}\n",
        "ID", "NAME", "TYPE", "CLOUD", "INSTANCE TYPE", "CPU%", "MEM%", "GB", "COST/MO"
    ));

    for resource in resources {
        output.push_str(&format!(
            "{:>4}  {:<20} {:<9} {:<7} {:<16} {:>6} {:>6} {:>8} {:>10}\n",
            resource.id,
            resource.name,
            resource.kind.as_str(),
            resource.provider,
            resource.instance_type.as_deref().unwrap_or("-"),
            optional(resource.cpu_utilization),
            optional(resource.memory_utilization),
            optional(resource.storage_gb),
            format!("${:.2}", resource.monthly_cost),
        ));
    }

    output
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

// ============================================================================
// Tests
// ============================================================================
