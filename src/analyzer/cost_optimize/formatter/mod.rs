//! Output formatting for optimization reports.
//!
//! Supports multiple output formats: table, JSON, YAML, and plain text.

mod output;

pub use output::{OutputFormat, format_report, format_report_to_string, format_resources};
