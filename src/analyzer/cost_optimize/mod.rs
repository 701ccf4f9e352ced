//! Cloud Cost Optimization Analyzer
//!
//! A rule engine that inspects tracked cloud resources and recommends cheaper
//! configurations for over-provisioned instances and oversized storage.
//!
//! # Pipeline
//!
//! `resources -> recommendations -> summary`
//!
//! The engine is pure: it takes a slice of [`Resource`] records and returns
//! [`Recommendation`] records plus an [`OptimizationSummary`]. Loading
//! inventories and tracking implementation state happen outside it.
//!
//! # Example
//!
//! ```rust
//! use cloudopt::analyzer::cost_optimize::{
//!     OptimizerConfig, Resource, ResourceKind, analyze_resources, calculate_summary,
//! };
//!
//! let resources = vec![
//!     Resource::new(1, "web-server-1", ResourceKind::Instance, 150.0)
//!         .with_instance_type("t3.xlarge")
//!         .with_utilization(15.0, 25.0),
//!     Resource::new(2, "backup-storage", ResourceKind::Storage, 100.0).with_storage_gb(1000),
//! ];
//!
//! let recommendations = analyze_resources(&resources, &OptimizerConfig::default());
//! let summary = calculate_summary(&resources, &recommendations);
//!
//! assert_eq!(recommendations.len(), 2);
//! assert_eq!(summary.open_recommendations, 2);
//! ```
//!
//! # Optimization Rules
//!
//! - COST-OPT-001: instance with CPU < 30% and memory < 50% -> `downsize`
//! - COST-OPT-002: storage volume larger than 500 GB -> `shrink`

/// Configuration for the optimizer.
pub mod config;

/// Core data types.
pub mod types;

/// Instance downsizing catalog.
pub mod catalog;

/// Individual optimization rules (COST-OPT-001, COST-OPT-002).
pub mod rules;

/// Rule dispatch over a resource list.
pub mod engine;

/// Summary aggregation.
pub mod summary;

/// Inventory loading and validation.
pub mod inventory;

/// Output formatting (table, JSON, YAML).
pub mod formatter;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::OptimizerConfig;

pub use types::{
    AnalysisMetadata, OptimizationReport, OptimizationSummary, Recommendation, RecommendationKind,
    Resource, ResourceKind, RuleCode,
};

pub use catalog::{FALLBACK_INSTANCE_TYPE, suggest_smaller_instance};

pub use rules::{all_rule_codes, codes as rule_codes, rule_description};

pub use engine::{analyze_resources, evaluate, evaluate_resource};

pub use summary::calculate_summary;

pub use inventory::{Inventory, load_inventory, parse_inventory, sample_inventory};

pub use formatter::{OutputFormat, format_report, format_report_to_string, format_resources};
