//! # Analyzer Module
//!
//! This module provides resource analysis capabilities for detecting:
//! - Over-provisioned compute instances
//! - Oversized storage volumes
//! - Potential monthly savings across an inventory

pub mod cost_optimize;

// Re-export the primary analysis entry points
pub use cost_optimize::{
    OptimizationReport, OptimizationSummary, OptimizerConfig, Recommendation, Resource,
    analyze_resources, calculate_summary, evaluate,
};
