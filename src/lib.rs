//! # cloudopt
//!
//! A command-line cost optimization engine for cloud resource inventories.
//! It flags over-provisioned compute instances and oversized storage volumes
//! and recommends a cheaper configuration for each, with an estimated monthly
//! saving and a confidence score.
//!
//! ## Example
//!
//! ```rust
//! use cloudopt::analyzer::{OptimizerConfig, evaluate};
//! use cloudopt::analyzer::cost_optimize::sample_inventory;
//!
//! let inventory = sample_inventory();
//! let (recommendations, summary) = evaluate(&inventory.resources, &OptimizerConfig::default());
//!
//! assert_eq!(recommendations.len(), 4);
//! assert_eq!(summary.total_resources, 8);
//! ```

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod ledger;

// Re-export commonly used types and functions
pub use analyzer::{
    OptimizationReport, OptimizationSummary, OptimizerConfig, Recommendation, Resource,
    analyze_resources, calculate_summary, evaluate,
};
pub use error::{CloudOptError, Result};
pub use handlers::*;
use cli::Commands;
use config::types::Config;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Optimize {
            inventory,
            format,
            output,
            ledger,
            open_only,
            offset,
            limit,
        } => {
            let options = OptimizeOptions {
                format: format.map(Into::into),
                output,
                ledger,
                open_only,
                offset,
                limit,
            };
            handlers::handle_optimize(&inventory, options, config).map(|_| ())
        }
        Commands::Resources {
            inventory,
            kind,
            offset,
            limit,
            json,
        } => handlers::handle_resources(&inventory, kind.map(Into::into), offset, limit, json)
            .map(|_| ()),
        Commands::Implement {
            inventory,
            resource_id,
            ledger,
        } => handlers::handle_implement(&inventory, resource_id, ledger, config).map(|_| ()),
        Commands::Sample { output } => handlers::handle_sample(output.as_deref()),
    }
}
