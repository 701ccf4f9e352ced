use crate::analyzer::cost_optimize::{OutputFormat, ResourceKind};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cloudopt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find cost savings in your cloud resource inventory")]
#[command(long_about = "Analyzes a cloud resource inventory and recommends cheaper configurations for over-provisioned instances and oversized storage volumes, with a confidence score and monthly savings estimate for each.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate cost optimization recommendations for an inventory
    Optimize {
        /// Inventory file (JSON or YAML)
        #[arg(value_name = "INVENTORY")]
        inventory: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,

        /// Write the report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Ledger file with implemented recommendations
        #[arg(long, value_name = "FILE")]
        ledger: Option<PathBuf>,

        /// Only list recommendations that are not implemented yet
        #[arg(long)]
        open_only: bool,

        /// Number of recommendations to skip
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Maximum number of recommendations to list
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },

    /// List the resources in an inventory
    Resources {
        /// Inventory file (JSON or YAML)
        #[arg(value_name = "INVENTORY")]
        inventory: PathBuf,

        /// Only list resources of this kind
        #[arg(long, value_enum)]
        kind: Option<KindFilter>,

        /// Number of resources to skip
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Maximum number of resources to list
        #[arg(long, default_value_t = 100)]
        limit: usize,

        /// Output resources as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark the recommendation for a resource as implemented
    Implement {
        /// Inventory file (JSON or YAML)
        #[arg(value_name = "INVENTORY")]
        inventory: PathBuf,

        /// Resource identifier
        #[arg(value_name = "RESOURCE_ID")]
        resource_id: u64,

        /// Ledger file with implemented recommendations
        #[arg(long, value_name = "FILE")]
        ledger: Option<PathBuf>,
    },

    /// Print a sample inventory to get started
    Sample {
        /// Write the inventory to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Table,
    Json,
    Yaml,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindFilter {
    Instance,
    Storage,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Table => OutputFormat::Table,
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Yaml => OutputFormat::Yaml,
            ReportFormat::Summary => OutputFormat::Summary,
        }
    }
}

impl From<KindFilter> for ResourceKind {
    fn from(kind: KindFilter) -> Self {
        match kind {
            KindFilter::Instance => ResourceKind::Instance,
            KindFilter::Storage => ResourceKind::Storage,
        }
    }
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
