use crate::analyzer::cost_optimize::{OptimizerConfig, OutputFormat};
use crate::ledger::DEFAULT_LEDGER_FILE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub optimizer: OptimizerConfig,
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format used when `--format` is not given
    pub default_format: OutputFormat,
    /// Ledger file used when `--ledger` is not given
    pub ledger_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Table,
            ledger_path: PathBuf::from(DEFAULT_LEDGER_FILE),
        }
    }
}
