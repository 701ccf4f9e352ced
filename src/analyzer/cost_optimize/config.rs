//! Configuration for cloud cost optimization analysis.

use super::rules::all_rule_codes;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Thresholds and savings rates used by the optimization rules.
///
/// The defaults are product heuristics; every value can be overridden from the
/// `[optimizer]` table of `.cloudopt.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Instances below this CPU utilization may be over-provisioned (default: 30)
    pub cpu_threshold_percent: f64,

    /// Instances below this memory utilization may be over-provisioned (default: 50)
    pub memory_threshold_percent: f64,

    /// Average utilization below which the largest savings tier applies (default: 15)
    pub very_low_utilization_percent: f64,

    /// Average utilization below which the middle savings tier applies (default: 25)
    pub low_utilization_percent: f64,

    /// Savings rate for very low utilization (default: 0.6)
    pub very_low_savings_rate: f64,

    /// Savings rate for low utilization (default: 0.5)
    pub low_savings_rate: f64,

    /// Savings rate for the remaining over-provisioned instances (default: 0.4)
    pub moderate_savings_rate: f64,

    /// Storage volumes strictly larger than this are oversized (default: 500)
    pub storage_threshold_gb: u64,

    /// Fraction of the current size to suggest for oversized storage (default: 0.7)
    pub storage_shrink_factor: f64,

    /// Savings rate for shrinking oversized storage (default: 0.3)
    pub storage_savings_rate: f64,

    /// Rules to ignore (by rule code)
    pub ignore_rules: Vec<String>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            cpu_threshold_percent: 30.0,
            memory_threshold_percent: 50.0,
            very_low_utilization_percent: 15.0,
            low_utilization_percent: 25.0,
            very_low_savings_rate: 0.6,
            low_savings_rate: 0.5,
            moderate_savings_rate: 0.4,
            storage_threshold_gb: 500,
            storage_shrink_factor: 0.7,
            storage_savings_rate: 0.3,
            ignore_rules: Vec::new(),
        }
    }
}

impl OptimizerConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CPU and memory utilization thresholds.
    pub fn with_utilization_thresholds(mut self, cpu: f64, memory: f64) -> Self {
        self.cpu_threshold_percent = cpu;
        self.memory_threshold_percent = memory;
        self
    }

    /// Set the storage size threshold.
    pub fn with_storage_threshold(mut self, gb: u64) -> Self {
        self.storage_threshold_gb = gb;
        self
    }

    /// Add a rule to ignore.
    pub fn ignore_rule(mut self, rule: impl Into<String>) -> Self {
        self.ignore_rules.push(rule.into());
        self
    }

    /// Check if a rule should be ignored.
    pub fn should_ignore_rule(&self, rule: &str) -> bool {
        self.ignore_rules.iter().any(|r| r == rule)
    }

    /// Savings rate for an instance with the given average utilization.
    pub fn instance_savings_rate(&self, average_utilization: f64) -> f64 {
        if average_utilization < self.very_low_utilization_percent {
            self.very_low_savings_rate
        } else if average_utilization < self.low_utilization_percent {
            self.low_savings_rate
        } else {
            self.moderate_savings_rate
        }
    }

    /// Check that every threshold is within its meaningful range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_percent("cpu_threshold_percent", self.cpu_threshold_percent)?;
        check_percent("memory_threshold_percent", self.memory_threshold_percent)?;
        check_percent(
            "very_low_utilization_percent",
            self.very_low_utilization_percent,
        )?;
        check_percent("low_utilization_percent", self.low_utilization_percent)?;

        if self.very_low_utilization_percent > self.low_utilization_percent {
            return Err(ConfigError::InvalidValue {
                field: "very_low_utilization_percent",
                reason: format!(
                    "{} must not exceed low_utilization_percent ({})",
                    self.very_low_utilization_percent, self.low_utilization_percent
                ),
            });
        }

        check_rate("very_low_savings_rate", self.very_low_savings_rate)?;
        check_rate("low_savings_rate", self.low_savings_rate)?;
        check_rate("moderate_savings_rate", self.moderate_savings_rate)?;
        check_rate("storage_savings_rate", self.storage_savings_rate)?;

        if !(self.storage_shrink_factor > 0.0 && self.storage_shrink_factor < 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "storage_shrink_factor",
                reason: format!("{} is not between 0 and 1", self.storage_shrink_factor),
            });
        }

        if let Some(unknown) = self
            .ignore_rules
            .iter()
            .find(|rule| !all_rule_codes().contains(&rule.as_str()))
        {
            return Err(ConfigError::InvalidValue {
                field: "ignore_rules",
                reason: format!(
                    "unknown rule code '{}' (known: {})",
                    unknown,
                    all_rule_codes().join(", ")
                ),
            });
        }

        Ok(())
    }
}

fn check_percent(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 100.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("{} is not a percentage in (0, 100]", value),
        })
    }
}

fn check_rate(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("{} is not a rate in (0, 1]", value),
        })
    }
}
