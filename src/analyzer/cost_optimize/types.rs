//! Core types for cloud cost optimization analysis.
//!
//! These types represent tracked cloud resources, the recommendations produced
//! for them, and the summary totals reported alongside.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

// ============================================================================
// Resource Kind
// ============================================================================

/// Kind of tracked cloud resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Compute instance (VM)
    Instance,
    /// Block or object storage volume
    Storage,
    /// Any kind the engine has no rule for
    #[serde(other)]
    Unknown,
}

impl ResourceKind {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instance => "instance",
            Self::Storage => "storage",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Resource
// ============================================================================

/// A snapshot of one tracked cloud resource.
///
/// Fields that do not apply to a resource's kind are `None`, never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Inventory identifier
    pub id: u64,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Resource kind
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    /// Provider label (e.g., "aws", "azure", "gcp")
    #[serde(default)]
    pub provider: String,
    /// Instance type label (e.g., "t3.xlarge")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    /// Free-form size label (e.g., "1000GB")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// CPU utilization percentage (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_utilization: Option<f64>,
    /// Memory utilization percentage (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_utilization: Option<f64>,
    /// Provisioned storage in GB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_gb: Option<u64>,
    /// Monthly cost in USD
    pub monthly_cost: f64,
}

impl Resource {
    /// Create a resource with only the required fields set.
    pub fn new(id: u64, name: impl Into<String>, kind: ResourceKind, monthly_cost: f64) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            provider: String::new(),
            instance_type: None,
            size: None,
            cpu_utilization: None,
            memory_utilization: None,
            storage_gb: None,
            monthly_cost,
        }
    }

    /// Set the provider label.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    /// Set the instance type label.
    pub fn with_instance_type(mut self, instance_type: impl Into<String>) -> Self {
        self.instance_type = Some(instance_type.into());
        self
    }

    /// Set both CPU and memory utilization.
    pub fn with_utilization(mut self, cpu: f64, memory: f64) -> Self {
        self.cpu_utilization = Some(cpu);
        self.memory_utilization = Some(memory);
        self
    }

    /// Set the CPU utilization only.
    pub fn with_cpu(mut self, cpu: f64) -> Self {
        self.cpu_utilization = Some(cpu);
        self
    }

    /// Set the memory utilization only.
    pub fn with_memory(mut self, memory: f64) -> Self {
        self.memory_utilization = Some(memory);
        self
    }

    /// Set the storage size, also filling the size label.
    pub fn with_storage_gb(mut self, storage_gb: u64) -> Self {
        self.storage_gb = Some(storage_gb);
        self.size = Some(format!("{}GB", storage_gb));
        self
    }

    /// Get a display identifier for the resource.
    pub fn identifier(&self) -> String {
        if self.name.is_empty() {
            format!("#{}", self.id)
        } else {
            format!("#{} {}", self.id, self.name)
        }
    }
}

// ============================================================================
// Rule Codes
// ============================================================================

/// A rule code identifier for the check that produced a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleCode(pub String);

impl RuleCode {
    /// Create a new rule code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RuleCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ============================================================================
// Recommendation Kind
// ============================================================================

/// Type of cost optimization being recommended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    /// Move an instance to a smaller type
    Downsize,
    /// Reduce the size of a storage volume
    Shrink,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Downsize => "downsize",
            Self::Shrink => "shrink",
        }
    }
}

impl fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Recommendation
// ============================================================================

/// A cost optimization recommendation for a single resource.
///
/// The engine always produces recommendations with `implemented == false`;
/// implementation state is tracked outside the engine and merged in by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Identifier of the resource this applies to
    pub resource_id: u64,
    /// Name of the resource this applies to
    pub resource_name: String,
    /// Rule code that triggered this recommendation
    pub rule_code: RuleCode,
    /// The kind of change recommended
    #[serde(rename = "recommendation_type")]
    pub kind: RecommendationKind,
    /// Human-readable description of the current configuration
    pub current_config: String,
    /// Human-readable description of the suggested configuration
    pub suggested_config: String,
    /// Estimated monthly savings in USD
    pub potential_saving: f64,
    /// Heuristic confidence score in [0, 1]
    pub confidence: f64,
    /// Why the rule fired
    pub reason: String,
    /// Whether the recommendation has been acted upon
    #[serde(default)]
    pub implemented: bool,
    /// When the recommendation was marked implemented
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implemented_at: Option<DateTime<Utc>>,
}

impl Recommendation {
    /// Check if the recommendation is still open (not implemented).
    pub fn is_open(&self) -> bool {
        !self.implemented
    }
}

// ============================================================================
// Optimization Summary
// ============================================================================

/// Summary totals for an optimization analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSummary {
    /// Number of resources analyzed
    pub total_resources: usize,
    /// Monthly cost across all analyzed resources
    pub total_monthly_cost: f64,
    /// Monthly savings across open recommendations
    pub total_potential_savings: f64,
    /// Number of open recommendations
    pub open_recommendations: usize,
    /// Savings as a percentage of total monthly cost (one decimal)
    pub savings_percentage: f64,
}

// ============================================================================
// Analysis Metadata
// ============================================================================

/// Metadata about the analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Analysis duration in milliseconds
    pub duration_ms: u64,
    /// cloudopt version
    pub version: String,
    /// Timestamp of the analysis
    pub timestamp: String,
    /// Inventory the resources were loaded from
    pub source: PathBuf,
}

// ============================================================================
// Optimization Report
// ============================================================================

/// Complete result of an optimization run, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationReport {
    /// Summary statistics
    pub summary: OptimizationSummary,
    /// Resource recommendations
    pub recommendations: Vec<Recommendation>,
    /// Analysis metadata
    pub metadata: AnalysisMetadata,
}

impl OptimizationReport {
    /// Create a new empty report.
    pub fn new(source: PathBuf) -> Self {
        Self {
            summary: OptimizationSummary::default(),
            recommendations: Vec::new(),
            metadata: AnalysisMetadata {
                duration_ms: 0,
                version: crate::VERSION.to_string(),
                timestamp: Utc::now().to_rfc3339(),
                source,
            },
        }
    }

    /// Check if there are any recommendations.
    pub fn has_recommendations(&self) -> bool {
        !self.recommendations.is_empty()
    }

    /// Drop recommendations that are already implemented.
    pub fn retain_open(&mut self) {
        self.recommendations.retain(Recommendation::is_open);
    }
}
