//! COST-OPT-001: Over-provisioned compute instance.

use super::{codes, format_price, format_whole_dollars, round_to};
use crate::analyzer::cost_optimize::catalog::suggest_smaller_instance;
use crate::analyzer::cost_optimize::config::OptimizerConfig;
use crate::analyzer::cost_optimize::types::{
    Recommendation, RecommendationKind, Resource, RuleCode,
};

/// Confidence at the pivot utilization.
const CONFIDENCE_BASE: f64 = 0.5;
/// Average utilization at which confidence equals the base.
const CONFIDENCE_PIVOT: f64 = 30.0;
/// Utilization span over which confidence grows by 1.0.
const CONFIDENCE_SPAN: f64 = 60.0;
const CONFIDENCE_CAP: f64 = 0.95;

/// Check an instance for over-provisioning.
///
/// Fires only when both utilization values are known and below their
/// thresholds. A missing value is never treated as zero.
///
/// A resource without an instance type is rendered as `unknown` in
/// `current_config` (never `None`) and gets the catalog fallback suggestion.
pub fn check(resource: &Resource, config: &OptimizerConfig) -> Option<Recommendation> {
    let cpu = resource.cpu_utilization?;
    let memory = resource.memory_utilization?;

    let over_provisioned =
        cpu < config.cpu_threshold_percent && memory < config.memory_threshold_percent;
    if !over_provisioned {
        return None;
    }

    let average = (cpu + memory) / 2.0;
    let savings_rate = config.instance_savings_rate(average);
    let monthly_saving = resource.monthly_cost * savings_rate;
    let suggested_type = suggest_smaller_instance(resource.instance_type.as_deref());
    let current_type = resource.instance_type.as_deref().unwrap_or("unknown");

    Some(Recommendation {
        resource_id: resource.id,
        resource_name: resource.name.clone(),
        rule_code: RuleCode::new(codes::OVERPROVISIONED_INSTANCE),
        kind: RecommendationKind::Downsize,
        current_config: format!(
            "{} - ${}/month",
            current_type,
            format_price(resource.monthly_cost)
        ),
        suggested_config: format!(
            "{} - ${}/month",
            suggested_type,
            format_whole_dollars(resource.monthly_cost - monthly_saving)
        ),
        potential_saving: monthly_saving,
        confidence: confidence(average),
        reason: format!(
            "Low utilization: {:?}% CPU, {:?}% memory. Downsize to save costs.",
            cpu, memory
        ),
        implemented: false,
        implemented_at: None,
    })
}

/// Lower average utilization gives higher confidence, capped below 1.
fn confidence(average_utilization: f64) -> f64 {
    let raw = CONFIDENCE_BASE + (CONFIDENCE_PIVOT - average_utilization) / CONFIDENCE_SPAN;
    round_to(raw.clamp(0.0, CONFIDENCE_CAP), 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::cost_optimize::types::ResourceKind;

    fn instance(cpu: f64, memory: f64, cost: f64) -> Resource {
        Resource::new(1, "test-server", ResourceKind::Instance, cost)
            .with_provider("aws")
            .with_instance_type("t3.xlarge")
            .with_utilization(cpu, memory)
    }

    #[test]
    fn test_overprovisioned_instance() {
        let rec = check(&instance(15.0, 25.0, 150.0), &OptimizerConfig::default()).unwrap();

        assert_eq!(rec.kind, RecommendationKind::Downsize);
        assert_eq!(rec.rule_code.as_str(), codes::OVERPROVISIONED_INSTANCE);
        assert_eq!(rec.potential_saving, 75.0);
        assert_eq!(rec.confidence, 0.67);
        assert_eq!(rec.current_config, "t3.xlarge - $150.0/month");
        assert_eq!(rec.suggested_config, "t3.large - $75/month");
        assert_eq!(
            rec.reason,
            "Low utilization: 15.0% CPU, 25.0% memory. Downsize to save costs."
        );
        assert!(!rec.implemented);
        assert!(rec.implemented_at.is_none());
    }

    #[test]
    fn test_confidence_tie_rounds_to_even() {
        // avg 22.5 -> raw confidence 0.625
        let rec = check(&instance(20.0, 25.0, 100.0), &OptimizerConfig::default()).unwrap();
        assert_eq!(rec.confidence, 0.62);
    }

    #[test]
    fn test_well_utilized_instance() {
        assert!(check(&instance(75.0, 85.0, 180.0), &OptimizerConfig::default()).is_none());
    }

    #[test]
    fn test_thresholds_are_strict() {
        let config = OptimizerConfig::default();
        assert!(check(&instance(30.0, 10.0, 100.0), &config).is_none());
        assert!(check(&instance(10.0, 50.0, 100.0), &config).is_none());
        assert!(check(&instance(29.9, 49.9, 100.0), &config).is_some());
    }

    #[test]
    fn test_missing_utilization_never_fires() {
        let config = OptimizerConfig::default();
        let cpu_only = Resource::new(2, "half", ResourceKind::Instance, 100.0).with_cpu(5.0);
        let memory_only = Resource::new(3, "half", ResourceKind::Instance, 100.0).with_memory(5.0);
        let neither = Resource::new(4, "none", ResourceKind::Instance, 100.0);

        assert!(check(&cpu_only, &config).is_none());
        assert!(check(&memory_only, &config).is_none());
        assert!(check(&neither, &config).is_none());
    }

    #[test]
    fn test_savings_tiers() {
        let config = OptimizerConfig::default();

        // avg 14 -> 60%
        let rec = check(&instance(8.0, 20.0, 70.0), &config).unwrap();
        assert!((rec.potential_saving - 42.0).abs() < 1e-9);
        assert_eq!(rec.confidence, 0.77);
        assert_eq!(rec.suggested_config, "t3.large - $28/month");

        // avg 21 -> 50%
        let rec = check(&instance(12.0, 30.0, 90.0), &config).unwrap();
        assert!((rec.potential_saving - 45.0).abs() < 1e-9);
        assert_eq!(rec.confidence, 0.65);

        // avg 35 -> 40%
        let rec = check(&instance(25.0, 45.0, 100.0), &config).unwrap();
        assert!((rec.potential_saving - 40.0).abs() < 1e-9);
        assert_eq!(rec.confidence, 0.42);
    }

    #[test]
    fn test_confidence_capped() {
        let rec = check(&instance(0.0, 0.0, 100.0), &OptimizerConfig::default()).unwrap();
        assert_eq!(rec.confidence, 0.95);
    }

    #[test]
    fn test_confidence_never_negative_with_loose_thresholds() {
        let config = OptimizerConfig::default().with_utilization_thresholds(100.0, 100.0);
        let rec = check(&instance(99.0, 99.0, 100.0), &config).unwrap();
        assert_eq!(rec.confidence, 0.0);
    }

    #[test]
    fn test_unknown_instance_type_uses_placeholder() {
        let resource = Resource::new(5, "odd", ResourceKind::Instance, 50.0)
            .with_instance_type("x9.huge")
            .with_utilization(5.0, 5.0);
        let rec = check(&resource, &OptimizerConfig::default()).unwrap();
        assert!(rec.suggested_config.starts_with("smaller-instance - $"));
        assert!(rec.current_config.starts_with("x9.huge - $50.0"));
    }

    #[test]
    fn test_missing_instance_type() {
        let resource =
            Resource::new(6, "bare", ResourceKind::Instance, 50.0).with_utilization(5.0, 5.0);
        let rec = check(&resource, &OptimizerConfig::default()).unwrap();
        assert_eq!(rec.current_config, "unknown - $50.0/month");
        assert_eq!(rec.suggested_config, "smaller-instance - $20/month");
    }
}
