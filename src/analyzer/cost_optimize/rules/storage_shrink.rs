//! COST-OPT-002: Oversized storage volume.

use super::{codes, format_price, format_whole_dollars, round_to};
use crate::analyzer::cost_optimize::config::OptimizerConfig;
use crate::analyzer::cost_optimize::types::{
    Recommendation, RecommendationKind, Resource, RuleCode,
};

const CONFIDENCE_BASE: f64 = 0.6;
/// Size at which confidence equals the base.
const CONFIDENCE_PIVOT_GB: f64 = 500.0;
/// Excess GB over which confidence grows by 1.0.
const CONFIDENCE_SPAN_GB: f64 = 1000.0;
const CONFIDENCE_CAP: f64 = 0.9;

/// Check a storage volume for oversizing.
pub fn check(resource: &Resource, config: &OptimizerConfig) -> Option<Recommendation> {
    let storage_gb = resource
        .storage_gb
        .filter(|gb| *gb > config.storage_threshold_gb)?;

    let suggested_gb = (storage_gb as f64 * config.storage_shrink_factor).floor() as u64;
    let monthly_saving = resource.monthly_cost * config.storage_savings_rate;

    Some(Recommendation {
        resource_id: resource.id,
        resource_name: resource.name.clone(),
        rule_code: RuleCode::new(codes::OVERSIZED_STORAGE),
        kind: RecommendationKind::Shrink,
        current_config: format!(
            "{}GB - ${}/month",
            storage_gb,
            format_price(resource.monthly_cost)
        ),
        suggested_config: format!(
            "{}GB - ${}/month",
            suggested_gb,
            format_whole_dollars(resource.monthly_cost - monthly_saving)
        ),
        potential_saving: monthly_saving,
        confidence: confidence(storage_gb),
        reason: format!(
            "Large storage volume ({}GB). Consider reducing size to optimize costs.",
            storage_gb
        ),
        implemented: false,
        implemented_at: None,
    })
}

/// Larger volumes give higher confidence, capped below 1.
fn confidence(storage_gb: u64) -> f64 {
    let raw = CONFIDENCE_BASE + (storage_gb as f64 - CONFIDENCE_PIVOT_GB) / CONFIDENCE_SPAN_GB;
    round_to(raw.clamp(0.0, CONFIDENCE_CAP), 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::cost_optimize::types::ResourceKind;

    fn storage(gb: u64, cost: f64) -> Resource {
        Resource::new(1, "backup-storage", ResourceKind::Storage, cost)
            .with_provider("aws")
            .with_storage_gb(gb)
    }

    #[test]
    fn test_oversized_storage() {
        let rec = check(&storage(1000, 100.0), &OptimizerConfig::default()).unwrap();

        assert_eq!(rec.kind, RecommendationKind::Shrink);
        assert_eq!(rec.rule_code.as_str(), codes::OVERSIZED_STORAGE);
        assert!((rec.potential_saving - 30.0).abs() < 1e-9);
        assert_eq!(rec.confidence, 0.9);
        assert_eq!(rec.current_config, "1000GB - $100.0/month");
        assert_eq!(rec.suggested_config, "700GB - $70/month");
        assert_eq!(
            rec.reason,
            "Large storage volume (1000GB). Consider reducing size to optimize costs."
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let config = OptimizerConfig::default();
        assert!(check(&storage(500, 75.0), &config).is_none());
        assert!(check(&storage(200, 25.0), &config).is_none());
        assert!(check(&storage(501, 75.0), &config).is_some());
    }

    #[test]
    fn test_absent_or_zero_size_never_fires() {
        let config = OptimizerConfig::default();
        let absent = Resource::new(2, "bucket", ResourceKind::Storage, 10.0);
        assert!(check(&absent, &config).is_none());
        assert!(check(&storage(0, 10.0), &config).is_none());
    }

    #[test]
    fn test_suggested_size_is_floored() {
        let rec = check(&storage(1001, 100.0), &OptimizerConfig::default()).unwrap();
        assert!(rec.suggested_config.starts_with("700GB"));

        let rec = check(&storage(777, 100.0), &OptimizerConfig::default()).unwrap();
        assert!(rec.suggested_config.starts_with("543GB"));
    }

    #[test]
    fn test_confidence_scales_with_size() {
        let config = OptimizerConfig::default();
        let small = check(&storage(600, 50.0), &config).unwrap();
        let large = check(&storage(750, 50.0), &config).unwrap();
        assert_eq!(small.confidence, 0.7);
        assert_eq!(large.confidence, 0.85);
        assert!(large.confidence > small.confidence);
    }

    #[test]
    fn test_confidence_near_tie() {
        let rec = check(&storage(625, 50.0), &OptimizerConfig::default()).unwrap();
        assert_eq!(rec.confidence, 0.72);
    }

    #[test]
    fn test_custom_threshold() {
        let config = OptimizerConfig::default().with_storage_threshold(100);
        let rec = check(&storage(200, 25.0), &config).unwrap();
        assert!(rec.suggested_config.starts_with("140GB"));
        assert!(rec.confidence >= 0.0 && rec.confidence <= 1.0);
    }
}
