//! Summary aggregation for optimization results.
//!
//! Totals cost across all resources and savings across open recommendations.

use super::rules::round_to;
use super::types::{OptimizationSummary, Recommendation, Resource};

/// Calculate summary totals for a resource set and its recommendations.
///
/// Recommendations flagged as implemented are excluded from the savings total
/// and the open count. The savings percentage is 0 when total cost is 0.
pub fn calculate_summary(
    resources: &[Resource],
    recommendations: &[Recommendation],
) -> OptimizationSummary {
    let total_monthly_cost = resources
        .iter()
        .fold(0.0, |total, resource| total + resource.monthly_cost);

    let (total_potential_savings, open_recommendations) = recommendations
        .iter()
        .filter(|rec| rec.is_open())
        .fold((0.0, 0), |(savings, count), rec| {
            (savings + rec.potential_saving, count + 1)
        });

    OptimizationSummary {
        total_resources: resources.len(),
        total_monthly_cost,
        total_potential_savings,
        open_recommendations,
        savings_percentage: savings_percentage(total_potential_savings, total_monthly_cost),
    }
}

fn savings_percentage(savings: f64, total_cost: f64) -> f64 {
    if total_cost > 0.0 {
        round_to(savings / total_cost * 100.0, 1)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::cost_optimize::types::{RecommendationKind, ResourceKind, RuleCode};

    fn recommendation(resource_id: u64, saving: f64, implemented: bool) -> Recommendation {
        Recommendation {
            resource_id,
            resource_name: format!("res-{}", resource_id),
            rule_code: RuleCode::new("COST-OPT-001"),
            kind: RecommendationKind::Downsize,
            current_config: String::new(),
            suggested_config: String::new(),
            potential_saving: saving,
            confidence: 0.8,
            reason: String::new(),
            implemented,
            implemented_at: None,
        }
    }

    fn resources(costs: &[f64]) -> Vec<Resource> {
        costs
            .iter()
            .enumerate()
            .map(|(i, cost)| Resource::new(i as u64 + 1, "r", ResourceKind::Instance, *cost))
            .collect()
    }

    #[test]
    fn test_summary_totals() {
        let resources = resources(&[150.0, 180.0, 100.0, 75.0]);
        let recs = vec![recommendation(1, 75.0, false), recommendation(3, 30.0, false)];
        let summary = calculate_summary(&resources, &recs);

        assert_eq!(summary.total_resources, 4);
        assert_eq!(summary.total_monthly_cost, 505.0);
        assert_eq!(summary.total_potential_savings, 105.0);
        assert_eq!(summary.open_recommendations, 2);
        assert_eq!(summary.savings_percentage, 20.8);
    }

    #[test]
    fn test_implemented_recommendations_excluded() {
        let resources = resources(&[100.0, 100.0]);
        let recs = vec![recommendation(1, 40.0, true), recommendation(2, 20.0, false)];
        let summary = calculate_summary(&resources, &recs);

        assert_eq!(summary.total_potential_savings, 20.0);
        assert_eq!(summary.open_recommendations, 1);
        assert_eq!(summary.savings_percentage, 10.0);
    }

    #[test]
    fn test_percentage_tie_rounds_to_even() {
        // 36.75 / 300 = 12.25%
        let resources = resources(&[122.5, 177.5]);
        let recs = vec![recommendation(1, 36.75, false)];

        let summary = calculate_summary(&resources, &recs);
        assert_eq!(summary.total_monthly_cost, 300.0);
        assert_eq!(summary.savings_percentage, 12.2);
    }

    #[test]
    fn test_zero_cost_guard() {
        let summary = calculate_summary(&[], &[recommendation(1, 10.0, false)]);
        assert_eq!(summary.total_monthly_cost, 0.0);
        assert_eq!(summary.savings_percentage, 0.0);
        assert_eq!(summary.open_recommendations, 1);
    }

    #[test]
    fn test_all_implemented() {
        let resources = resources(&[50.0]);
        let summary = calculate_summary(&resources, &[recommendation(1, 20.0, true)]);
        assert_eq!(summary.total_potential_savings, 0.0);
        assert_eq!(summary.open_recommendations, 0);
        assert_eq!(summary.savings_percentage, 0.0);
    }
}
