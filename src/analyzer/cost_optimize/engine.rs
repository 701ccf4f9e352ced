//! Recommendation engine.
//!
//! Dispatches each resource to the rule for its kind and collects the results.
//! The engine holds no state and performs no I/O, so it can be called from any
//! number of threads on shared inputs.

use super::config::OptimizerConfig;
use super::rules::{codes, instance_downsize, storage_shrink};
use super::summary::calculate_summary;
use super::types::{OptimizationSummary, Recommendation, Resource, ResourceKind};
use log::{debug, trace};

/// Generate recommendations for a list of resources.
///
/// Produces at most one recommendation per resource, in input order. Resources
/// of unknown kind are skipped.
pub fn analyze_resources(resources: &[Resource], config: &OptimizerConfig) -> Vec<Recommendation> {
    let recommendations: Vec<Recommendation> = resources
        .iter()
        .filter_map(|resource| evaluate_resource(resource, config))
        .collect();

    debug!(
        "Generated {} recommendation(s) for {} resource(s)",
        recommendations.len(),
        resources.len()
    );
    recommendations
}

/// Evaluate a single resource against the rule for its kind.
pub fn evaluate_resource(resource: &Resource, config: &OptimizerConfig) -> Option<Recommendation> {
    let recommendation = match resource.kind {
        ResourceKind::Instance if !config.should_ignore_rule(codes::OVERPROVISIONED_INSTANCE) => {
            instance_downsize::check(resource, config)
        }
        ResourceKind::Storage if !config.should_ignore_rule(codes::OVERSIZED_STORAGE) => {
            storage_shrink::check(resource, config)
        }
        ResourceKind::Unknown => {
            debug!("Skipping {}: no rule for its kind", resource.identifier());
            None
        }
        _ => {
            debug!("Skipping {}: rule ignored by config", resource.identifier());
            None
        }
    };

    if let Some(rec) = &recommendation {
        trace!(
            "{} -> [{}] {} (saving {:.2}, confidence {:.2})",
            resource.identifier(),
            rec.rule_code,
            rec.kind,
            rec.potential_saving,
            rec.confidence
        );
    }

    recommendation
}

/// Generate recommendations and their summary in one call.
pub fn evaluate(
    resources: &[Resource],
    config: &OptimizerConfig,
) -> (Vec<Recommendation>, OptimizationSummary) {
    let recommendations = analyze_resources(resources, config);
    let summary = calculate_summary(resources, &recommendations);
    (recommendations, summary)
}
