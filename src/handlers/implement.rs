//! Handler for the `implement` command.

use crate::analyzer::cost_optimize::{evaluate_resource, load_inventory};
use crate::config::types::Config;
use crate::error::{CloudOptError, Result};
use crate::ledger::{ImplementationLedger, LedgerEntry};
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Mark the recommendation for `resource_id` as implemented.
///
/// Recording an already implemented recommendation keeps the original
/// timestamp and succeeds.
pub fn handle_implement(
    inventory_path: &Path,
    resource_id: u64,
    ledger: Option<PathBuf>,
    config: &Config,
) -> Result<LedgerEntry> {
    let inventory = load_inventory(inventory_path)?;
    let resource = inventory
        .get(resource_id)
        .ok_or(CloudOptError::ResourceNotFound { id: resource_id })?;

    let recommendation = evaluate_resource(resource, &config.optimizer)
        .ok_or(CloudOptError::NoRecommendation { id: resource_id })?;

    let ledger_path = ledger.unwrap_or_else(|| config.output.ledger_path.clone());
    let mut ledger = ImplementationLedger::open(ledger_path)?;

    if ledger.record(&recommendation, Utc::now()) {
        ledger.save()?;
        log::debug!(
            "Ledger {} now holds {} entries",
            ledger.path().display(),
            ledger.entries().len()
        );
        println!(
            "✅ Marked {} recommendation for {} as implemented",
            recommendation.kind.as_str(),
            resource.identifier()
        );
    } else {
        log::info!(
            "Recommendation for {} was already implemented",
            resource.identifier()
        );
        println!(
            "Recommendation for {} is already implemented",
            resource.identifier()
        );
    }

    ledger
        .find(resource_id, recommendation.kind)
        .cloned()
        .ok_or(CloudOptError::NoRecommendation { id: resource_id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::cost_optimize::{RecommendationKind, sample_inventory};
    use tempfile::TempDir;

    fn setup() -> (TempDir, PathBuf, PathBuf) {
        let dir = TempDir::new().unwrap();
        let inventory = dir.path().join("inventory.yaml");
        std::fs::write(&inventory, serde_yaml::to_string(&sample_inventory()).unwrap()).unwrap();
        let ledger = dir.path().join("ledger.json");
        (dir, inventory, ledger)
    }

    #[test]
    fn test_implement_records_entry() {
        let (_dir, inventory, ledger) = setup();
        let entry =
            handle_implement(&inventory, 6, Some(ledger.clone()), &Config::default()).unwrap();
        assert_eq!(entry.resource_id, 6);
        assert_eq!(entry.recommendation_type, RecommendationKind::Shrink);

        let reopened = ImplementationLedger::open(ledger).unwrap();
        assert_eq!(reopened.entries().len(), 1);
    }

    #[test]
    fn test_implement_twice_keeps_timestamp() {
        let (_dir, inventory, ledger) = setup();
        let first =
            handle_implement(&inventory, 1, Some(ledger.clone()), &Config::default()).unwrap();
        let second =
            handle_implement(&inventory, 1, Some(ledger.clone()), &Config::default()).unwrap();
        assert_eq!(first.implemented_at, second.implemented_at);
        assert_eq!(ImplementationLedger::open(ledger).unwrap().entries().len(), 1);
    }

    #[test]
    fn test_unknown_resource() {
        let (_dir, inventory, ledger) = setup();
        assert!(matches!(
            handle_implement(&inventory, 99, Some(ledger), &Config::default()),
            Err(CloudOptError::ResourceNotFound { id: 99 })
        ));
    }

    #[test]
    fn test_resource_without_recommendation() {
        let (_dir, inventory, ledger) = setup();
        assert!(matches!(
            handle_implement(&inventory, 4, Some(ledger.clone()), &Config::default()),
            Err(CloudOptError::NoRecommendation { id: 4 })
        ));
        assert!(!ledger.exists());
    }
}
