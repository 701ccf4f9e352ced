//! Resource inventory loading.
//!
//! Inventories are JSON or YAML documents holding either a bare list of
//! resources or an object with a `resources` list. Files ending in `.yaml` or
//! `.yml` are read as YAML, everything else as JSON.

use super::types::{Resource, ResourceKind};
use crate::error::InventoryError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A set of tracked resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub resources: Vec<Resource>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InventoryDocument {
    List(Vec<Resource>),
    Wrapped(Inventory),
}

impl From<InventoryDocument> for Inventory {
    fn from(doc: InventoryDocument) -> Self {
        match doc {
            InventoryDocument::List(resources) => Inventory { resources },
            InventoryDocument::Wrapped(inventory) => inventory,
        }
    }
}

impl Inventory {
    /// Look up a resource by id.
    pub fn get(&self, id: u64) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Check every resource for values the rules cannot interpret.
    pub fn validate(&self) -> Result<(), InventoryError> {
        let mut seen = HashSet::new();
        for resource in &self.resources {
            if !seen.insert(resource.id) {
                return Err(InventoryError::DuplicateId(resource.id));
            }
            validate_resource(resource)?;
        }
        Ok(())
    }
}

fn validate_resource(resource: &Resource) -> Result<(), InventoryError> {
    if !(resource.monthly_cost.is_finite() && resource.monthly_cost > 0.0) {
        return Err(InventoryError::InvalidResource {
            id: resource.id,
            field: "monthly_cost",
            reason: format!("{} is not a positive amount", resource.monthly_cost),
        });
    }

    let utilization = [
        ("cpu_utilization", resource.cpu_utilization),
        ("memory_utilization", resource.memory_utilization),
    ];
    for (field, value) in utilization {
        if let Some(value) = value
            && !(0.0..=100.0).contains(&value)
        {
            return Err(InventoryError::InvalidResource {
                id: resource.id,
                field,
                reason: format!("{} is outside 0-100", value),
            });
        }
    }

    Ok(())
}

/// Parse inventory content in the given format.
pub fn parse_inventory(content: &str, yaml: bool, origin: &Path) -> Result<Inventory, InventoryError> {
    let parsed: Result<InventoryDocument, String> = if yaml {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(content).map_err(|e| e.to_string())
    };

    let inventory: Inventory = parsed
        .map_err(|reason| InventoryError::ParseFailed {
            path: origin.to_path_buf(),
            reason,
        })?
        .into();
    inventory.validate()?;
    Ok(inventory)
}

/// Load and validate an inventory file.
pub fn load_inventory(path: &Path) -> Result<Inventory, InventoryError> {
    let content = std::fs::read_to_string(path).map_err(|source| InventoryError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let inventory = parse_inventory(&content, is_yaml(path), path)?;
    log::info!(
        "Loaded {} resource(s) from {}",
        inventory.resources.len(),
        path.display()
    );
    Ok(inventory)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false)
}

/// A small mixed inventory covering every rule outcome.
pub fn sample_inventory() -> Inventory {
    let instance = |id: u64,
                    name: &str,
                    provider: &str,
                    instance_type: &str,
                    cpu: f64,
                    memory: f64,
                    cost: f64| {
        Resource::new(id, name, ResourceKind::Instance, cost)
            .with_provider(provider)
            .with_instance_type(instance_type)
            .with_utilization(cpu, memory)
    };
    let storage = |id: u64, name: &str, gb: u64, cost: f64| {
        Resource::new(id, name, ResourceKind::Storage, cost)
            .with_provider("aws")
            .with_storage_gb(gb)
    };

    Inventory {
        resources: vec![
            // Over-provisioned instances
            instance(1, "web-server-1", "aws", "t3.xlarge", 15.0, 25.0, 150.0),
            instance(2, "api-server-2", "aws", "m5.large", 12.0, 30.0, 90.0),
            instance(3, "worker-3", "azure", "Standard_D2s_v3", 8.0, 20.0, 70.0),
            // Well-utilized instances
            instance(4, "database-1", "aws", "m5.xlarge", 75.0, 85.0, 180.0),
            instance(5, "cache-server", "gcp", "n1-standard-2", 65.0, 70.0, 50.0),
            // Oversized storage
            storage(6, "backup-storage", 1000, 100.0),
            // Storage at or under the threshold
            storage(7, "log-storage", 500, 75.0),
            storage(8, "database-storage", 200, 25.0),
        ],
    }
}
