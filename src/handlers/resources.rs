//! Handlers for the `resources` and `sample` commands.

use super::utils::Pagination;
use crate::analyzer::cost_optimize::{
    Resource, ResourceKind, format_resources, load_inventory, sample_inventory,
};
use crate::error::{CloudOptError, Result};
use std::path::Path;

/// Handle the `resources` command.
pub fn handle_resources(
    inventory_path: &Path,
    kind: Option<ResourceKind>,
    offset: usize,
    limit: usize,
    json: bool,
) -> Result<Vec<Resource>> {
    let pagination = Pagination::new(offset, limit)?;
    let inventory = load_inventory(inventory_path)?;

    let resources = list_resources(inventory.resources, kind, pagination);

    if json {
        let output = serde_json::to_string_pretty(&resources)
            .map_err(|e| CloudOptError::Serialization(e.to_string()))?;
        println!("{}", output);
    } else {
        print!("{}", format_resources(&resources));
    }

    Ok(resources)
}

fn list_resources(
    resources: Vec<Resource>,
    kind: Option<ResourceKind>,
    pagination: Pagination,
) -> Vec<Resource> {
    let filtered: Vec<Resource> = match kind {
        Some(kind) => resources.into_iter().filter(|r| r.kind == kind).collect(),
        None => resources,
    };
    pagination.apply(filtered)
}

/// Handle the `sample` command.
pub fn handle_sample(output: Option<&Path>) -> Result<()> {
    let content = serde_json::to_string_pretty(&sample_inventory())
        .map_err(|e| CloudOptError::Serialization(e.to_string()))?;

    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            println!("Sample inventory written to: {}", path.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}
