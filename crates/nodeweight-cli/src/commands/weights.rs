use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use nodeweight_core::{Inventory, Weight};

pub fn weights(
    path: &Path,
    section: Option<&str>,
    prefix: Option<&str>,
    format: &str,
) -> anyhow::Result<()> {
    let weights = compute(path, section, prefix)?;
    println!("{}", render(&weights, format)?);
    Ok(())
}

pub fn instance(path: &Path, hostname: &str) -> anyhow::Result<()> {
    let inventory = Inventory::from_file(path)?;
    println!("{}", serde_json::to_string_pretty(&inventory.instance(hostname))?);
    Ok(())
}

fn compute(
    path: &Path,
    section: Option<&str>,
    prefix: Option<&str>,
) -> anyhow::Result<BTreeMap<String, Weight>> {
    let mut inventory = Inventory::from_file(path)?;
    if let Some(key) = section {
        inventory = Inventory::from_value(inventory.section(key));
    }

    let instances = match prefix {
        Some(prefix) => inventory.with_prefix(prefix),
        None => inventory.instances().clone(),
    };

    tracing::debug!(path = %path.display(), ?section, ?prefix, "inventory loaded");

    nodeweight_rank::assign_weights_from_value(&instances)
        .with_context(|| format!("invalid inventory {}", path.display()))
}

fn render(weights: &BTreeMap<String, Weight>, format: &str) -> anyhow::Result<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(weights)?),
        "text" => {
            let width = weights.keys().map(String::len).max().unwrap_or(0);
            let lines: Vec<String> = weights
                .iter()
                .map(|(name, weight)| format!("{name:<width$}  {weight}"))
                .collect();
            Ok(lines.join("\n"))
        }
        other => anyhow::bail!("unknown output format: {other} (expected text or json)"),
    }
}
