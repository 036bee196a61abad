//! Conversions from raw inventory values to typed descriptors.
//!
//! Inventories arrive as loosely typed documents. This module checks the
//! parts the assigner depends on (node names, the spec, its three numeric
//! attributes) and reports the first malformed node by name. A key and its
//! alias (`spec`/`specs`, `memory`/`realmemory`) may not both be set. The
//! weight override is read leniently: anything but a number is dropped.

use std::collections::BTreeMap;

use nodeweight_core::{
    HardwareSpec, NodeDescriptor, WeightError, WeightResult, override_from_value,
    validate_node_name,
};
use serde_json::{Map, Value};
use tracing::debug;

const SPEC_KEYS: [&str; 2] = ["spec", "specs"];
const MEMORY_KEYS: [&str; 2] = ["memory", "realmemory"];

/// Convert an instance mapping (`name -> descriptor`) to typed descriptors.
pub fn descriptors_from_value(instances: &Value) -> WeightResult<BTreeMap<String, NodeDescriptor>> {
    let map = instances.as_object().ok_or_else(|| WeightError::NotAMapping {
        context: "instance inventory".to_string(),
    })?;

    map.iter()
        .map(|(name, raw)| -> WeightResult<(String, NodeDescriptor)> {
            validate_node_name(name)?;
            Ok((name.clone(), descriptor_from_value(name, raw)?))
        })
        .collect()
}

/// Convert a single descriptor. `node` is only used in errors.
pub fn descriptor_from_value(node: &str, raw: &Value) -> WeightResult<NodeDescriptor> {
    let fields = raw.as_object().ok_or_else(|| WeightError::NotAMapping {
        context: format!("descriptor of node {node:?}"),
    })?;

    let spec = first_of(node, fields, &SPEC_KEYS)?.ok_or_else(|| WeightError::MissingSpec {
        node: node.to_string(),
    })?;
    let spec = spec.as_object().ok_or_else(|| WeightError::NotAMapping {
        context: format!("spec of node {node:?}"),
    })?;

    let gpu = attribute(node, spec, &["gpu"], "gpu")?;
    let memory = attribute(node, spec, &MEMORY_KEYS, "memory")?;
    let cpus = attribute(node, spec, &["cpus"], "cpus")?;

    let raw_override = fields.get("weight");
    let weight_override = override_from_value(raw_override);
    if weight_override.is_none()
        && let Some(ignored) = raw_override
    {
        debug!(node, weight = %ignored, "ignoring non-numeric weight override");
    }

    Ok(NodeDescriptor {
        spec: HardwareSpec {
            gpu: narrow(node, "gpu", gpu)?,
            memory,
            cpus: narrow(node, "cpus", cpus)?,
        },
        weight_override,
    })
}

/// Value under whichever of `keys` is set. Setting more than one is an error.
fn first_of<'a>(
    node: &str,
    fields: &'a Map<String, Value>,
    keys: &[&str],
) -> WeightResult<Option<&'a Value>> {
    let present: Vec<&str> = keys
        .iter()
        .copied()
        .filter(|key| fields.contains_key(*key))
        .collect();

    match present.as_slice() {
        [] => Ok(None),
        [key] => Ok(fields.get(*key)),
        _ => Err(WeightError::ConflictingKeys {
            node: node.to_string(),
            keys: present.join(", "),
        }),
    }
}

fn attribute(
    node: &str,
    spec: &Map<String, Value>,
    keys: &[&str],
    attribute: &'static str,
) -> WeightResult<u64> {
    let value = first_of(node, spec, keys)?.ok_or_else(|| WeightError::MissingAttribute {
        node: node.to_string(),
        attribute,
    })?;
    value.as_u64().ok_or_else(|| WeightError::InvalidAttribute {
        node: node.to_string(),
        attribute,
        value: value.to_string(),
    })
}

fn narrow(node: &str, attribute: &'static str, value: u64) -> WeightResult<u32> {
    u32::try_from(value).map_err(|_| WeightError::InvalidAttribute {
        node: node.to_string(),
        attribute,
        value: value.to_string(),
    })
}
