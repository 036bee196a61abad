//! Shared types used across nodeweight crates.

use std::fmt;

use serde::Serialize;
use serde_json::{Number, Value};

/// Name of a node in the inventory.
pub type NodeName = String;

/// One class of compute node hardware.
///
/// Field order is the sort order: GPU count dominates, then memory, then
/// CPU count. The derived `Ord` is therefore the ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HardwareSpec {
    pub gpu: u32,
    /// Memory in MiB.
    pub memory: u64,
    pub cpus: u32,
}

impl HardwareSpec {
    pub fn new(gpu: u32, memory: u64, cpus: u32) -> Self {
        Self { gpu, memory, cpus }
    }
}

impl fmt::Display for HardwareSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gpu={} memory={} cpus={}", self.gpu, self.memory, self.cpus)
    }
}

/// Inventory entry for a single node.
///
/// Built from raw inventory data by the weight crate's converter, which is
/// the single place descriptor input is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDescriptor {
    pub spec: HardwareSpec,
    /// Operator-pinned weight. Only numeric values are kept.
    #[serde(rename = "weight", skip_serializing_if = "Option::is_none")]
    pub weight_override: Option<Number>,
}

impl NodeDescriptor {
    pub fn new(spec: HardwareSpec) -> Self {
        Self {
            spec,
            weight_override: None,
        }
    }

    pub fn with_override(spec: HardwareSpec, weight: impl Into<Number>) -> Self {
        Self {
            spec,
            weight_override: Some(weight.into()),
        }
    }
}

/// Keep an override only when it is a number; anything else reads as absent.
pub fn override_from_value(value: Option<&Value>) -> Option<Number> {
    match value {
        Some(Value::Number(n)) => Some(n.clone()),
        _ => None,
    }
}

/// Scheduler weight assigned to a node. Lower is preferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Weight {
    /// Dense rank of the node's hardware spec, starting at 1.
    Rank(u64),
    /// Operator-supplied value, emitted as given.
    Override(Number),
}

impl Weight {
    pub fn is_override(&self) -> bool {
        matches!(self, Weight::Override(_))
    }

    pub fn rank(&self) -> Option<u64> {
        match self {
            Weight::Rank(r) => Some(*r),
            Weight::Override(_) => None,
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Rank(r) => write!(f, "{r}"),
            Weight::Override(n) => write!(f, "{n}"),
        }
    }
}
