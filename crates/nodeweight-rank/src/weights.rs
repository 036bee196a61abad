//! Weight assignment.
//!
//! Distinct hardware specs are collected into a sorted set, ranked 1..N in
//! that order, and the ranks are handed back to every node that is not
//! pinned by an override.

use std::collections::{BTreeMap, BTreeSet};

use nodeweight_core::{HardwareSpec, NodeDescriptor, Weight, WeightResult};
use serde_json::Value;
use tracing::{debug, info};

use crate::convert::descriptors_from_value;

/// Dense rank per distinct hardware spec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightTable {
    ranks: BTreeMap<HardwareSpec, u64>,
}

impl WeightTable {
    /// Rank the distinct values of `specs`. Duplicates collapse.
    pub fn build<'a, I>(specs: I) -> Self
    where
        I: IntoIterator<Item = &'a HardwareSpec>,
    {
        let distinct: BTreeSet<HardwareSpec> = specs.into_iter().copied().collect();
        let ranks = distinct
            .into_iter()
            .zip(1u64..)
            .inspect(|(spec, rank)| debug!(%spec, rank, "ranked hardware spec"))
            .collect();
        Self { ranks }
    }

    pub fn rank(&self, spec: &HardwareSpec) -> Option<u64> {
        self.ranks.get(spec).copied()
    }

    /// Number of distinct specs.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Specs with their ranks, lowest rank first.
    pub fn iter(&self) -> impl Iterator<Item = (&HardwareSpec, u64)> {
        self.ranks.iter().map(|(spec, rank)| (spec, *rank))
    }
}

/// Assign a weight to every node.
///
/// Overrides win over computed ranks. The result has exactly the keys of
/// `nodes`.
pub fn assign_weights(nodes: &BTreeMap<String, NodeDescriptor>) -> BTreeMap<String, Weight> {
    let table = WeightTable::build(nodes.values().map(|d| &d.spec));

    let mut overrides = 0usize;
    let weights: BTreeMap<String, Weight> = nodes
        .iter()
        .map(|(name, desc)| {
            let weight = match &desc.weight_override {
                Some(pinned) => {
                    overrides += 1;
                    debug!(node = %name, weight = %pinned, "weight override applied");
                    Weight::Override(pinned.clone())
                }
                None => {
                    let rank = table.rank(&desc.spec);
                    debug_assert!(rank.is_some(), "spec {} missing from weight table", desc.spec);
                    Weight::Rank(rank.unwrap_or_default())
                }
            };
            (name.clone(), weight)
        })
        .collect();

    info!(
        nodes = weights.len(),
        distinct_specs = table.len(),
        overrides,
        "node weights assigned"
    );

    weights
}

/// Convert a raw inventory mapping and assign weights.
///
/// Fails before producing any weight if a descriptor is malformed.
pub fn assign_weights_from_value(instances: &Value) -> WeightResult<BTreeMap<String, Weight>> {
    let nodes = descriptors_from_value(instances)?;
    Ok(assign_weights(&nodes))
}
