//! Scheduler weights for cluster nodes, derived from hardware specs.
//!
//! Nodes sharing a hardware spec form one class. Classes are ranked densely
//! from 1 in ascending (GPU, memory, CPU) order, and every node receives its
//! class rank unless the inventory pins an explicit weight for it.
//!
//! # Components
//!
//! - **`weights`** — Rank table and weight assignment
//! - **`convert`** — Raw inventory values to typed descriptors

pub mod convert;
pub mod weights;

pub use convert::{descriptor_from_value, descriptors_from_value};
pub use weights::{WeightTable, assign_weights, assign_weights_from_value};
