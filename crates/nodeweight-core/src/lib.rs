pub mod error;
pub mod inventory;
pub mod names;
pub mod options;
pub mod types;

pub use error::{WeightError, WeightResult};
pub use inventory::{Inventory, InventoryError};
pub use names::validate_node_name;
pub use options::split_options;
pub use types::*;
