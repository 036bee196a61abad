//! Node name validation.

use crate::error::{WeightError, WeightResult};

/// Reject names that cannot stand for a single host: empty names, names
/// containing a path separator, and the `.`/`..` directory entries.
pub fn validate_node_name(name: &str) -> WeightResult<()> {
    let invalid = name.is_empty()
        || name.contains(['/', '\\'])
        || name == "."
        || name == "..";

    if invalid {
        return Err(WeightError::InvalidNodeName {
            node: name.to_string(),
        });
    }
    Ok(())
}
