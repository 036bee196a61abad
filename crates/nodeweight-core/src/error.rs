//! Error types for weight assignment input.

use thiserror::Error;

/// Result type alias for operations that consume inventory data.
pub type WeightResult<T> = Result<T, WeightError>;

/// Malformed inventory data.
///
/// Every variant is a caller contract violation: the upstream inventory is
/// broken and no weights are produced. A non-numeric weight override is not
/// represented here because it is ignored rather than rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeightError {
    #[error("{context} is not a mapping")]
    NotAMapping { context: String },

    #[error("node {node:?} has no hardware spec")]
    MissingSpec { node: String },

    #[error("node {node:?} spec is missing required attribute {attribute:?}")]
    MissingAttribute { node: String, attribute: &'static str },

    #[error("node {node:?} spec attribute {attribute:?} is not a non-negative integer: {value}")]
    InvalidAttribute {
        node: String,
        attribute: &'static str,
        value: String,
    },

    #[error("node {node:?} sets conflicting keys: {keys}")]
    ConflictingKeys { node: String, keys: String },

    #[error("invalid node name {node:?}")]
    InvalidNodeName { node: String },
}

impl WeightError {
    /// True when the error stems from malformed upstream data.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            WeightError::NotAMapping { .. }
                | WeightError::MissingSpec { .. }
                | WeightError::MissingAttribute { .. }
                | WeightError::InvalidAttribute { .. }
                | WeightError::ConflictingKeys { .. }
                | WeightError::InvalidNodeName { .. }
        )
    }

    /// Node the error refers to, if any.
    pub fn node(&self) -> Option<&str> {
        match self {
            WeightError::NotAMapping { .. } => None,
            WeightError::MissingSpec { node }
            | WeightError::MissingAttribute { node, .. }
            | WeightError::InvalidAttribute { node, .. }
            | WeightError::ConflictingKeys { node, .. }
            | WeightError::InvalidNodeName { node } => Some(node),
        }
    }
}
