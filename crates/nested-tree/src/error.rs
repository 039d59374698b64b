//! Tree Errors
//!
//! Tree mutations never fail; these only surface at the input boundary.

use thiserror::Error;

use crate::id::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// No node with this id exists anywhere in the forest
    #[error("Not found: node {0}")]
    NotFound(NodeId),
    /// Form input name that does not map to a node field
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, TreeError>;
