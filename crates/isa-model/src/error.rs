//! Error types for the graph model

use crate::types::{NodeIndex, NodeKind};

/// Errors raised by [`Graph`](crate::Graph) operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A node already occupies this column position
    #[error("duplicate node index: {0}")]
    DuplicateIndex(NodeIndex),

    /// No node at this column position
    #[error("node not found: {0}")]
    NodeNotFound(NodeIndex),

    /// Node exists but cannot take process inputs/outputs/parameters
    #[error("node {index} ({kind}) is not process capable")]
    NotProcessCapable {
        /// Column position of the node
        index: NodeIndex,
        /// Kind of the node found there
        kind: NodeKind,
    },
}

/// Errors raised while wrapping a raw matrix as an [`AssayTable`](crate::AssayTable)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The matrix has no header row
    #[error("table has no header row")]
    MissingHeader,
}
