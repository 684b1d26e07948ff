//! ISA Graph Model
//!
//! Typed nodes and the index-addressed graph that an ISA-Tab table is
//! reconstructed into.
//!
//! # Overview
//!
//! The model provides:
//! - **Node**: tagged union over the workflow node kinds (material, sample,
//!   data, process, protocol execution)
//! - **Annotations**: leaf columns attached to nodes (comments, factor values,
//!   units, attributes, parameters, performers, dates)
//! - **Graph**: arena keyed by column position; edges are [`NodeIndex`] values
//! - **AssayTable**: the raw header row plus data rows the graph was built from
//!
//! # Example
//!
//! ```rust
//! use isa_model::{Graph, MaterialNode, Node, NodeIndex, NodeKind};
//!
//! let mut graph = Graph::new();
//! graph
//!     .add_node(Node::Material(MaterialNode::new(NodeIndex(0), "Source Name")))
//!     .unwrap();
//!
//! assert_eq!(graph.nodes(NodeKind::Material).count(), 1);
//! assert!(graph.node(NodeIndex(0)).is_some());
//! ```

#![warn(missing_docs)]

pub mod annotation;
pub mod error;
pub mod graph;
pub mod node;
pub mod table;
pub mod types;

// Re-exports
pub use annotation::{
    ColumnNode, Comment, Date, FactorValue, MaterialAttribute, Performer, ProcessParameter, Unit,
};
pub use error::{GraphError, TableError};
pub use graph::Graph;
pub use node::{
    DataNode, MaterialNode, Node, ProcessIo, ProcessLike, ProcessNode, ProtocolExecutionNode,
    SampleNode,
};
pub use table::AssayTable;
pub use types::{NodeIndex, NodeKind};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for graph consumers
    pub use crate::{
        AssayTable, ColumnNode, Graph, GraphError, Node, NodeIndex, NodeKind, ProcessLike,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
