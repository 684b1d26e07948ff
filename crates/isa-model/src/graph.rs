//! Index-addressed node arena
//!
//! Provides [`Graph`], the container the builder populates. Nodes are keyed by
//! column position and kept in insertion order; edges are [`NodeIndex`] values
//! resolved back through the graph.

use crate::annotation::ColumnNode;
use crate::error::GraphError;
use crate::node::{Node, ProcessLike};
use crate::types::{NodeIndex, NodeKind};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Workflow graph reconstructed from a header row
///
/// Append-only: nodes can be added and mutated in place while the graph is
/// being built, but never removed or re-indexed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: IndexMap<NodeIndex, Node>,
}

impl Graph {
    /// Create empty graph
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
        }
    }

    /// Insert a node under its own index
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateIndex`] if the index is already taken.
    pub fn add_node(&mut self, node: impl Into<Node>) -> Result<(), GraphError> {
        let node = node.into();
        let index = node.index();
        if self.nodes.contains_key(&index) {
            return Err(GraphError::DuplicateIndex(index));
        }
        self.nodes.insert(index, node);
        Ok(())
    }

    /// Node at `index`
    #[inline]
    #[must_use]
    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(&index)
    }

    /// Mutable node at `index`, for use while the graph is under construction
    #[inline]
    pub fn node_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        self.nodes.get_mut(&index)
    }

    /// Check if a node exists at `index`
    #[inline]
    #[must_use]
    pub fn contains(&self, index: NodeIndex) -> bool {
        self.nodes.contains_key(&index)
    }

    /// Nodes whose kind is a `kind`, in insertion order
    ///
    /// Filtering for [`NodeKind::Material`] includes samples.
    pub fn nodes(&self, kind: NodeKind) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values().filter(move |n| n.kind().is_a(kind))
    }

    /// All nodes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    /// Resolve a list of edge targets, skipping any that are missing
    pub fn resolve<'a>(&'a self, edges: &'a [NodeIndex]) -> impl Iterator<Item = &'a Node> + 'a {
        edges.iter().filter_map(|index| self.nodes.get(index))
    }

    /// Process-capable node at `index`
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if nothing is stored there,
    /// [`GraphError::NotProcessCapable`] if the node lacks the capability.
    pub fn process_like(&self, index: NodeIndex) -> Result<&dyn ProcessLike, GraphError> {
        let node = self
            .nodes
            .get(&index)
            .ok_or(GraphError::NodeNotFound(index))?;
        node.as_process_like()
            .ok_or(GraphError::NotProcessCapable {
                index,
                kind: node.kind(),
            })
    }

    /// Mutable process-capable node at `index`
    ///
    /// # Errors
    /// Same conditions as [`Graph::process_like`].
    pub fn process_like_mut(
        &mut self,
        index: NodeIndex,
    ) -> Result<&mut dyn ProcessLike, GraphError> {
        let node = self
            .nodes
            .get_mut(&index)
            .ok_or(GraphError::NodeNotFound(index))?;
        let kind = node.kind();
        node.as_process_like_mut()
            .ok_or(GraphError::NotProcessCapable { index, kind })
    }

    /// Number of nodes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if graph is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Serialize for Graph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.nodes.values())
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Node;
    type IntoIter = indexmap::map::Values<'a, NodeIndex, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.values()
    }
}
