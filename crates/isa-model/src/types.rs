//! Core identifiers for the graph model
//!
//! - [`NodeIndex`]: column position, the identity of every node
//! - [`NodeKind`]: the closed vocabulary of column kinds

use serde::{Deserialize, Serialize};

/// Column position of a node in the source table
///
/// Indices are unique within a [`Graph`](crate::Graph) because every column
/// produces at most one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeIndex(pub usize);

impl NodeIndex {
    /// Get the raw column position
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeIndex {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of a classified header column
///
/// The first five kinds become graph nodes; the rest are annotations that
/// attach to a graph node and are never inserted on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Source, extract or labeled extract column
    Material,
    /// Sample column (refinement of [`NodeKind::Material`])
    Sample,
    /// Data file column
    Data,
    /// Protocol reference column
    Process,
    /// Concrete protocol invocation column
    ProtocolExecution,
    /// `Comment[...]` annotation
    Comment,
    /// `Factor Value[...]` annotation
    FactorValue,
    /// Unit of the preceding factor value
    Unit,
    /// `Characteristics[...]` or similar material attribute
    MaterialAttribute,
    /// `Parameter Value[...]` annotation
    ProcessParameter,
    /// Performer of a protocol execution
    Performer,
    /// Date of a protocol execution
    Date,
}

impl NodeKind {
    /// All kinds in classification priority order
    pub const ALL: [NodeKind; 12] = [
        NodeKind::Date,
        NodeKind::Performer,
        NodeKind::ProtocolExecution,
        NodeKind::Process,
        NodeKind::Data,
        NodeKind::MaterialAttribute,
        NodeKind::Material,
        NodeKind::Sample,
        NodeKind::FactorValue,
        NodeKind::Unit,
        NodeKind::ProcessParameter,
        NodeKind::Comment,
    ];

    /// Check whether `self` satisfies a filter for `kind`
    ///
    /// Kinds match themselves; a sample additionally counts as a material.
    #[inline]
    #[must_use]
    pub const fn is_a(self, kind: NodeKind) -> bool {
        matches!(
            (self, kind),
            (NodeKind::Sample, NodeKind::Material | NodeKind::Sample)
                | (NodeKind::Material, NodeKind::Material)
                | (NodeKind::Data, NodeKind::Data)
                | (NodeKind::Process, NodeKind::Process)
                | (NodeKind::ProtocolExecution, NodeKind::ProtocolExecution)
                | (NodeKind::Comment, NodeKind::Comment)
                | (NodeKind::FactorValue, NodeKind::FactorValue)
                | (NodeKind::Unit, NodeKind::Unit)
                | (NodeKind::MaterialAttribute, NodeKind::MaterialAttribute)
                | (NodeKind::ProcessParameter, NodeKind::ProcessParameter)
                | (NodeKind::Performer, NodeKind::Performer)
                | (NodeKind::Date, NodeKind::Date)
        )
    }

    /// Whether columns of this kind are stored in the graph
    #[inline]
    #[must_use]
    pub const fn is_graph_node(self) -> bool {
        matches!(
            self,
            NodeKind::Material
                | NodeKind::Sample
                | NodeKind::Data
                | NodeKind::Process
                | NodeKind::ProtocolExecution
        )
    }

    /// Human-readable name
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::Material => "material",
            NodeKind::Sample => "sample",
            NodeKind::Data => "data",
            NodeKind::Process => "process",
            NodeKind::ProtocolExecution => "protocol_execution",
            NodeKind::Comment => "comment",
            NodeKind::FactorValue => "factor_value",
            NodeKind::Unit => "unit",
            NodeKind::MaterialAttribute => "material_attribute",
            NodeKind::ProcessParameter => "process_parameter",
            NodeKind::Performer => "performer",
            NodeKind::Date => "date",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
