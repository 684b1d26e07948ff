//! Graph node types
//!
//! [`Node`] is the tagged union stored in the [`Graph`](crate::Graph). Process
//! nodes and protocol executions share input/output/parameter handling through
//! the [`ProcessLike`] capability.

use crate::annotation::{
    ColumnNode, Comment, Date, FactorValue, MaterialAttribute, Performer, ProcessParameter,
};
use crate::types::{NodeIndex, NodeKind};
use serde::{Deserialize, Serialize};

/// Source, extract or labeled extract column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialNode {
    index: NodeIndex,
    name: String,
    attributes: Vec<MaterialAttribute>,
    comments: Vec<Comment>,
}

impl MaterialNode {
    /// Create material node for the column at `index`
    #[inline]
    #[must_use]
    pub fn new(index: NodeIndex, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            attributes: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Material type derived from the header (`"Extract Name"` → `"Extract"`)
    #[must_use]
    pub fn material_type(&self) -> &str {
        self.name
            .strip_suffix(" Name")
            .unwrap_or(&self.name)
            .trim_end()
    }

    /// Attributes in column order
    #[inline]
    #[must_use]
    pub fn attributes(&self) -> &[MaterialAttribute] {
        &self.attributes
    }

    /// Append an attribute
    #[inline]
    pub fn add_attribute(&mut self, attribute: MaterialAttribute) {
        self.attributes.push(attribute);
    }

    /// Attached comments
    #[inline]
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Append a comment
    #[inline]
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}

impl ColumnNode for MaterialNode {
    #[inline]
    fn index(&self) -> NodeIndex {
        self.index
    }

    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn kind(&self) -> NodeKind {
        NodeKind::Material
    }
}

/// Sample column: a material that also carries factor values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleNode {
    material: MaterialNode,
    factor_values: Vec<FactorValue>,
}

impl SampleNode {
    /// Create sample node for the column at `index`
    #[inline]
    #[must_use]
    pub fn new(index: NodeIndex, name: impl Into<String>) -> Self {
        Self {
            material: MaterialNode::new(index, name),
            factor_values: Vec::new(),
        }
    }

    /// Material part of this sample
    #[inline]
    #[must_use]
    pub fn material(&self) -> &MaterialNode {
        &self.material
    }

    /// Mutable material part of this sample
    #[inline]
    pub fn material_mut(&mut self) -> &mut MaterialNode {
        &mut self.material
    }

    /// Factor values in column order
    #[inline]
    #[must_use]
    pub fn factor_values(&self) -> &[FactorValue] {
        &self.factor_values
    }

    /// Mutable factor values, for attaching units after the fact
    #[inline]
    pub fn factor_values_mut(&mut self) -> &mut [FactorValue] {
        &mut self.factor_values
    }

    /// Append a factor value, returning its slot
    #[inline]
    pub fn add_factor_value(&mut self, factor_value: FactorValue) -> usize {
        self.factor_values.push(factor_value);
        self.factor_values.len() - 1
    }
}

impl ColumnNode for SampleNode {
    #[inline]
    fn index(&self) -> NodeIndex {
        self.material.index
    }

    #[inline]
    fn name(&self) -> &str {
        &self.material.name
    }

    #[inline]
    fn kind(&self) -> NodeKind {
        NodeKind::Sample
    }
}

/// Data file column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataNode {
    index: NodeIndex,
    name: String,
    comments: Vec<Comment>,
}

impl DataNode {
    /// Create data node for the column at `index`
    #[inline]
    #[must_use]
    pub fn new(index: NodeIndex, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            comments: Vec::new(),
        }
    }

    /// Attached comments
    #[inline]
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Append a comment
    #[inline]
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}

impl ColumnNode for DataNode {
    #[inline]
    fn index(&self) -> NodeIndex {
        self.index
    }

    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn kind(&self) -> NodeKind {
        NodeKind::Data
    }
}

/// Inputs, outputs and parameters shared by process-like nodes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessIo {
    inputs: Vec<NodeIndex>,
    outputs: Vec<NodeIndex>,
    parameters: Vec<ProcessParameter>,
}

/// Capability of nodes that consume inputs and produce outputs
///
/// Implemented by [`ProcessNode`] and [`ProtocolExecutionNode`]. Lookups that
/// need this capability go through [`Graph::process_like`](crate::Graph::process_like)
/// rather than assuming a concrete node type.
pub trait ProcessLike: ColumnNode {
    /// Shared input/output state
    fn io(&self) -> &ProcessIo;

    /// Mutable shared input/output state
    fn io_mut(&mut self) -> &mut ProcessIo;

    /// Input node indices in the order they were linked
    fn inputs(&self) -> &[NodeIndex] {
        &self.io().inputs
    }

    /// Output node indices in the order they were linked
    fn outputs(&self) -> &[NodeIndex] {
        &self.io().outputs
    }

    /// Parameters in column order
    fn parameters(&self) -> &[ProcessParameter] {
        &self.io().parameters
    }

    /// Link an input node
    fn add_input(&mut self, index: NodeIndex) {
        self.io_mut().inputs.push(index);
    }

    /// Link an output node
    fn add_output(&mut self, index: NodeIndex) {
        self.io_mut().outputs.push(index);
    }

    /// Attach a parameter
    fn add_parameter(&mut self, parameter: ProcessParameter) {
        self.io_mut().parameters.push(parameter);
    }
}

/// Protocol reference column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessNode {
    index: NodeIndex,
    name: String,
    io: ProcessIo,
    comments: Vec<Comment>,
    protocol_executions: Vec<NodeIndex>,
}

impl ProcessNode {
    /// Create process node for the column at `index`
    #[inline]
    #[must_use]
    pub fn new(index: NodeIndex, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            io: ProcessIo::default(),
            comments: Vec::new(),
            protocol_executions: Vec::new(),
        }
    }

    /// Attached comments
    #[inline]
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Append a comment
    #[inline]
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Protocol executions owned by this process, in encounter order
    #[inline]
    #[must_use]
    pub fn protocol_executions(&self) -> &[NodeIndex] {
        &self.protocol_executions
    }

    /// Take ownership of a batch of pending protocol executions
    pub fn add_protocol_executions(&mut self, executions: impl IntoIterator<Item = NodeIndex>) {
        self.protocol_executions.extend(executions);
    }
}

impl ColumnNode for ProcessNode {
    #[inline]
    fn index(&self) -> NodeIndex {
        self.index
    }

    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn kind(&self) -> NodeKind {
        NodeKind::Process
    }
}

impl ProcessLike for ProcessNode {
    #[inline]
    fn io(&self) -> &ProcessIo {
        &self.io
    }

    #[inline]
    fn io_mut(&mut self) -> &mut ProcessIo {
        &mut self.io
    }
}

/// One concrete invocation of a protocol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolExecutionNode {
    index: NodeIndex,
    name: String,
    io: ProcessIo,
    performers: Vec<Performer>,
    dates: Vec<Date>,
}

impl ProtocolExecutionNode {
    /// Create protocol execution node for the column at `index`
    #[inline]
    #[must_use]
    pub fn new(index: NodeIndex, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            io: ProcessIo::default(),
            performers: Vec::new(),
            dates: Vec::new(),
        }
    }

    /// Performers in column order
    #[inline]
    #[must_use]
    pub fn performers(&self) -> &[Performer] {
        &self.performers
    }

    /// Append a performer
    #[inline]
    pub fn add_performer(&mut self, performer: Performer) {
        self.performers.push(performer);
    }

    /// Dates in column order
    #[inline]
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Append a date
    #[inline]
    pub fn add_date(&mut self, date: Date) {
        self.dates.push(date);
    }
}

impl ColumnNode for ProtocolExecutionNode {
    #[inline]
    fn index(&self) -> NodeIndex {
        self.index
    }

    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn kind(&self) -> NodeKind {
        NodeKind::ProtocolExecution
    }
}

impl ProcessLike for ProtocolExecutionNode {
    #[inline]
    fn io(&self) -> &ProcessIo {
        &self.io
    }

    #[inline]
    fn io_mut(&mut self) -> &mut ProcessIo {
        &mut self.io
    }
}

/// Node stored in the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Material column
    Material(MaterialNode),
    /// Sample column
    Sample(SampleNode),
    /// Data file column
    Data(DataNode),
    /// Protocol reference column
    Process(ProcessNode),
    /// Protocol execution column
    ProtocolExecution(ProtocolExecutionNode),
}

impl Node {
    fn column(&self) -> &dyn ColumnNode {
        match self {
            Node::Material(n) => n,
            Node::Sample(n) => n,
            Node::Data(n) => n,
            Node::Process(n) => n,
            Node::ProtocolExecution(n) => n,
        }
    }

    /// Material view; samples are materials too
    #[must_use]
    pub fn as_material(&self) -> Option<&MaterialNode> {
        match self {
            Node::Material(n) => Some(n),
            Node::Sample(n) => Some(n.material()),
            _ => None,
        }
    }

    /// Mutable material view; samples are materials too
    pub fn as_material_mut(&mut self) -> Option<&mut MaterialNode> {
        match self {
            Node::Material(n) => Some(n),
            Node::Sample(n) => Some(n.material_mut()),
            _ => None,
        }
    }

    /// Sample view
    #[must_use]
    pub fn as_sample(&self) -> Option<&SampleNode> {
        match self {
            Node::Sample(n) => Some(n),
            _ => None,
        }
    }

    /// Mutable sample view
    pub fn as_sample_mut(&mut self) -> Option<&mut SampleNode> {
        match self {
            Node::Sample(n) => Some(n),
            _ => None,
        }
    }

    /// Data view
    #[must_use]
    pub fn as_data(&self) -> Option<&DataNode> {
        match self {
            Node::Data(n) => Some(n),
            _ => None,
        }
    }

    /// Process view
    #[must_use]
    pub fn as_process(&self) -> Option<&ProcessNode> {
        match self {
            Node::Process(n) => Some(n),
            _ => None,
        }
    }

    /// Mutable process view
    pub fn as_process_mut(&mut self) -> Option<&mut ProcessNode> {
        match self {
            Node::Process(n) => Some(n),
            _ => None,
        }
    }

    /// Protocol execution view
    #[must_use]
    pub fn as_protocol_execution(&self) -> Option<&ProtocolExecutionNode> {
        match self {
            Node::ProtocolExecution(n) => Some(n),
            _ => None,
        }
    }

    /// Mutable protocol execution view
    pub fn as_protocol_execution_mut(&mut self) -> Option<&mut ProtocolExecutionNode> {
        match self {
            Node::ProtocolExecution(n) => Some(n),
            _ => None,
        }
    }

    /// Process capability, if this node has it
    #[must_use]
    pub fn as_process_like(&self) -> Option<&dyn ProcessLike> {
        match self {
            Node::Process(n) => Some(n),
            Node::ProtocolExecution(n) => Some(n),
            _ => None,
        }
    }

    /// Mutable process capability, if this node has it
    pub fn as_process_like_mut(&mut self) -> Option<&mut dyn ProcessLike> {
        match self {
            Node::Process(n) => Some(n),
            Node::ProtocolExecution(n) => Some(n),
            _ => None,
        }
    }

    /// Comments attached to this node (empty for protocol executions)
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        match self {
            Node::Material(n) => n.comments(),
            Node::Sample(n) => n.material().comments(),
            Node::Data(n) => n.comments(),
            Node::Process(n) => n.comments(),
            Node::ProtocolExecution(_) => &[],
        }
    }

    /// Attach a comment
    ///
    /// Returns `false` when the node kind carries no comments.
    pub fn add_comment(&mut self, comment: Comment) -> bool {
        match self {
            Node::Material(n) => n.add_comment(comment),
            Node::Sample(n) => n.material_mut().add_comment(comment),
            Node::Data(n) => n.add_comment(comment),
            Node::Process(n) => n.add_comment(comment),
            Node::ProtocolExecution(_) => return false,
        }
        true
    }
}

impl ColumnNode for Node {
    #[inline]
    fn index(&self) -> NodeIndex {
        self.column().index()
    }

    #[inline]
    fn name(&self) -> &str {
        self.column().name()
    }

    #[inline]
    fn kind(&self) -> NodeKind {
        self.column().kind()
    }
}

impl From<MaterialNode> for Node {
    fn from(value: MaterialNode) -> Self {
        Node::Material(value)
    }
}

impl From<SampleNode> for Node {
    fn from(value: SampleNode) -> Self {
        Node::Sample(value)
    }
}

impl From<DataNode> for Node {
    fn from(value: DataNode) -> Self {
        Node::Data(value)
    }
}

impl From<ProcessNode> for Node {
    fn from(value: ProcessNode) -> Self {
        Node::Process(value)
    }
}

impl From<ProtocolExecutionNode> for Node {
    fn from(value: ProtocolExecutionNode) -> Self {
        Node::ProtocolExecution(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_type_strips_name_suffix() {
        let extract = MaterialNode::new(NodeIndex(2), "Labeled Extract Name");
        assert_eq!(extract.material_type(), "Labeled Extract");

        let odd = MaterialNode::new(NodeIndex(0), "Specimen");
        assert_eq!(odd.material_type(), "Specimen");
    }

    #[test]
    fn sample_counts_as_material() {
        let node = Node::from(SampleNode::new(NodeIndex(1), "Sample Name"));
        assert_eq!(node.kind(), NodeKind::Sample);
        assert!(node.as_material().is_some());
        assert!(node.as_sample().is_some());
        assert!(node.as_process_like().is_none());
    }

    #[test]
    fn process_capability_is_shared() {
        let mut process = Node::from(ProcessNode::new(NodeIndex(1), "Protocol REF"));
        let mut execution = Node::from(ProtocolExecutionNode::new(NodeIndex(2), "Assay Name"));

        for node in [&mut process, &mut execution] {
            let capable = node.as_process_like_mut().expect("process capable");
            capable.add_input(NodeIndex(0));
            capable.add_output(NodeIndex(3));
            capable.add_parameter(ProcessParameter::new(NodeIndex(4), "Parameter Value[t]"));
        }

        for node in [&process, &execution] {
            let capable = node.as_process_like().expect("process capable");
            assert_eq!(capable.inputs(), &[NodeIndex(0)]);
            assert_eq!(capable.outputs(), &[NodeIndex(3)]);
            assert_eq!(capable.parameters().len(), 1);
        }
    }

    #[test]
    fn protocol_execution_rejects_comments() {
        let mut execution = Node::from(ProtocolExecutionNode::new(NodeIndex(0), "Scan Name"));
        assert!(!execution.add_comment(Comment::new(NodeIndex(1), "Comment[x]")));
        assert!(execution.comments().is_empty());

        let mut data = Node::from(DataNode::new(NodeIndex(2), "Raw Data File"));
        assert!(data.add_comment(Comment::new(NodeIndex(3), "Comment[y]")));
        assert_eq!(data.comments().len(), 1);
    }

    #[test]
    fn node_serializes_with_kind_tag() {
        let node = Node::from(DataNode::new(NodeIndex(5), "Raw Data File"));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["kind"], "data");
        assert_eq!(json["index"], 5);
        assert_eq!(json["name"], "Raw Data File");
    }
}
