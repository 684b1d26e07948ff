//! Workflow graph builder
//!
//! Walks the header row once, left to right, and wires every classified
//! column to its predecessor using a handful of "last seen" cursors:
//!
//! | Cursor | Set by | Cleared by |
//! |---|---|---|
//! | `last_process` | process | data / material taking it as output |
//! | `last_material_or_data` | data, material | never |
//! | `last_sample` | sample | never |
//! | `last_factor_value` | factor value | never |
//! | `last_protocol_execution` | protocol execution | data taking it as output |
//!
//! Protocol executions accumulate in a pending list until the next process
//! takes ownership of them. Annotations whose target cursor is unset are
//! dropped; no column ever aborts the build.

use crate::classifier::HeaderClassifier;
use isa_model::{
    ColumnNode, Comment, DataNode, Date, FactorValue, Graph, MaterialAttribute, MaterialNode,
    Node, NodeIndex, NodeKind, Performer, ProcessLike, ProcessNode, ProcessParameter,
    ProtocolExecutionNode, SampleNode, Unit,
};

/// Where the most recent factor value lives
#[derive(Debug)]
enum FactorCursor {
    /// Stored on a sample in the graph
    Attached { sample: NodeIndex, slot: usize },
    /// No sample preceded it; kept only so a following unit has a target
    Detached(FactorValue),
}

/// Cursor state threaded through one build pass
#[derive(Debug, Default)]
struct BuilderState {
    last_process: Option<NodeIndex>,
    last_material_or_data: Option<NodeIndex>,
    last_sample: Option<NodeIndex>,
    last_factor_value: Option<FactorCursor>,
    last_protocol_execution: Option<NodeIndex>,
    pending_protocol_executions: Vec<NodeIndex>,
}

/// Single build pass over one header row
#[derive(Debug, Default)]
struct BuildPass {
    graph: Graph,
    state: BuilderState,
    skipped: usize,
}

impl BuildPass {
    fn apply(&mut self, kind: NodeKind, index: NodeIndex, name: &str) {
        match kind {
            NodeKind::Date => self.on_date(Date::new(index, name)),
            NodeKind::Performer => self.on_performer(Performer::new(index, name)),
            NodeKind::ProtocolExecution => self.on_protocol_execution(index, name),
            NodeKind::Process => self.on_process(index, name),
            NodeKind::Data => self.on_data(index, name),
            NodeKind::MaterialAttribute => {
                self.on_material_attribute(MaterialAttribute::new(index, name));
            }
            NodeKind::Material => self.on_material(index, name, false),
            NodeKind::Sample => self.on_material(index, name, true),
            NodeKind::FactorValue => self.on_factor_value(FactorValue::new(index, name)),
            NodeKind::Unit => self.on_unit(Unit::new(index, name)),
            NodeKind::ProcessParameter => {
                self.on_process_parameter(ProcessParameter::new(index, name));
            }
            NodeKind::Comment => self.on_comment(Comment::new(index, name)),
        }
    }

    fn insert(&mut self, node: impl Into<Node>) {
        if let Err(err) = self.graph.add_node(node) {
            tracing::warn!("Node insertion failed: {}", err);
        }
    }

    fn link_output(&mut self, from: NodeIndex, to: NodeIndex) {
        match self.graph.process_like_mut(from) {
            Ok(node) => node.add_output(to),
            Err(err) => tracing::debug!("Dropping output edge {} -> {}: {}", from, to, err),
        }
    }

    fn protocol_execution_mut(&mut self) -> Option<&mut ProtocolExecutionNode> {
        let index = self.state.last_protocol_execution?;
        self.graph
            .node_mut(index)
            .and_then(Node::as_protocol_execution_mut)
    }

    fn on_date(&mut self, date: Date) {
        match self.protocol_execution_mut() {
            Some(execution) => execution.add_date(date),
            None => tracing::debug!("Dropping date at {}: no protocol execution", date.index()),
        }
    }

    fn on_performer(&mut self, performer: Performer) {
        match self.protocol_execution_mut() {
            Some(execution) => execution.add_performer(performer),
            None => tracing::debug!(
                "Dropping performer at {}: no protocol execution",
                performer.index()
            ),
        }
    }

    fn on_protocol_execution(&mut self, index: NodeIndex, name: &str) {
        let mut execution = ProtocolExecutionNode::new(index, name);
        if let Some(input) = self.state.last_material_or_data {
            execution.add_input(input);
        }

        self.state.pending_protocol_executions.push(index);
        self.insert(execution);
        self.state.last_protocol_execution = Some(index);
    }

    fn on_process(&mut self, index: NodeIndex, name: &str) {
        let mut process = ProcessNode::new(index, name);
        if let Some(input) = self.state.last_material_or_data {
            process.add_input(input);
        }
        process.add_protocol_executions(std::mem::take(
            &mut self.state.pending_protocol_executions,
        ));

        self.insert(process);
        self.state.last_process = Some(index);
    }

    fn on_data(&mut self, index: NodeIndex, name: &str) {
        self.insert(DataNode::new(index, name));
        self.state.last_material_or_data = Some(index);

        if let Some(process) = self.state.last_process.take() {
            self.link_output(process, index);
        } else if let Some(execution) = self.state.last_protocol_execution.take() {
            self.link_output(execution, index);
        }
    }

    fn on_material_attribute(&mut self, attribute: MaterialAttribute) {
        let material = self
            .state
            .last_material_or_data
            .and_then(|target| self.graph.node_mut(target))
            .and_then(Node::as_material_mut);

        match material {
            Some(material) => material.add_attribute(attribute),
            None => tracing::debug!(
                "Dropping material attribute {:?} at {}: no preceding material",
                attribute.name(),
                attribute.index()
            ),
        }
    }

    fn on_material(&mut self, index: NodeIndex, name: &str, is_sample: bool) {
        // Execution keeps its cursor here, unlike the data branch.
        if self.state.last_material_or_data.is_some() && self.state.last_process.is_none() {
            if let Some(execution) = self.state.last_protocol_execution {
                self.link_output(execution, index);
            }
        }

        if is_sample {
            self.insert(SampleNode::new(index, name));
            self.state.last_sample = Some(index);
        } else {
            self.insert(MaterialNode::new(index, name));
        }
        self.state.last_material_or_data = Some(index);

        if let Some(process) = self.state.last_process.take() {
            self.link_output(process, index);
        }
    }

    fn on_factor_value(&mut self, factor: FactorValue) {
        let sample = self.state.last_sample.and_then(|target| {
            self.graph
                .node_mut(target)
                .and_then(Node::as_sample_mut)
                .map(|sample| (target, sample))
        });

        let cursor = match sample {
            Some((target, sample)) => FactorCursor::Attached {
                sample: target,
                slot: sample.add_factor_value(factor),
            },
            None => {
                tracing::debug!(
                    "Factor value {:?} at {} has no preceding sample",
                    factor.name(),
                    factor.index()
                );
                FactorCursor::Detached(factor)
            }
        };
        self.state.last_factor_value = Some(cursor);
    }

    fn on_unit(&mut self, unit: Unit) {
        match self.state.last_factor_value.as_mut() {
            Some(FactorCursor::Attached { sample, slot }) => {
                let factor = self
                    .graph
                    .node_mut(*sample)
                    .and_then(Node::as_sample_mut)
                    .and_then(|s| s.factor_values_mut().get_mut(*slot));
                if let Some(factor) = factor {
                    factor.set_unit(unit);
                }
            }
            Some(FactorCursor::Detached(factor)) => factor.set_unit(unit),
            None => tracing::debug!("Dropping unit at {}: no factor value", unit.index()),
        }
    }

    fn on_process_parameter(&mut self, parameter: ProcessParameter) {
        let Some(execution) = self.state.last_protocol_execution else {
            tracing::debug!(
                "Dropping parameter {:?} at {}: no protocol execution",
                parameter.name(),
                parameter.index()
            );
            return;
        };

        match self.graph.process_like_mut(execution) {
            Ok(node) => node.add_parameter(parameter),
            Err(err) => tracing::debug!("Dropping parameter {:?}: {}", parameter.name(), err),
        }
    }

    fn on_comment(&mut self, comment: Comment) {
        let targets = [self.state.last_process, self.state.last_material_or_data];
        let mut attached = false;

        for target in targets.into_iter().flatten() {
            if let Some(node) = self.graph.node_mut(target) {
                attached |= node.add_comment(comment.clone());
            }
        }

        if !attached {
            tracing::debug!("Dropping comment {:?} at {}", comment.name(), comment.index());
        }
    }
}

/// Builds a workflow [`Graph`] from a header row
///
/// # Example
///
/// ```rust
/// use isa_parser::GraphBuilder;
/// use isa_model::{NodeIndex, NodeKind, ProcessLike};
///
/// let graph = GraphBuilder::new().build(&["Source Name", "Protocol REF", "Sample Name"]);
///
/// let process = graph.process_like(NodeIndex(1)).unwrap();
/// assert_eq!(process.inputs(), &[NodeIndex(0)]);
/// assert_eq!(process.outputs(), &[NodeIndex(2)]);
/// assert_eq!(graph.nodes(NodeKind::Material).count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    classifier: HeaderClassifier,
}

impl GraphBuilder {
    /// Create builder with the default header vocabulary
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create builder with a custom classifier
    #[inline]
    #[must_use]
    pub fn with_classifier(classifier: HeaderClassifier) -> Self {
        Self { classifier }
    }

    /// Classifier used by this builder
    #[inline]
    #[must_use]
    pub fn classifier(&self) -> &HeaderClassifier {
        &self.classifier
    }

    /// Build the graph for a header row
    ///
    /// Never fails: unrecognized headers are skipped and annotations without a
    /// target are dropped. Building the same row twice yields equal graphs.
    #[must_use]
    pub fn build<S: AsRef<str>>(&self, headers: &[S]) -> Graph {
        let mut pass = BuildPass::default();

        for (position, header) in headers.iter().enumerate() {
            let header = header.as_ref();
            let index = NodeIndex(position);

            match self.classifier.classify(header) {
                Some(kind) => {
                    tracing::trace!("Column {} {:?} classified as {}", index, header, kind);
                    pass.apply(kind, index, header);
                }
                None => {
                    tracing::trace!("Column {} {:?} not recognized", index, header);
                    pass.skipped += 1;
                }
            }
        }

        if !pass.state.pending_protocol_executions.is_empty() {
            tracing::debug!(
                "{} protocol executions left without an owning process",
                pass.state.pending_protocol_executions.len()
            );
        }
        tracing::info!(
            "Built graph with {} nodes from {} columns ({} skipped)",
            pass.graph.len(),
            headers.len(),
            pass.skipped
        );

        pass.graph
    }
}
