use isa_model::{ColumnNode, Graph, Node, NodeIndex, NodeKind, ProcessLike};
use isa_parser::{GraphBuilder, HeaderClassifier};
use isa_test_utils::{init_tracing, microarray_assay_headers, study_sample_headers};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const VOCABULARY: &[&str] = &[
    "Source Name",
    "Sample Name",
    "Extract Name",
    "Labeled Extract Name",
    "Protocol REF",
    "Assay Name",
    "Scan Name",
    "Raw Data File",
    "Derived Data File",
    "Characteristics[organism]",
    "Label",
    "Factor Value[dose]",
    "Unit",
    "Parameter Value[time]",
    "Performer",
    "Date",
    "Comment[note]",
    "Term Source REF",
    "Term Accession Number",
    "Unrelated Column",
];

fn edges(graph: &Graph) -> Vec<(NodeIndex, Vec<NodeIndex>, Vec<NodeIndex>)> {
    graph
        .iter()
        .filter_map(|node| {
            node.as_process_like()
                .map(|p| (node.index(), p.inputs().to_vec(), p.outputs().to_vec()))
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_indices_match_columns_and_count_is_bounded(
        picks in proptest::collection::vec(0..VOCABULARY.len(), 0..60)
    ) {
        let headers: Vec<&str> = picks.iter().map(|&i| VOCABULARY[i]).collect();
        let classifier = HeaderClassifier::default();
        let graph = GraphBuilder::new().build(&headers);

        let recognized = classifier.classify_all(&headers).flatten().count();
        prop_assert!(graph.len() <= recognized);

        for node in graph.iter() {
            let column = node.index().get();
            prop_assert!(column < headers.len());
            prop_assert_eq!(node.name(), headers[column]);
            prop_assert!(classifier.classify(headers[column]).is_some_and(|k| k == node.kind()));
        }
    }

    #[test]
    fn prop_build_is_deterministic(
        picks in proptest::collection::vec(0..VOCABULARY.len(), 0..60)
    ) {
        let headers: Vec<&str> = picks.iter().map(|&i| VOCABULARY[i]).collect();
        let first = GraphBuilder::new().build(&headers);
        let second = GraphBuilder::new().build(&headers);

        let order = |g: &Graph| g.iter().map(Node::index).collect::<Vec<_>>();
        prop_assert_eq!(order(&first), order(&second));
        prop_assert_eq!(edges(&first), edges(&second));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_kind_filter_round_trips(
        picks in proptest::collection::vec(0..VOCABULARY.len(), 0..60)
    ) {
        let headers: Vec<&str> = picks.iter().map(|&i| VOCABULARY[i]).collect();
        let graph = GraphBuilder::new().build(&headers);

        for kind in NodeKind::ALL {
            for node in graph.nodes(kind) {
                prop_assert_eq!(graph.node(node.index()), Some(node));
            }
        }
    }

    #[test]
    fn prop_each_node_is_output_of_at_most_one_predecessor(
        picks in proptest::collection::vec(0..VOCABULARY.len(), 0..60)
    ) {
        let headers: Vec<&str> = picks.iter().map(|&i| VOCABULARY[i]).collect();
        let graph = GraphBuilder::new().build(&headers);

        let mut producers = std::collections::HashMap::new();
        for (producer, _, outputs) in edges(&graph) {
            for output in outputs {
                let previous = producers.insert(output, producer);
                prop_assert!(previous.is_none(), "{} produced twice", output);
            }
        }
    }
}

#[test]
fn microarray_assay_workflow() {
    init_tracing();
    let headers = microarray_assay_headers();
    let graph = GraphBuilder::new().build(&headers);

    // Sample, extract, labeled extract, two data files; four processes; two executions.
    assert_eq!(graph.nodes(NodeKind::Material).count(), 3);
    assert_eq!(graph.nodes(NodeKind::Data).count(), 2);
    assert_eq!(graph.nodes(NodeKind::Process).count(), 4);
    assert_eq!(graph.nodes(NodeKind::ProtocolExecution).count(), 2);

    // extraction: sample → extract
    let extraction = graph.process_like(NodeIndex(1)).unwrap();
    assert_eq!(extraction.inputs(), &[NodeIndex(0)]);
    assert_eq!(extraction.outputs(), &[NodeIndex(2)]);

    // labeling: extract → labeled extract, which carries the label attribute
    let labeling = graph.process_like(NodeIndex(3)).unwrap();
    assert_eq!(labeling.outputs(), &[NodeIndex(4)]);
    let labeled = graph.node(NodeIndex(4)).and_then(Node::as_material).unwrap();
    assert_eq!(labeled.material_type(), "Labeled Extract");
    assert_eq!(labeled.attributes().len(), 1);

    // hybridization carries performer, date and parameter
    let hybridization = graph
        .node(NodeIndex(6))
        .and_then(Node::as_protocol_execution)
        .unwrap();
    assert_eq!(hybridization.inputs(), &[NodeIndex(4)]);
    assert_eq!(hybridization.performers().len(), 1);
    assert_eq!(hybridization.dates().len(), 1);
    assert_eq!(hybridization.parameters().len(), 1);

    // scanning owns both pending executions and produces the array data file
    let scanning = graph.node(NodeIndex(12)).and_then(Node::as_process).unwrap();
    assert_eq!(scanning.protocol_executions(), &[NodeIndex(6), NodeIndex(10)]);
    assert_eq!(scanning.inputs(), &[NodeIndex(4)]);
    assert_eq!(scanning.outputs(), &[NodeIndex(13)]);

    // normalization consumes the raw file and produces the derived one
    let normalization = graph.process_like(NodeIndex(14)).unwrap();
    assert_eq!(normalization.inputs(), &[NodeIndex(13)]);
    assert_eq!(normalization.outputs(), &[NodeIndex(15)]);

    // the lowercase "file" in the FTP comment is not the data marker
    assert!(!graph.contains(NodeIndex(11)));
    assert_eq!(graph.node(NodeIndex(4)).unwrap().comments().len(), 1);
}

#[test]
fn study_sample_workflow() {
    init_tracing();
    let headers = study_sample_headers();
    let graph = GraphBuilder::new().build(&headers);

    assert_eq!(graph.len(), 3);

    let source = graph.node(NodeIndex(0)).and_then(Node::as_material).unwrap();
    let attributes: Vec<_> = source.attributes().iter().map(ColumnNode::index).collect();
    assert_eq!(attributes, vec![NodeIndex(1), NodeIndex(4)]);

    let growth = graph.process_like(NodeIndex(5)).unwrap();
    assert_eq!(growth.inputs(), &[NodeIndex(0)]);
    assert_eq!(growth.outputs(), &[NodeIndex(7)]);
    // No protocol execution precedes the parameter, so it is dropped.
    assert!(growth.parameters().is_empty());

    let sample = graph.node(NodeIndex(7)).and_then(Node::as_sample).unwrap();
    assert_eq!(sample.material().attributes().len(), 1);
    assert_eq!(sample.material().comments().len(), 1);

    let factors: Vec<_> = sample
        .factor_values()
        .iter()
        .map(|f| (f.name(), f.unit().map(ColumnNode::index)))
        .collect();
    assert_eq!(
        factors,
        vec![
            ("Factor Value[limiting nutrient]", None),
            ("Factor Value[rate]", Some(NodeIndex(13))),
        ]
    );
}

#[test]
fn second_material_is_not_linked_to_consumed_process() {
    let graph = GraphBuilder::new().build(&["Protocol REF", "Extract Name", "Sample Name"]);

    let process = graph.process_like(NodeIndex(0)).unwrap();
    assert_eq!(process.outputs(), &[NodeIndex(1)]);
}
