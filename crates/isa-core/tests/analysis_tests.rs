use isa_core::prelude::*;
use isa_core::{GroupingConfig, HeaderPatterns};
use isa_test_utils::{init_tracing, microarray_assay_table, study_sample_table};
use pretty_assertions::assert_eq;

#[test]
fn study_sample_end_to_end() {
    init_tracing();
    let analysis = AssayAnalysis::new(study_sample_table());

    let graph = analysis.graph();
    assert_eq!(graph.nodes(NodeKind::Material).count(), 2);
    assert_eq!(graph.nodes(NodeKind::Sample).count(), 1);
    assert_eq!(graph.nodes(NodeKind::Process).count(), 1);

    assert_eq!(analysis.groups().len(), 3);
    assert_eq!(analysis.process_counts()["growth"], 4);
    assert_eq!(
        analysis.material_attribute_counts()["Characteristics[organism part]"]["cell"],
        4
    );
}

#[test]
fn microarray_end_to_end_with_toml_config() {
    init_tracing();
    let config = AnalysisConfig::from_toml_str(
        r#"
        [grouping]
        criterion = "Label"
        exact_match = true
        "#,
    )
    .unwrap();
    let analysis = AssayAnalysis::parse(microarray_assay_table(), &config).unwrap();

    let keys: Vec<_> = analysis.groups().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["biotin", "Cy3"]);
    assert_eq!(analysis.groups()["biotin"].len(), 2);

    assert_eq!(analysis.graph().nodes(NodeKind::ProtocolExecution).count(), 2);
    assert_eq!(analysis.data_counts()["norm.txt"], 2);
}

#[test]
fn config_builders_match_toml() {
    let built = AnalysisConfig::new()
        .with_patterns(HeaderPatterns {
            unit: "Unit|Units".into(),
            ..HeaderPatterns::default()
        })
        .with_grouping(GroupingConfig::new().with_sample_column("Assay Name"));

    let parsed = AnalysisConfig::from_toml_str(
        r#"
        [patterns]
        unit = "Unit|Units"

        [grouping]
        sample_column = "Assay Name"
        "#,
    )
    .unwrap();

    assert_eq!(built, parsed);
}

#[test]
fn graph_serializes_as_node_sequence() {
    let analysis = AssayAnalysis::new(study_sample_table());
    let json = serde_json::to_value(analysis.graph()).unwrap();

    let nodes = json.as_array().unwrap();
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0]["kind"], "material");
    assert_eq!(nodes[2]["kind"], "sample");
}

#[test]
fn into_parts_returns_inputs() {
    let table = study_sample_table();
    let (returned, graph, groups) = AssayAnalysis::new(table.clone()).into_parts();

    assert_eq!(returned, table);
    assert_eq!(graph.len(), 3);
    assert!(!groups.is_empty());
}
