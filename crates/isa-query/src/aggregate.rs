//! Value histograms over a built graph
//!
//! Each query walks the nodes of one kind, reads their column in every data
//! row, and counts the non-blank values. Counts from several nodes of the same
//! kind are merged, so two `Protocol REF` columns naming `growth` both add to
//! the same entry.

use indexmap::IndexMap;
use isa_model::{AssayTable, ColumnNode, Graph, NodeIndex, NodeKind};

/// Cell value → number of occurrences, in first-seen order
pub type ValueCounts = IndexMap<String, usize>;

/// Attribute header → histogram of its values
pub type AttributeCounts = IndexMap<String, ValueCounts>;

fn count_column(counts: &mut ValueCounts, table: &AssayTable, column: NodeIndex) {
    for value in table.column_values(column.get()) {
        *counts.entry(value.to_owned()).or_insert(0) += 1;
    }
}

/// Count the values found under every node of `kind`
///
/// Blank cells and cells past the end of a short row are not counted.
#[must_use]
pub fn node_value_counts(graph: &Graph, table: &AssayTable, kind: NodeKind) -> ValueCounts {
    let mut counts = ValueCounts::new();
    for node in graph.nodes(kind) {
        count_column(&mut counts, table, node.index());
    }

    tracing::debug!("Counted {} distinct {} values", counts.len(), kind);
    counts
}

/// How often each protocol was used
#[inline]
#[must_use]
pub fn process_counts(graph: &Graph, table: &AssayTable) -> ValueCounts {
    node_value_counts(graph, table, NodeKind::Process)
}

/// How often each data file is referenced
#[inline]
#[must_use]
pub fn data_counts(graph: &Graph, table: &AssayTable) -> ValueCounts {
    node_value_counts(graph, table, NodeKind::Data)
}

/// Histogram of every material attribute, keyed by attribute header
///
/// Covers the attributes of all materials, samples included. Attributes that
/// share a header (say `Characteristics[organism]` on both source and sample)
/// are merged.
#[must_use]
pub fn material_attribute_counts(graph: &Graph, table: &AssayTable) -> AttributeCounts {
    let mut counts = AttributeCounts::new();

    let attributes = graph
        .nodes(NodeKind::Material)
        .filter_map(|node| node.as_material())
        .flat_map(|material| material.attributes());

    for attribute in attributes {
        let histogram = counts.entry(attribute.name().to_owned()).or_default();
        count_column(histogram, table, attribute.index());
    }

    // Attributes with only blank cells leave no entry.
    counts.retain(|_, histogram| !histogram.is_empty());
    counts
}
