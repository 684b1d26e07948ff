//! Assay analysis
//!
//! One call from a raw table to everything derived from it: the factor groups,
//! the workflow graph and the usage histograms.

use crate::config::AnalysisConfig;
use crate::error::Result;
use isa_model::{AssayTable, Graph};
use isa_parser::GraphBuilder;
use isa_query::{AttributeCounts, Groups, ValueCounts};

/// A parsed assay table together with its graph and factor groups
#[derive(Debug, Clone)]
pub struct AssayAnalysis {
    table: AssayTable,
    graph: Graph,
    groups: Groups,
}

impl AssayAnalysis {
    /// Analyse `table` with the default vocabulary and grouping options
    #[must_use]
    pub fn new(table: AssayTable) -> Self {
        let config = AnalysisConfig::default();
        let groups = config.grouping_engine().group(&table);
        let graph = GraphBuilder::new().build(table.header());
        Self {
            table,
            graph,
            groups,
        }
    }

    /// Analyse `table` with custom settings
    ///
    /// Groups are computed before the graph.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Classifier`](crate::AnalysisError::Classifier)
    /// when the configured header vocabulary does not compile.
    pub fn parse(table: AssayTable, config: &AnalysisConfig) -> Result<Self> {
        let builder = GraphBuilder::with_classifier(config.classifier()?);

        let groups = config.grouping_engine().group(&table);
        let graph = builder.build(table.header());

        tracing::info!(
            "Analysed table of {} rows: {} nodes, {} groups",
            table.row_count(),
            graph.len(),
            groups.len()
        );
        Ok(Self {
            table,
            graph,
            groups,
        })
    }

    /// Analyse a raw matrix whose first row is the header
    ///
    /// # Errors
    /// Returns [`AnalysisError::Table`](crate::AnalysisError::Table) for an
    /// empty matrix, or any error of [`AssayAnalysis::parse`].
    pub fn from_rows<I, R, S>(matrix: I, config: &AnalysisConfig) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::parse(AssayTable::from_rows(matrix)?, config)
    }

    /// Workflow graph
    #[inline]
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Factor groups: key → sample names
    #[inline]
    #[must_use]
    pub fn groups(&self) -> &Groups {
        &self.groups
    }

    /// Source table
    #[inline]
    #[must_use]
    pub fn table(&self) -> &AssayTable {
        &self.table
    }

    /// Protocol name → number of rows using it
    #[must_use]
    pub fn process_counts(&self) -> ValueCounts {
        isa_query::process_counts(&self.graph, &self.table)
    }

    /// Data file name → number of rows referencing it
    #[must_use]
    pub fn data_counts(&self) -> ValueCounts {
        isa_query::data_counts(&self.graph, &self.table)
    }

    /// Attribute header → value histogram
    #[must_use]
    pub fn material_attribute_counts(&self) -> AttributeCounts {
        isa_query::material_attribute_counts(&self.graph, &self.table)
    }

    /// Release the table, graph and groups
    #[must_use]
    pub fn into_parts(self) -> (AssayTable, Graph, Groups) {
        (self.table, self.graph, self.groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnalysisError;
    use isa_model::NodeKind;
    use isa_parser::HeaderPatterns;

    fn rows() -> Vec<Vec<&'static str>> {
        vec![
            vec!["Sample Name", "Protocol REF", "Raw Data File", "Factor Value[dose]"],
            vec!["s1", "scan", "a.raw", "5"],
            vec!["s2", "scan", "b.raw", "5"],
        ]
    }

    #[test]
    fn default_analysis() {
        let analysis = AssayAnalysis::from_rows(rows(), &AnalysisConfig::default()).unwrap();

        assert_eq!(analysis.graph().len(), 3);
        assert_eq!(analysis.groups()["5"].len(), 2);
        assert_eq!(analysis.process_counts()["scan"], 2);
        assert_eq!(analysis.data_counts().len(), 2);
    }

    #[test]
    fn new_matches_parse_with_defaults() {
        let table = AssayTable::from_rows(rows()).unwrap();
        let quick = AssayAnalysis::new(table.clone());
        let parsed = AssayAnalysis::parse(table, &AnalysisConfig::default()).unwrap();

        assert_eq!(quick.graph(), parsed.graph());
        assert_eq!(quick.groups(), parsed.groups());
    }

    #[test]
    fn custom_vocabulary_changes_classification() {
        let config = AnalysisConfig::new().with_patterns(HeaderPatterns {
            data_marker: "Raw Data".into(),
            ..HeaderPatterns::default()
        });
        let analysis = AssayAnalysis::from_rows(
            vec![vec!["Sample Name", "Protocol REF", "Image File"], vec!["s1", "scan", "x.tif"]],
            &config,
        )
        .unwrap();

        assert_eq!(analysis.graph().nodes(NodeKind::Data).count(), 0);
    }

    #[test]
    fn invalid_vocabulary_is_reported() {
        let config = AnalysisConfig::new().with_patterns(HeaderPatterns {
            comment: "Comment[".into(),
            ..HeaderPatterns::default()
        });
        let err = AssayAnalysis::from_rows(rows(), &config).unwrap_err();

        assert!(matches!(err, AnalysisError::Classifier(_)));
        assert!(err.is_configuration());
    }

    #[test]
    fn empty_matrix_is_reported() {
        let empty: Vec<Vec<String>> = Vec::new();
        let err = AssayAnalysis::from_rows(empty, &AnalysisConfig::default()).unwrap_err();

        assert!(matches!(err, AnalysisError::Table(_)));
        assert!(!err.is_configuration());
    }
}
