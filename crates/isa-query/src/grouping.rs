//! Factor-value grouping
//!
//! Clusters the samples of a table by the combination of values they carry in
//! the columns matching a criterion (by default every `Factor Value[...]`
//! column). Works on the raw table only; the graph is not consulted.
//!
//! For each row the matching columns are scanned left to right. A `Unit`
//! column directly after a match is folded into the key, and so is a `Unit`
//! that follows an ontology reference column (`Term Source REF`,
//! `Term Accession Number`):
//!
//! ```text
//! Factor Value[rate] | Unit | Term Source REF | Unit
//!        match         unit      (adopts)       unit
//! ```
//!
//! Without column types each value is written with a leading space before the
//! parts are joined with `|`, and only the ends of the key are trimmed, so a
//! time of `10` in `hr` groups under `10| hr`. The adoption flag is carried
//! from the last column of one row into the first column of the next.

use indexmap::{IndexMap, IndexSet};
use isa_model::AssayTable;
use serde::{Deserialize, Serialize};

const UNIT_HEADER: &str = "Unit";
const TERM_SOURCE_REF: &str = "Term Source REF";
const TERM_ACCESSION_NUMBER: &str = "Term Accession Number";

/// Group key → sample names carrying it, both in first-seen order
pub type Groups = IndexMap<String, IndexSet<String>>;

/// Options for [`GroupingEngine`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    /// Text a header must contain (or equal, see `exact_match`)
    pub criterion: String,
    /// Compare whole headers ignoring case instead of substring containment
    pub exact_match: bool,
    /// Prefix each value with its column type, as in `Time=10`
    pub include_column_type: bool,
    /// Header of the column naming the sample of each row
    pub sample_column: String,
}

impl GroupingConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With criterion
    #[inline]
    #[must_use]
    pub fn with_criterion(mut self, criterion: impl Into<String>) -> Self {
        self.criterion = criterion.into();
        self
    }

    /// With exact (case-insensitive) header matching
    #[inline]
    #[must_use]
    pub fn with_exact_match(mut self, exact_match: bool) -> Self {
        self.exact_match = exact_match;
        self
    }

    /// With column types in group keys
    #[inline]
    #[must_use]
    pub fn with_column_type(mut self, include: bool) -> Self {
        self.include_column_type = include;
        self
    }

    /// With sample column header
    #[inline]
    #[must_use]
    pub fn with_sample_column(mut self, header: impl Into<String>) -> Self {
        self.sample_column = header.into();
        self
    }
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            criterion: "Factor".into(),
            exact_match: false,
            include_column_type: false,
            sample_column: "Sample Name".into(),
        }
    }
}

/// Text between the first `[` and the following `]`, or the whole header
///
/// A header with an unclosed bracket yields everything after the `[`.
///
/// ```rust
/// use isa_query::grouping::extract_column_type;
///
/// assert_eq!(extract_column_type("Factor Value[Time]"), "Time");
/// assert_eq!(extract_column_type("Unit"), "Unit");
/// ```
#[must_use]
pub fn extract_column_type(header: &str) -> &str {
    match header.split_once('[') {
        Some((_, rest)) => rest.split_once(']').map_or(rest, |(inner, _)| inner),
        None => header,
    }
}

/// Groups table rows by their criterion column values
#[derive(Debug, Clone, Default)]
pub struct GroupingEngine {
    config: GroupingConfig,
}

impl GroupingEngine {
    /// Create engine with the given options
    #[inline]
    #[must_use]
    pub fn new(config: GroupingConfig) -> Self {
        Self { config }
    }

    /// Options in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GroupingConfig {
        &self.config
    }

    /// Group every data row of `table`
    ///
    /// Rows whose composite key is blank are left out. A row without a sample
    /// column contributes the empty name.
    #[must_use]
    pub fn group(&self, table: &AssayTable) -> Groups {
        let sample_column = table.find_column(&self.config.sample_column);
        if sample_column.is_none() {
            tracing::debug!(
                "No {:?} column; samples will be recorded as blank",
                self.config.sample_column
            );
        }

        let mut groups = Groups::new();
        let mut blank_rows = 0usize;
        let mut adopt_unit = false;

        for row in 0..table.row_count() {
            let key = self.row_key(table, row, &mut adopt_unit);
            if key.is_empty() {
                blank_rows += 1;
                continue;
            }

            let sample = sample_column
                .and_then(|column| table.raw(row, column))
                .unwrap_or_default();
            groups.entry(key).or_default().insert(sample.to_owned());
        }

        tracing::info!(
            "Grouped {} rows into {} groups ({} without a key)",
            table.row_count(),
            groups.len(),
            blank_rows
        );
        groups
    }

    fn matches_criterion(&self, header: &str) -> bool {
        if self.config.exact_match {
            header.eq_ignore_ascii_case(&self.config.criterion)
        } else {
            header.contains(self.config.criterion.as_str())
        }
    }

    fn row_key(&self, table: &AssayTable, row: usize, adopt_unit: &mut bool) -> String {
        let mut parts = Vec::new();

        for (column, header) in table.header().iter().enumerate() {
            let matched = self.matches_criterion(header)
                || (*adopt_unit && header.eq_ignore_ascii_case(UNIT_HEADER));

            if matched {
                let value = table.raw(row, column).unwrap_or_default();
                parts.push(if self.config.include_column_type {
                    format!("{}={}", extract_column_type(header), value)
                } else {
                    format!(" {value}")
                });
                *adopt_unit = true;
            } else {
                *adopt_unit =
                    header.contains(TERM_SOURCE_REF) || header.contains(TERM_ACCESSION_NUMBER);
            }
        }

        parts.join("|").trim().to_owned()
    }
}
