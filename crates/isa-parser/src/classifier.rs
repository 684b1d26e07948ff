//! Header classifier
//!
//! Maps a raw header to a [`NodeKind`]. Rules are tried in a fixed priority
//! order and the first match wins:
//!
//! ```text
//! Date → Performer → ProtocolExecution → Process → Data (substring)
//!      → MaterialAttribute → Material (Sample refined) → FactorValue
//!      → Unit → ProcessParameter → Comment
//! ```
//!
//! Every rule except the data rule is a full-string regex match. The data rule
//! is a plain substring test and sits ahead of the material rules, so a header
//! such as `Comment[Raw Data File]` classifies as data.

use crate::error::ClassifierError;
use isa_model::NodeKind;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Header vocabulary, one pattern per kind
///
/// All fields except `data_marker` are regular expressions matched against the
/// whole header. `data_marker` is matched as a substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderPatterns {
    /// Date of a protocol execution
    pub date: String,
    /// Performer of a protocol execution
    pub performer: String,
    /// Protocol execution reference
    pub protocol_execution: String,
    /// Process reference
    pub process: String,
    /// Substring marking a data file column
    pub data_marker: String,
    /// Material attribute
    pub material_attribute: String,
    /// Material node
    pub material: String,
    /// Refinement of `material` that yields a sample
    pub sample: String,
    /// Factor value
    pub factor_value: String,
    /// Unit
    pub unit: String,
    /// Process parameter
    pub process_parameter: String,
    /// Comment
    pub comment: String,
}

impl Default for HeaderPatterns {
    fn default() -> Self {
        Self {
            date: "Date".into(),
            performer: "Performer".into(),
            protocol_execution:
                "(?:.+ )?Assay Name|Scan Name|Normalization Name|Data Transformation Name".into(),
            process: "Protocol REF".into(),
            data_marker: "File".into(),
            material_attribute: r"Characteristics ?\[.*\]|Label|Material Type".into(),
            material: "Source Name|Sample Name|Extract Name|Labeled Extract Name".into(),
            sample: "Sample Name".into(),
            factor_value: r"Factor Value ?\[.*\]".into(),
            unit: "Unit".into(),
            process_parameter: r"Parameter Value ?\[.*\]".into(),
            comment: r"Comment ?\[.*\]".into(),
        }
    }
}

#[derive(Debug, Clone)]
enum Matcher {
    Full(Regex),
    Contains(String),
}

impl Matcher {
    fn full(kind: NodeKind, pattern: &str) -> Result<Self, ClassifierError> {
        Regex::new(&format!("^(?:{pattern})$"))
            .map(Matcher::Full)
            .map_err(|e| ClassifierError::invalid_pattern(kind, e))
    }

    fn is_match(&self, header: &str) -> bool {
        match self {
            Matcher::Full(regex) => regex.is_match(header),
            Matcher::Contains(marker) => header.contains(marker.as_str()),
        }
    }
}

#[derive(Debug, Clone)]
struct Rule {
    kind: NodeKind,
    matcher: Matcher,
}

static DEFAULT_CLASSIFIER: Lazy<HeaderClassifier> = Lazy::new(|| {
    HeaderClassifier::from_patterns(&HeaderPatterns::default())
        .expect("default header patterns compile")
});

/// Priority-ordered header classifier
#[derive(Debug, Clone)]
pub struct HeaderClassifier {
    rules: Vec<Rule>,
    sample: Matcher,
}

impl HeaderClassifier {
    /// Compile a classifier from a header vocabulary
    ///
    /// # Errors
    /// Returns [`ClassifierError::InvalidPattern`] for a pattern that does not
    /// compile and [`ClassifierError::EmptyDataMarker`] for an empty marker.
    pub fn from_patterns(patterns: &HeaderPatterns) -> Result<Self, ClassifierError> {
        if patterns.data_marker.is_empty() {
            return Err(ClassifierError::EmptyDataMarker);
        }

        let full = |kind: NodeKind, pattern: &str| -> Result<Rule, ClassifierError> {
            Ok(Rule {
                kind,
                matcher: Matcher::full(kind, pattern)?,
            })
        };

        let rules = vec![
            full(NodeKind::Date, &patterns.date)?,
            full(NodeKind::Performer, &patterns.performer)?,
            full(NodeKind::ProtocolExecution, &patterns.protocol_execution)?,
            full(NodeKind::Process, &patterns.process)?,
            Rule {
                kind: NodeKind::Data,
                matcher: Matcher::Contains(patterns.data_marker.clone()),
            },
            full(NodeKind::MaterialAttribute, &patterns.material_attribute)?,
            full(NodeKind::Material, &patterns.material)?,
            full(NodeKind::FactorValue, &patterns.factor_value)?,
            full(NodeKind::Unit, &patterns.unit)?,
            full(NodeKind::ProcessParameter, &patterns.process_parameter)?,
            full(NodeKind::Comment, &patterns.comment)?,
        ];

        Ok(Self {
            rules,
            sample: Matcher::full(NodeKind::Sample, &patterns.sample)?,
        })
    }

    /// Classify a single header
    ///
    /// Returns `None` for headers that match no rule.
    #[must_use]
    pub fn classify(&self, header: &str) -> Option<NodeKind> {
        let kind = self
            .rules
            .iter()
            .find(|rule| rule.matcher.is_match(header))
            .map(|rule| rule.kind)?;

        if kind == NodeKind::Material && self.sample.is_match(header) {
            return Some(NodeKind::Sample);
        }
        Some(kind)
    }

    /// Classify every header of a row, in column order
    pub fn classify_all<'a, S: AsRef<str>>(
        &'a self,
        headers: &'a [S],
    ) -> impl Iterator<Item = Option<NodeKind>> + 'a {
        headers.iter().map(|h| self.classify(h.as_ref()))
    }
}

impl Default for HeaderClassifier {
    fn default() -> Self {
        DEFAULT_CLASSIFIER.clone()
    }
}
