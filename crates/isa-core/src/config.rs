//! Analysis configuration
//!
//! Bundles the header vocabulary and the grouping options. Every field has a
//! default, so a TOML document only needs the keys it changes:
//!
//! ```toml
//! [patterns]
//! process = "Protocol REF|Derived Protocol REF"
//!
//! [grouping]
//! include_column_type = true
//! ```

use crate::error::ConfigError;
use isa_parser::{HeaderClassifier, HeaderPatterns};
use isa_query::{GroupingConfig, GroupingEngine};
use serde::{Deserialize, Serialize};

/// Settings for [`AssayAnalysis`](crate::AssayAnalysis)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Header vocabulary for classification
    pub patterns: HeaderPatterns,
    /// Factor grouping options
    pub grouping: GroupingConfig,
}

impl AnalysisConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With header vocabulary
    #[inline]
    #[must_use]
    pub fn with_patterns(mut self, patterns: HeaderPatterns) -> Self {
        self.patterns = patterns;
        self
    }

    /// With grouping options
    #[inline]
    #[must_use]
    pub fn with_grouping(mut self, grouping: GroupingConfig) -> Self {
        self.grouping = grouping;
        self
    }

    /// Read configuration from a TOML document
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] when the document is malformed or has a
    /// value of the wrong type.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str(document)?;
        tracing::debug!("Loaded analysis configuration: {:?}", config);
        Ok(config)
    }

    /// Render configuration as TOML
    ///
    /// # Errors
    /// Propagates serializer failures.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    pub(crate) fn classifier(&self) -> Result<HeaderClassifier, isa_parser::ClassifierError> {
        if self.patterns == HeaderPatterns::default() {
            return Ok(HeaderClassifier::default());
        }
        HeaderClassifier::from_patterns(&self.patterns)
    }

    pub(crate) fn grouping_engine(&self) -> GroupingEngine {
        GroupingEngine::new(self.grouping.clone())
    }
}
