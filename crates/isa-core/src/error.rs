//! Error types for the analysis facade
//!
//! Wraps the errors of every stage so callers handle one type:
//! - Table construction failures
//! - Invalid header vocabularies
//! - Unreadable configuration

use isa_model::TableError;
use isa_parser::ClassifierError;

/// Main analysis error type
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Input matrix could not be wrapped as a table
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// Header vocabulary failed to compile
    #[error("classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    /// Configuration could not be read
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AnalysisError {
    /// Check if the error comes from user-supplied configuration
    #[inline]
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Classifier(_) | Self::Config(_))
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Document is not valid TOML or does not fit the schema
    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
