//! Error types for header classification

use isa_model::NodeKind;

/// Errors while compiling a custom header vocabulary
///
/// Classification itself never fails; only building a classifier from
/// user-supplied patterns can.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// Pattern for a kind is not a valid regular expression
    #[error("invalid pattern for {kind}: {source}")]
    InvalidPattern {
        /// Kind the pattern was meant to recognize
        kind: NodeKind,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Data marker is empty and would match every header
    #[error("data marker must not be empty")]
    EmptyDataMarker,
}

impl ClassifierError {
    /// Create invalid pattern error for `kind`
    pub fn invalid_pattern(kind: NodeKind, source: regex::Error) -> Self {
        Self::InvalidPattern { kind, source }
    }
}
