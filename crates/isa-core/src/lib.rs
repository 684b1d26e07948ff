//! ISA Core - assay workflow reconstruction
//!
//! Entry point for callers that hold an ISA-Tab table in memory and want:
//! - The experimental workflow as a typed graph
//! - Samples grouped by their factor values
//! - Usage histograms for protocols, data files and material attributes
//!
//! # Example
//!
//! ```rust
//! use isa_core::{AnalysisConfig, AssayAnalysis};
//!
//! let analysis = AssayAnalysis::from_rows(
//!     vec![
//!         vec!["Source Name", "Protocol REF", "Sample Name", "Factor Value[Time]", "Unit"],
//!         vec!["src1", "growth", "S1", "10", "hr"],
//!         vec!["src1", "growth", "S2", "20", "hr"],
//!     ],
//!     &AnalysisConfig::default(),
//! )?;
//!
//! assert_eq!(analysis.graph().len(), 3);
//! assert_eq!(analysis.groups().len(), 2);
//! assert_eq!(analysis.process_counts()["growth"], 2);
//! # Ok::<(), isa_core::AnalysisError>(())
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

pub mod analysis;
pub mod config;
pub mod error;

// Re-exports for convenience
pub use analysis::AssayAnalysis;
pub use config::AnalysisConfig;
pub use error::{AnalysisError, ConfigError, Result};

pub use isa_model::{AssayTable, Graph, Node, NodeIndex, NodeKind};
pub use isa_parser::{GraphBuilder, HeaderClassifier, HeaderPatterns};
pub use isa_query::{AttributeCounts, GroupingConfig, GroupingEngine, Groups, ValueCounts};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with ISA Core
    pub use crate::{AnalysisConfig, AnalysisError, AssayAnalysis, AssayTable};
    pub use isa_model::prelude::*;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
