//! ISA Graph Parser
//!
//! Turns the header row of an ISA-Tab table into a workflow [`Graph`].
//!
//! # Pipeline
//!
//! ```text
//! header row → HeaderClassifier → NodeKind per column → GraphBuilder → Graph
//! ```
//!
//! Classification is first-match-wins over a fixed priority order; the builder
//! is a single forward pass over the classified columns. Neither step fails on
//! unexpected input: unknown headers are skipped and annotations without a
//! target are dropped.
//!
//! # Example
//!
//! ```rust
//! use isa_parser::{GraphBuilder, HeaderClassifier};
//! use isa_model::NodeKind;
//!
//! let classifier = HeaderClassifier::default();
//! assert_eq!(classifier.classify("Raw Data File"), Some(NodeKind::Data));
//!
//! let graph = GraphBuilder::with_classifier(classifier)
//!     .build(&["Sample Name", "Protocol REF", "Raw Data File"]);
//! assert_eq!(graph.len(), 3);
//! ```
//!
//! [`Graph`]: isa_model::Graph

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod builder;
pub mod classifier;
pub mod error;

// Re-exports for convenience
pub use builder::GraphBuilder;
pub use classifier::{HeaderClassifier, HeaderPatterns};
pub use error::ClassifierError;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
