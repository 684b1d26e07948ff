//! ISA Graph Queries
//!
//! Reporting structures derived from an assay table and its workflow graph.
//!
//! - [`grouping`]: samples clustered by their combination of factor values,
//!   computed from the raw table alone
//! - [`aggregate`]: value histograms for process, data and material attribute
//!   columns, located through the graph
//!
//! # Example
//!
//! ```rust
//! use isa_model::AssayTable;
//! use isa_query::GroupingEngine;
//!
//! let table = AssayTable::from_rows(vec![
//!     vec!["Sample Name", "Factor Value[Time]", "Unit"],
//!     vec!["S1", "10", "hr"],
//!     vec!["S2", "10", "hr"],
//! ])
//! .unwrap();
//!
//! let groups = GroupingEngine::default().group(&table);
//! assert_eq!(groups["10| hr"].len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod aggregate;
pub mod grouping;

// Re-exports for convenience
pub use aggregate::{
    data_counts, material_attribute_counts, node_value_counts, process_counts, AttributeCounts,
    ValueCounts,
};
pub use grouping::{extract_column_type, GroupingConfig, GroupingEngine, Groups};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
