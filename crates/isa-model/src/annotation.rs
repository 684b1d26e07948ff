//! Leaf annotation columns
//!
//! Annotations never live in the graph on their own; the builder attaches them
//! to the material, sample, process or protocol execution they describe.

use crate::types::{NodeIndex, NodeKind};
use serde::{Deserialize, Serialize};

/// Anything that originates from a single header column
pub trait ColumnNode {
    /// Column position
    fn index(&self) -> NodeIndex;

    /// Raw header text
    fn name(&self) -> &str;

    /// Kind the header was classified as
    fn kind(&self) -> NodeKind;
}

macro_rules! annotation {
    ($(#[$meta:meta])* $ty:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $ty {
            index: NodeIndex,
            name: String,
        }

        impl $ty {
            /// Create annotation for the column at `index`
            #[inline]
            #[must_use]
            pub fn new(index: NodeIndex, name: impl Into<String>) -> Self {
                Self {
                    index,
                    name: name.into(),
                }
            }
        }

        impl ColumnNode for $ty {
            #[inline]
            fn index(&self) -> NodeIndex {
                self.index
            }

            #[inline]
            fn name(&self) -> &str {
                &self.name
            }

            #[inline]
            fn kind(&self) -> NodeKind {
                NodeKind::$kind
            }
        }
    };
}

annotation!(
    /// `Comment[...]` column
    Comment => Comment
);

annotation!(
    /// Unit column qualifying a factor value
    Unit => Unit
);

annotation!(
    /// Material attribute such as `Characteristics[organism]`
    MaterialAttribute => MaterialAttribute
);

annotation!(
    /// `Parameter Value[...]` column of a protocol execution
    ProcessParameter => ProcessParameter
);

annotation!(
    /// Performer of a protocol execution
    Performer => Performer
);

annotation!(
    /// Date of a protocol execution
    Date => Date
);

/// `Factor Value[...]` column with an optional unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorValue {
    index: NodeIndex,
    name: String,
    unit: Option<Unit>,
}

impl FactorValue {
    /// Create factor value without a unit
    #[inline]
    #[must_use]
    pub fn new(index: NodeIndex, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            unit: None,
        }
    }

    /// Unit attached to this factor value
    #[inline]
    #[must_use]
    pub fn unit(&self) -> Option<&Unit> {
        self.unit.as_ref()
    }

    /// Set the unit, replacing any previous one
    #[inline]
    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = Some(unit);
    }
}

impl ColumnNode for FactorValue {
    #[inline]
    fn index(&self) -> NodeIndex {
        self.index
    }

    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn kind(&self) -> NodeKind {
        NodeKind::FactorValue
    }
}
