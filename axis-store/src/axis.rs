//! PURPOSE: Defines the axis and value model types.
//! CONTEXT: An `Axis` is one named option dimension (e.g. "Size") with an
//! ordered list of `AxisValue`s. Axis and value identity is carried by
//! opaque ids so renames and reorders never change what an edit refers to.

use serde::{Deserialize, Serialize};

/// Unique identifier for an axis within a store.
pub type AxisId = u64;

/// Unique identifier for a value within a store.
pub type ValueId = u64;

/// One entry in an axis's value list (e.g. "Medium").
///
/// The trailing value of every axis is kept empty as the "type to add"
/// slot; see `AxisStore` for the invariant repair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisValue {
    pub id: ValueId,
    pub text: String,
}

impl AxisValue {
    pub fn new(id: ValueId, text: impl Into<String>) -> Self {
        AxisValue {
            id,
            text: text.into(),
        }
    }

    /// An entered value is one with non-whitespace content.
    pub fn is_entered(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// A named option dimension with an ordered list of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    pub id: AxisId,
    pub name: String,
    pub values: Vec<AxisValue>,
}

impl Axis {
    /// Creates an axis with a blank name and a single empty value slot.
    pub fn new(id: AxisId, slot_id: ValueId) -> Self {
        Axis {
            id,
            name: String::new(),
            values: vec![AxisValue::new(slot_id, "")],
        }
    }

    /// Whether the axis has a non-blank name. Unnamed axes never
    /// contribute to item generation.
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// The trimmed, non-empty values in order. This is what the
    /// permutation generator multiplies over.
    pub fn entered_values(&self) -> Vec<String> {
        self.values
            .iter()
            .filter(|v| v.is_entered())
            .map(|v| v.text.trim().to_string())
            .collect()
    }

    pub fn has_entered_values(&self) -> bool {
        self.values.iter().any(|v| v.is_entered())
    }

    /// A contributing axis takes part in item generation and is eligible
    /// as a grouping axis: named, with at least one entered value.
    pub fn contributes(&self) -> bool {
        self.is_named() && self.has_entered_values()
    }
}
