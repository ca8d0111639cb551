//! Item identity and the permutation generator.
//!
//! An `Item` is one concrete combination of one value per contributing
//! axis. Identity is structural: two items are the same entity iff their
//! ordered (axis, value) parts are equal. The " / "-joined canonical name
//! is a rendering of that identity, not the identity itself, so a value
//! containing the separator cannot collide with a different combination.

use axis_store::Axis;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Separator used when rendering an item's canonical name.
pub const NAME_SEPARATOR: &str = " / ";

/// One (axis, value) component of an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemPart {
    pub axis: String,
    pub value: String,
}

/// One derived combination. Parts are ordered by axis order, so the
/// canonical name is stable across recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    parts: SmallVec<[ItemPart; 4]>,
}

impl Item {
    pub fn parts(&self) -> &[ItemPart] {
        &self.parts
    }

    /// The slash-joined, axis-ordered text form ("S / Red"). This is the
    /// name shown when no grouping applies and the string the rendering
    /// collaborator uses to address the item.
    pub fn canonical_name(&self) -> String {
        let values: Vec<&str> = self.parts.iter().map(|p| p.value.as_str()).collect();
        values.join(NAME_SEPARATOR)
    }

    /// The value this item holds on the named axis, if that axis
    /// contributed to it.
    pub fn value_for(&self, axis_name: &str) -> Option<&str> {
        self.parts
            .iter()
            .find(|p| p.axis == axis_name)
            .map(|p| p.value.as_str())
    }

    /// Whether any component of this item equals the given value text,
    /// regardless of axis. Used by group-level bulk edits.
    pub fn has_value(&self, value: &str) -> bool {
        self.parts.iter().any(|p| p.value == value)
    }
}

/// Computes the cartesian product of entered values across contributing
/// axes, in axis order (first axis varies slowest).
///
/// Axes with a blank name or no entered values are skipped; if nothing
/// contributes, the result is empty. Pure and deterministic: identical
/// axis state always yields the identical item list, because instance and
/// selection state downstream is keyed off it.
pub fn generate_items(axes: &[Axis]) -> Vec<Item> {
    let contributing: Vec<(String, Vec<String>)> = axes
        .iter()
        .filter(|a| a.is_named())
        .map(|a| (a.name.trim().to_string(), a.entered_values()))
        .filter(|(_, values)| !values.is_empty())
        .collect();

    if contributing.is_empty() {
        return Vec::new();
    }

    let mut items = vec![Item {
        parts: SmallVec::new(),
    }];
    for (axis_name, values) in &contributing {
        let mut expanded = Vec::with_capacity(items.len() * values.len());
        for item in &items {
            for value in values {
                let mut parts = item.parts.clone();
                parts.push(ItemPart {
                    axis: axis_name.clone(),
                    value: value.clone(),
                });
                expanded.push(Item { parts });
            }
        }
        items = expanded;
    }
    items
}
