//! PURPOSE: Manages the ordered collection of axes (The Axis Store).
//! CONTEXT: All mutations over axes and values live here. Operations are
//! total: unknown ids and out-of-range indices silently no-op, and every
//! value mutation is followed by a single invariant-repair step that keeps
//! the trailing empty "type to add" slot in place.

use serde::{Deserialize, Serialize};

use crate::axis::{Axis, AxisId, AxisValue, ValueId};

/// The AxisStore holds the ordered list of axes and allocates ids.
///
/// Ids are monotonically increasing and never reused, so they stay stable
/// across renames and reorders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisStore {
    axes: Vec<Axis>,
    next_id: u64,
}

impl Default for AxisStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        AxisStore {
            axes: Vec::new(),
            next_id: 1,
        }
    }

    /// The current axes, in display order.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn axis(&self, id: AxisId) -> Option<&Axis> {
        self.axes.iter().find(|a| a.id == id)
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn axis_index(&self, id: AxisId) -> Option<usize> {
        self.axes.iter().position(|a| a.id == id)
    }

    // ========================================================================
    // AXIS OPERATIONS
    // ========================================================================

    /// Appends a new axis with a blank name and one empty value slot.
    /// Returns the new axis id.
    pub fn add_axis(&mut self) -> AxisId {
        let id = self.alloc_id();
        let slot_id = self.alloc_id();
        self.axes.push(Axis::new(id, slot_id));
        id
    }

    /// Sets an axis's name. An empty name is allowed; the axis is simply
    /// excluded from item generation until it is named again.
    pub fn rename_axis(&mut self, id: AxisId, name: &str) {
        if let Some(axis) = self.axes.iter_mut().find(|a| a.id == id) {
            axis.name = name.to_string();
        }
    }

    /// Removes an axis entirely, including its values.
    pub fn remove_axis(&mut self, id: AxisId) {
        self.axes.retain(|a| a.id != id);
    }

    /// Moves the axis at `from` to position `to` (stable move).
    pub fn reorder_axes(&mut self, from: usize, to: usize) {
        move_element(&mut self.axes, from, to);
    }

    // ========================================================================
    // VALUE OPERATIONS
    // ========================================================================

    /// Appends an empty value to an axis.
    pub fn add_value(&mut self, axis_id: AxisId) {
        let value_id = self.alloc_id();
        if let Some(axis) = self.axes.iter_mut().find(|a| a.id == axis_id) {
            axis.values.push(AxisValue::new(value_id, ""));
        }
    }

    /// Sets a value's text. If the edited value was the trailing slot and
    /// is now non-empty, a fresh empty slot is appended (auto-grow).
    pub fn update_value(&mut self, axis_id: AxisId, value_id: ValueId, text: &str) {
        let Some(idx) = self.axis_index(axis_id) else {
            return;
        };
        if let Some(value) = self.axes[idx].values.iter_mut().find(|v| v.id == value_id) {
            value.text = text.to_string();
            self.repair_trailing_slot(idx);
        }
    }

    /// Removes a value. The trailing empty slot is re-established if the
    /// removal consumed it (auto-heal), and an axis whose last value was
    /// removed collapses back to a single empty slot.
    pub fn remove_value(&mut self, axis_id: AxisId, value_id: ValueId) {
        let Some(idx) = self.axis_index(axis_id) else {
            return;
        };
        let before = self.axes[idx].values.len();
        self.axes[idx].values.retain(|v| v.id != value_id);
        if self.axes[idx].values.len() != before {
            self.repair_trailing_slot(idx);
        }
    }

    /// Moves a value within an axis from index `from` to `to` (stable move).
    pub fn reorder_values(&mut self, axis_id: AxisId, from: usize, to: usize) {
        let Some(idx) = self.axis_index(axis_id) else {
            return;
        };
        if move_element(&mut self.axes[idx].values, from, to) {
            self.repair_trailing_slot(idx);
        }
    }

    /// Re-establishes the trailing empty slot invariant for one axis:
    /// every axis ends with an empty value, and an axis with no values
    /// holds exactly one empty slot.
    fn repair_trailing_slot(&mut self, idx: usize) {
        let needs_slot = self.axes[idx]
            .values
            .last()
            .map_or(true, |v| v.is_entered());
        if needs_slot {
            let slot_id = self.alloc_id();
            self.axes[idx].values.push(AxisValue::new(slot_id, ""));
        }
    }
}

/// Stable array move matching the drag-and-drop contract: remove the
/// element at `from`, then insert it at `to`. No-op when the indices are
/// equal or out of range.
fn move_element<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let moved = items.remove(from);
    items.insert(to, moved);
    true
}
