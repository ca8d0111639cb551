//! The variant matrix facade.
//!
//! `VariantMatrix` owns the axis store and every piece of state derived
//! from it, and re-runs the recompute pipeline after each axis mutation:
//!
//! axis mutation -> regenerate items -> reconcile ledger
//!               -> revalidate group-by -> re-sync expansion
//!
//! Price, inventory, and selection edits do not restructure the matrix
//! and therefore leave the expansion state alone. All operations are
//! synchronous and total; unknown names and labels silently no-op.

use axis_store::{Axis, AxisId, AxisStore, ValueId};

use crate::grouping::{group_items, Group};
use crate::ledger::InstanceLedger;
use crate::permutation::{generate_items, Item};
use crate::state::{ExpansionState, SelectionState};
use crate::view::{build_view, MatrixView};

/// The engine exposed to the rendering collaborator.
///
/// Item-addressed operations take the canonical item name and resolve it
/// against the current item set; group-addressed operations take the
/// group label from the current view.
#[derive(Debug, Clone, Default)]
pub struct VariantMatrix {
    store: AxisStore,
    ledger: InstanceLedger,
    group_by: Option<String>,
    selection: SelectionState,
    expansion: ExpansionState,
    /// Current derived items, regenerated after every axis mutation.
    items: Vec<Item>,
}

impl VariantMatrix {
    pub fn new() -> Self {
        VariantMatrix::default()
    }

    // ========================================================================
    // AXIS OPERATIONS (forwarded, then pipeline refresh)
    // ========================================================================

    pub fn add_axis(&mut self) -> AxisId {
        let id = self.store.add_axis();
        self.refresh();
        id
    }

    pub fn rename_axis(&mut self, id: AxisId, name: &str) {
        self.store.rename_axis(id, name);
        self.refresh();
    }

    pub fn remove_axis(&mut self, id: AxisId) {
        self.store.remove_axis(id);
        self.refresh();
    }

    pub fn add_value(&mut self, axis_id: AxisId) {
        self.store.add_value(axis_id);
        self.refresh();
    }

    pub fn update_value(&mut self, axis_id: AxisId, value_id: ValueId, text: &str) {
        self.store.update_value(axis_id, value_id, text);
        self.refresh();
    }

    pub fn remove_value(&mut self, axis_id: AxisId, value_id: ValueId) {
        self.store.remove_value(axis_id, value_id);
        self.refresh();
    }

    pub fn reorder_axes(&mut self, from: usize, to: usize) {
        self.store.reorder_axes(from, to);
        self.refresh();
    }

    pub fn reorder_values(&mut self, axis_id: AxisId, from: usize, to: usize) {
        self.store.reorder_values(axis_id, from, to);
        self.refresh();
    }

    // ========================================================================
    // GROUPING
    // ========================================================================

    /// Selects the grouping axis by name. A name that does not match a
    /// contributing axis snaps back to the first contributing axis.
    pub fn set_group_by(&mut self, axis_name: &str) {
        self.group_by = Some(axis_name.trim().to_string());
        self.revalidate_group_by();
        self.sync_expansion();
    }

    pub fn group_by(&self) -> Option<&str> {
        self.group_by.as_deref()
    }

    // ========================================================================
    // BUSINESS DATA
    // ========================================================================

    pub fn set_price(&mut self, item_name: &str, raw: &str) {
        if let Some(item) = self.find_item(item_name) {
            self.ledger.set_price(&item, raw);
        }
    }

    pub fn set_inventory(&mut self, item_name: &str, raw: &str) {
        if let Some(item) = self.find_item(item_name) {
            self.ledger.set_inventory(&item, raw);
        }
    }

    /// Bulk-sets the price for every item carrying the group's value.
    pub fn set_group_price(&mut self, group_label: &str, raw: &str) {
        self.ledger.set_group_price(group_label, raw);
    }

    pub fn total_inventory(&self) -> u64 {
        self.ledger.total_inventory()
    }

    // ========================================================================
    // SELECTION
    // ========================================================================

    pub fn toggle_item(&mut self, item_name: &str) {
        if let Some(item) = self.find_item(item_name) {
            self.selection.toggle_item(&item);
        }
    }

    pub fn toggle_group(&mut self, group_label: &str) {
        let groups = self.groups();
        if let Some(group) = groups.iter().find(|g| g.label == group_label) {
            let members: Vec<Item> = group.items.iter().map(|e| e.item.clone()).collect();
            self.selection.toggle_group(&members);
        }
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(&self.items);
    }

    pub fn unselect_all(&mut self) {
        self.selection.unselect_all();
    }

    // ========================================================================
    // EXPANSION
    // ========================================================================

    pub fn toggle_expanded(&mut self, group_label: &str) {
        self.expansion.toggle(group_label);
    }

    pub fn expand_all(&mut self) {
        let labels = self.group_labels();
        self.expansion.expand_all(&labels);
    }

    pub fn collapse_all(&mut self) {
        self.expansion.collapse_all();
    }

    // ========================================================================
    // READ ACCESSORS
    // ========================================================================

    pub fn axes(&self) -> &[Axis] {
        self.store.axes()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// The current grouping, recomputed from the derived items.
    pub fn groups(&self) -> Vec<Group> {
        group_items(&self.items, self.group_by.as_deref())
    }

    /// The complete renderable snapshot.
    pub fn view(&self) -> MatrixView {
        let groups = self.groups();
        build_view(
            &self.items,
            &groups,
            &self.ledger,
            &self.selection,
            &self.expansion,
        )
    }

    // ========================================================================
    // PIPELINE
    // ========================================================================

    fn refresh(&mut self) {
        self.items = generate_items(self.store.axes());
        log::debug!("derived {} items from {} axes", self.items.len(), self.store.axes().len());
        self.ledger.reconcile(&self.items);
        self.revalidate_group_by();
        self.sync_expansion();
    }

    /// Keeps the grouping axis valid: it must name a contributing axis,
    /// falling back to the first contributing axis, or to none at all.
    fn revalidate_group_by(&mut self) {
        let eligible: Vec<&str> = self
            .store
            .axes()
            .iter()
            .filter(|a| a.contributes())
            .map(|a| a.name.trim())
            .collect();
        let valid = self
            .group_by
            .as_deref()
            .map_or(false, |name| eligible.iter().any(|n| *n == name));
        if !valid {
            self.group_by = eligible.first().map(|n| n.to_string());
        }
    }

    fn sync_expansion(&mut self) {
        let labels = self.group_labels();
        self.expansion.sync_to_groups(&labels);
    }

    fn group_labels(&self) -> Vec<String> {
        self.groups().into_iter().map(|g| g.label).collect()
    }

    fn find_item(&self, name: &str) -> Option<Item> {
        self.items.iter().find(|i| i.canonical_name() == name).cloned()
    }
}
