//! Renderable output for the frontend.
//!
//! A `MatrixView` is a pure snapshot of everything the variant list
//! renders: groups in display order with their aggregates and checkbox
//! states, plus the top-level totals. It is recomputed on demand from the
//! current engine state, never mutated, so it can never go stale.
//!
//! The rendering collaborator owns text search over the display names,
//! image association, and currency formatting of the numeric prices.

use serde::{Deserialize, Serialize};

use crate::grouping::{inventory_sum, is_flat, price_range_display, Group};
use crate::ledger::InstanceLedger;
use crate::permutation::Item;
use crate::state::{ExpansionState, SelectionState};

/// One displayed item row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    /// Canonical name; the stable handle for write operations.
    pub name: String,
    /// Group-relative display name.
    pub display_name: String,
    pub price: f64,
    pub inventory: u32,
    pub selected: bool,
}

/// One displayed group with its aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupView {
    pub label: String,
    pub expanded: bool,
    /// Checked iff every item in the group is selected.
    pub checked: bool,
    pub price_range: String,
    pub inventory_total: u64,
    pub items: Vec<ItemView>,
}

/// The complete renderable state of the variant list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixView {
    /// Flat mode: a single contributing axis, shown without group rows.
    pub flat: bool,
    pub groups: Vec<GroupView>,
    pub item_count: usize,
    pub selected_count: usize,
    /// Checked iff the selected count equals the item count.
    pub all_selected: bool,
    pub total_inventory: u64,
}

/// Assembles the renderable view from the current derived state.
pub fn build_view(
    items: &[Item],
    groups: &[Group],
    ledger: &InstanceLedger,
    selection: &SelectionState,
    expansion: &ExpansionState,
) -> MatrixView {
    let group_views = groups
        .iter()
        .map(|group| {
            let item_views: Vec<ItemView> = group
                .items
                .iter()
                .map(|entry| {
                    let instance = ledger.get(&entry.item);
                    ItemView {
                        name: entry.item.canonical_name(),
                        display_name: entry.display_name.clone(),
                        price: instance.price,
                        inventory: instance.inventory,
                        selected: selection.is_selected(&entry.item),
                    }
                })
                .collect();
            let checked =
                !group.items.is_empty() && group.items.iter().all(|e| selection.is_selected(&e.item));
            GroupView {
                label: group.label.clone(),
                expanded: expansion.is_expanded(&group.label),
                checked,
                price_range: price_range_display(group, ledger),
                inventory_total: inventory_sum(group, ledger),
                items: item_views,
            }
        })
        .collect();

    let selected_count = selection.selected_count(items);
    MatrixView {
        flat: is_flat(items),
        groups: group_views,
        item_count: items.len(),
        selected_count,
        all_selected: !items.is_empty() && selected_count == items.len(),
        total_inventory: ledger.total_inventory(),
    }
}
