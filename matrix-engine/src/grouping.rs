//! Grouping: partitions items by a chosen axis and computes aggregates.
//!
//! Grouping never changes item identity. Each grouped entry keeps the
//! full `Item` alongside its group-relative display name, because display
//! names are only unique within a group and must never be used for
//! instance or selection lookups.

use rustc_hash::FxHashMap;

use crate::ledger::InstanceLedger;
use crate::permutation::{Item, NAME_SEPARATOR};
use serde::{Deserialize, Serialize};

/// Label of the single bucket used when no real grouping applies.
pub const ALL_GROUP: &str = "All";

/// One item as displayed inside a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedItem {
    /// The item's full identity, for instance/selection lookups.
    pub item: Item,
    /// Group-relative display name (the remaining parts, or the sole
    /// value in flat mode).
    pub display_name: String,
}

/// A grouping-axis value and the items that carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub label: String,
    pub items: Vec<GroupedItem>,
}

impl Group {
    fn all(items: Vec<GroupedItem>) -> Self {
        Group {
            label: ALL_GROUP.to_string(),
            items,
        }
    }
}

/// Whether the current item set is in flat mode: exactly one axis
/// contributes, so grouping is bypassed and each item displays as its
/// sole value.
pub fn is_flat(items: &[Item]) -> bool {
    items.first().map_or(false, |i| i.parts().len() == 1)
}

/// Partitions items by the value of the grouping axis.
///
/// Policy, in order:
/// 1. No items: single "All" group, empty.
/// 2. Exactly one contributing axis: flat mode, single "All" group, each
///    item displayed as its sole value.
/// 3. `group_by` unset or not present on the items: single "All" group
///    with unmodified display names.
/// 4. Otherwise partition by the matching part; within a group an item
///    displays as its remaining parts joined by " / " (or the group
///    label itself when no other axis contributes).
///
/// Groups appear in order of first appearance, which follows item order
/// and is therefore deterministic.
pub fn group_items(items: &[Item], group_by: Option<&str>) -> Vec<Group> {
    if items.is_empty() {
        return vec![Group::all(Vec::new())];
    }

    if is_flat(items) {
        let grouped = items
            .iter()
            .map(|item| GroupedItem {
                item: item.clone(),
                display_name: item.canonical_name(),
            })
            .collect();
        return vec![Group::all(grouped)];
    }

    let group_axis = group_by.filter(|name| items[0].value_for(name).is_some());
    let Some(group_axis) = group_axis else {
        let grouped = items
            .iter()
            .map(|item| GroupedItem {
                item: item.clone(),
                display_name: item.canonical_name(),
            })
            .collect();
        return vec![Group::all(grouped)];
    };

    let mut groups: Vec<Group> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    for item in items {
        let label = match item.value_for(group_axis) {
            Some(value) => value.to_string(),
            None => continue,
        };
        let rest: Vec<&str> = item
            .parts()
            .iter()
            .filter(|p| p.axis != group_axis)
            .map(|p| p.value.as_str())
            .collect();
        let display_name = if rest.is_empty() {
            label.clone()
        } else {
            rest.join(NAME_SEPARATOR)
        };

        let slot = *index.entry(label.clone()).or_insert_with(|| {
            groups.push(Group {
                label,
                items: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].items.push(GroupedItem {
            item: item.clone(),
            display_name,
        });
    }
    groups
}

/// Formats a group's price range for display.
///
/// Empty string when no item in the group has a positive price. A single
/// distinct price renders as that value; otherwise "min - max" over the
/// group's prices, zeros included (unpriced items show as 0.00 once any
/// sibling is priced).
pub fn price_range_display(group: &Group, ledger: &InstanceLedger) -> String {
    let prices: Vec<f64> = group
        .items
        .iter()
        .map(|entry| ledger.get(&entry.item).price)
        .collect();
    if !prices.iter().any(|p| *p > 0.0) {
        return String::new();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for price in &prices {
        min = min.min(*price);
        max = max.max(*price);
    }
    if (max - min).abs() < f64::EPSILON {
        format!("{:.2}", max)
    } else {
        format!("{:.2} - {:.2}", min, max)
    }
}

/// Sum of inventory across a group's items; items missing from the
/// ledger count as 0.
pub fn inventory_sum(group: &Group, ledger: &InstanceLedger) -> u64 {
    group
        .items
        .iter()
        .map(|entry| ledger.get(&entry.item).inventory as u64)
        .sum()
}
