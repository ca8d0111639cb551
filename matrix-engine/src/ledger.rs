//! Instance ledger: per-item price and inventory.
//!
//! The ledger maps item identity to user-entered business data. Because
//! item identity is derived from value content, renaming a value orphans
//! the old instances and creates fresh zero-valued ones for the new
//! combinations; reconciliation makes that explicit by pruning stale
//! entries and inserting defaults, so the ledger's key set is always
//! exactly the derived item set.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::permutation::Item;

/// Price and inventory for one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub price: f64,
    pub inventory: u32,
}

impl Default for Instance {
    fn default() -> Self {
        Instance {
            price: 0.0,
            inventory: 0,
        }
    }
}

/// Mutable store of instances, keyed by item identity.
#[derive(Debug, Clone, Default)]
pub struct InstanceLedger {
    instances: FxHashMap<Item, Instance>,
}

impl InstanceLedger {
    pub fn new() -> Self {
        InstanceLedger::default()
    }

    /// Aligns the ledger's key set with the current derived items:
    /// inserts a zero-valued instance for each new item and prunes
    /// instances whose item no longer exists. Idempotent.
    pub fn reconcile(&mut self, items: &[Item]) {
        let current: FxHashSet<&Item> = items.iter().collect();
        let before = self.instances.len();
        self.instances.retain(|item, _| current.contains(item));
        let pruned = before - self.instances.len();

        let mut added = 0usize;
        for item in items {
            self.instances.entry(item.clone()).or_insert_with(|| {
                added += 1;
                Instance::default()
            });
        }

        if added > 0 || pruned > 0 {
            log::debug!(
                "ledger reconciled: {} added, {} pruned, {} total",
                added,
                pruned,
                self.instances.len()
            );
        }
    }

    /// Returns the instance for an item, or a zero-valued default if the
    /// item is not in the ledger.
    pub fn get(&self, item: &Item) -> Instance {
        self.instances.get(item).copied().unwrap_or_default()
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.instances.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Sets an item's price from raw input text. Unknown items no-op.
    pub fn set_price(&mut self, item: &Item, raw: &str) {
        if let Some(instance) = self.instances.get_mut(item) {
            instance.price = parse_price(raw);
        }
    }

    /// Sets an item's inventory from raw input text. Unknown items no-op.
    pub fn set_inventory(&mut self, item: &Item, raw: &str) {
        if let Some(instance) = self.instances.get_mut(item) {
            instance.inventory = parse_inventory(raw);
        }
    }

    /// Bulk-sets the price for every item that has a component equal to
    /// `axis_value` (normally the label of a group). Matching is by value
    /// text alone, so equal value texts on different axes all match; the
    /// UI treats that as acceptable.
    pub fn set_group_price(&mut self, axis_value: &str, raw: &str) {
        let price = parse_price(raw);
        for (item, instance) in self.instances.iter_mut() {
            if item.has_value(axis_value) {
                instance.price = price;
            }
        }
    }

    /// Sum of inventory across every instance. The ledger always mirrors
    /// the full derived item set, so this is the overall total, not just
    /// the displayed/filtered items.
    pub fn total_inventory(&self) -> u64 {
        self.instances.values().map(|i| i.inventory as u64).sum()
    }
}

/// Parses raw price text. Empty, unparsable, negative, or non-finite
/// input all degrade to 0 so the UI always shows a valid number.
fn parse_price(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
        .unwrap_or(0.0)
}

/// Parses raw inventory text with the same fallback-to-0 policy.
/// Negative input fails the unsigned parse and degrades to 0.
fn parse_inventory(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutation::generate_items;
    use axis_store::AxisStore;

    fn items_for(axes: &[(&str, &[&str])]) -> Vec<Item> {
        let mut store = AxisStore::new();
        for (name, values) in axes {
            let id = store.add_axis();
            store.rename_axis(id, name);
            for value in *values {
                let slot = store.axis(id).unwrap().values.last().unwrap().id;
                store.update_value(id, slot, value);
            }
        }
        generate_items(store.axes())
    }

    fn find<'a>(items: &'a [Item], name: &str) -> &'a Item {
        items.iter().find(|i| i.canonical_name() == name).unwrap()
    }

    #[test]
    fn test_reconcile_inserts_defaults_and_prunes() {
        let mut ledger = InstanceLedger::new();
        let items = items_for(&[("Size", &["S", "M"]), ("Color", &["Red"])]);
        ledger.reconcile(&items);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get(find(&items, "S / Red")), Instance::default());

        // Value rename: new derived set, old keys must disappear.
        let renamed = items_for(&[("Size", &["S", "M"]), ("Color", &["Blue"])]);
        ledger.reconcile(&renamed);
        assert_eq!(ledger.len(), 2);
        assert!(!ledger.contains(find(&items, "S / Red")));
        assert!(ledger.contains(find(&renamed, "S / Blue")));
    }

    #[test]
    fn test_reconcile_idempotent() {
        let mut ledger = InstanceLedger::new();
        let items = items_for(&[("Size", &["S", "M"])]);
        ledger.reconcile(&items);
        ledger.set_price(find(&items, "S"), "9.99");

        let snapshot = ledger.clone();
        ledger.reconcile(&items);
        assert_eq!(ledger.len(), snapshot.len());
        assert_eq!(
            ledger.get(find(&items, "S")),
            snapshot.get(find(&items, "S"))
        );
    }

    #[test]
    fn test_reconcile_preserves_surviving_data() {
        let mut ledger = InstanceLedger::new();
        let items = items_for(&[("Size", &["S"])]);
        ledger.reconcile(&items);
        ledger.set_price(find(&items, "S"), "5.50");
        ledger.set_inventory(find(&items, "S"), "3");

        let grown = items_for(&[("Size", &["S", "M"])]);
        ledger.reconcile(&grown);
        assert_eq!(ledger.get(find(&grown, "S")).price, 5.50);
        assert_eq!(ledger.get(find(&grown, "S")).inventory, 3);
        assert_eq!(ledger.get(find(&grown, "M")), Instance::default());
    }

    #[test]
    fn test_parse_fallbacks() {
        let mut ledger = InstanceLedger::new();
        let items = items_for(&[("Size", &["S"])]);
        ledger.reconcile(&items);
        let s = find(&items, "S");

        ledger.set_price(s, "9.99");
        assert_eq!(ledger.get(s).price, 9.99);
        ledger.set_price(s, "");
        assert_eq!(ledger.get(s).price, 0.0);
        ledger.set_price(s, "abc");
        assert_eq!(ledger.get(s).price, 0.0);
        ledger.set_price(s, "-4");
        assert_eq!(ledger.get(s).price, 0.0);

        ledger.set_inventory(s, "12");
        assert_eq!(ledger.get(s).inventory, 12);
        ledger.set_inventory(s, "-3");
        assert_eq!(ledger.get(s).inventory, 0);
        ledger.set_inventory(s, "lots");
        assert_eq!(ledger.get(s).inventory, 0);
    }

    #[test]
    fn test_set_group_price_matches_component() {
        let mut ledger = InstanceLedger::new();
        let items = items_for(&[("Size", &["S", "M"]), ("Color", &["Red", "Blue"])]);
        ledger.reconcile(&items);

        ledger.set_group_price("Red", "7.00");
        assert_eq!(ledger.get(find(&items, "S / Red")).price, 7.00);
        assert_eq!(ledger.get(find(&items, "M / Red")).price, 7.00);
        assert_eq!(ledger.get(find(&items, "S / Blue")).price, 0.0);
    }

    #[test]
    fn test_set_price_unknown_item_no_ops() {
        let mut ledger = InstanceLedger::new();
        let items = items_for(&[("Size", &["S"])]);
        ledger.reconcile(&items);

        let stale = items_for(&[("Size", &["XL"])]);
        ledger.set_price(&stale[0], "9.99");
        assert_eq!(ledger.len(), 1);
        assert!(!ledger.contains(&stale[0]));
    }

    #[test]
    fn test_total_inventory() {
        let mut ledger = InstanceLedger::new();
        let items = items_for(&[("Size", &["S", "M", "L"])]);
        ledger.reconcile(&items);
        ledger.set_inventory(find(&items, "S"), "2");
        ledger.set_inventory(find(&items, "L"), "5");
        assert_eq!(ledger.total_inventory(), 7);
    }
}
