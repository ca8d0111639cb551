//! Selection and expansion state.
//!
//! Both are plain sets over stable keys: selection holds item identities
//! (never display names, which are only unique within a group), expansion
//! holds group labels. Stale selection entries are tolerated; they are
//! simply never displayed because views only consult the current items.

use rustc_hash::FxHashSet;

use crate::permutation::Item;

/// The set of selected items.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: FxHashSet<Item>,
}

impl SelectionState {
    pub fn new() -> Self {
        SelectionState::default()
    }

    pub fn is_selected(&self, item: &Item) -> bool {
        self.selected.contains(item)
    }

    /// Number of selected items among `items` (stale entries excluded).
    pub fn selected_count(&self, items: &[Item]) -> usize {
        items.iter().filter(|i| self.selected.contains(*i)).count()
    }

    /// Flips one item's membership.
    pub fn toggle_item(&mut self, item: &Item) {
        if !self.selected.remove(item) {
            self.selected.insert(item.clone());
        }
    }

    /// Group-level toggle with tri-state collapse: if ANY item in the
    /// group is selected, the whole group is deselected; otherwise every
    /// item in the group is selected.
    pub fn toggle_group(&mut self, group_items: &[Item]) {
        if group_items.is_empty() {
            return;
        }
        let any_selected = group_items.iter().any(|i| self.selected.contains(i));
        if any_selected {
            for item in group_items {
                self.selected.remove(item);
            }
        } else {
            for item in group_items {
                self.selected.insert(item.clone());
            }
        }
    }

    /// Selects exactly the given items, dropping any stale entries.
    pub fn select_all(&mut self, items: &[Item]) {
        self.selected = items.iter().cloned().collect();
    }

    pub fn unselect_all(&mut self) {
        self.selected.clear();
    }
}

/// The set of expanded group labels.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    expanded: FxHashSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        ExpansionState::default()
    }

    pub fn is_expanded(&self, label: &str) -> bool {
        self.expanded.contains(label)
    }

    /// Resets to "all groups expanded" for the given labels. Called
    /// whenever the grouping changes; the engine defaults to maximal
    /// visibility after a structural change.
    pub fn sync_to_groups(&mut self, labels: &[String]) {
        self.expanded = labels.iter().cloned().collect();
    }

    pub fn toggle(&mut self, label: &str) {
        if !self.expanded.remove(label) {
            self.expanded.insert(label.to_string());
        }
    }

    pub fn expand_all(&mut self, labels: &[String]) {
        self.sync_to_groups(labels);
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}
