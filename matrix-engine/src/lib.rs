//! Variant matrix subsystem.
//!
//! This crate derives everything the variant UI displays from the axis
//! model in `axis-store`: the combinatorial item set, per-item business
//! data, grouping with aggregates, and selection/expansion state. It
//! depends on `axis-store` only for the source-of-truth model.
//!
//! Layers:
//! - `permutation`: Item identity and the cartesian product (WHAT exists)
//! - `ledger`: Per-item price/inventory storage (WHAT the user entered)
//! - `grouping`: Partitioning and per-group aggregates (HOW we bucket)
//! - `state`: Selection and expansion sets (WHAT the user has toggled)
//! - `view`: Renderable output for the frontend (WHAT we display)
//! - `matrix`: The facade wiring the recompute pipeline (HOW it stays consistent)

pub mod grouping;
pub mod ledger;
pub mod matrix;
pub mod permutation;
pub mod state;
pub mod view;

pub use grouping::{
    group_items, inventory_sum, is_flat, price_range_display, Group, GroupedItem, ALL_GROUP,
};
pub use ledger::{Instance, InstanceLedger};
pub use matrix::VariantMatrix;
pub use permutation::{generate_items, Item, ItemPart, NAME_SEPARATOR};
pub use state::{ExpansionState, SelectionState};
pub use view::{build_view, GroupView, ItemView, MatrixView};
