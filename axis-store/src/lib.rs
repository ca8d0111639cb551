//! PURPOSE: Main library entry point for the axis model.
//! CONTEXT: The axis store is the single source of truth for the variant
//! matrix: an ordered list of named option axes, each with an ordered list
//! of values. Everything else (items, instances, grouping) is derived from
//! this state by the `matrix-engine` crate.

pub mod axis;
pub mod store;

// Re-export commonly used types at the crate root
pub use axis::{Axis, AxisId, AxisValue, ValueId};
pub use store::AxisStore;
