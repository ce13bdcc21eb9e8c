//! Scene-side collaborators of the viewport: entity ids, name lookup, and
//! a flat in-memory registry.
//!
//! The full engine world lives elsewhere; the viewport only needs to turn
//! the selected [`EntityId`] into a label.

mod entity;
mod registry;

pub use entity::{EntityId, EntityLookup};
pub use registry::EntityRegistry;
