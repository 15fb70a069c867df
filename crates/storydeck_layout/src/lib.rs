//! Layout catalog and content distribution for Storydeck.
//!
//! This crate owns the static registry of visual layout templates, the
//! framework-to-layout compatibility matrix, free-text layout id
//! canonicalization, and the distributor that allocates a section's content
//! into a layout's structural slots.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod charts;
mod definition;
mod distribute;
mod render;

pub use catalog::{
    definition, is_known_framework, list_layouts, normalize_layout_id, recommended_layout,
    supported_layouts, validate_selection,
};
pub use charts::select_charts;
pub use definition::{LayoutDefinition, SlotMetadata, SlotRole};
pub use distribute::render;
pub use render::{Header, RenderItem, RenderTree, Slot};
