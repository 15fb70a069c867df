//! Layout template definitions.

use derive_getters::Getters;
use serde::Serialize;
use storydeck_core::{LayoutId, StructuralType};

/// Role a structural slot plays within its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SlotRole {
    /// Main content column
    Primary,
    /// Supporting evidence column
    Supporting,
    /// One cell of a quadrant grid
    Quadrant,
    /// One node of a timeline or flow
    Step,
}

/// Metadata describing one structural slot of a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct SlotMetadata {
    /// Stable slot name used by the render tree
    name: &'static str,
    /// Role of the slot
    role: SlotRole,
}

impl SlotMetadata {
    pub(crate) const fn new(name: &'static str, role: SlotRole) -> Self {
        Self { name, role }
    }
}

/// One entry of the static layout catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct LayoutDefinition {
    /// Layout identifier
    id: LayoutId,
    /// Structural family
    structural_type: StructuralType,
    /// Number of structural slots the distributor fills
    slot_count: usize,
    /// Slot metadata in slot order
    slots: Vec<SlotMetadata>,
}

impl LayoutDefinition {
    pub(crate) fn new(
        id: LayoutId,
        structural_type: StructuralType,
        slots: Vec<SlotMetadata>,
    ) -> Self {
        Self {
            id,
            structural_type,
            slot_count: slots.len(),
            slots,
        }
    }
}
