//! Named mutation commands applied to the storyline store.

use storydeck_core::{LayoutId, LayoutPreview, Section, SectionPatch};

/// One named mutation of the section list.
///
/// Commands replace ad-hoc callback mutation: every consumer describes the
/// change it wants and the store owns applying it while maintaining the
/// order and lock invariants.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionCommand {
    /// Merge a patch into one section and stamp its update time
    UpdateSection {
        /// Target section id
        id: String,
        /// Fields to merge
        patch: SectionPatch,
    },
    /// Lock or unlock one section, forcing its status accordingly
    ToggleLock {
        /// Target section id
        id: String,
        /// New lock state
        locked: bool,
    },
    /// Remove one section and reindex the remainder contiguously
    RemoveSection {
        /// Target section id
        id: String,
    },
    /// Select a layout for one section
    ApplyLayout {
        /// Target section id
        id: String,
        /// Layout to select
        layout: LayoutId,
    },
    /// Replace or clear one section's cached layout suggestion
    SetPreview {
        /// Target section id
        id: String,
        /// New preview, or `None` to clear
        preview: Option<LayoutPreview>,
    },
    /// Replace the entire section list, reindexing order
    SetSections(Vec<Section>),
}

impl SectionCommand {
    /// Section id this command addresses, if it addresses one.
    pub fn target(&self) -> Option<&str> {
        match self {
            SectionCommand::UpdateSection { id, .. }
            | SectionCommand::ToggleLock { id, .. }
            | SectionCommand::RemoveSection { id }
            | SectionCommand::ApplyLayout { id, .. }
            | SectionCommand::SetPreview { id, .. } => Some(id),
            SectionCommand::SetSections(_) => None,
        }
    }

    /// Short command name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            SectionCommand::UpdateSection { .. } => "UpdateSection",
            SectionCommand::ToggleLock { .. } => "ToggleLock",
            SectionCommand::RemoveSection { .. } => "RemoveSection",
            SectionCommand::ApplyLayout { .. } => "ApplyLayout",
            SectionCommand::SetPreview { .. } => "SetPreview",
            SectionCommand::SetSections(_) => "SetSections",
        }
    }
}
