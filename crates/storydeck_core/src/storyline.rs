//! Storyline records.

use crate::Section;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a storyline.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StorylineStatus {
    /// Being assembled or edited
    #[default]
    Draft,
    /// A generation pass is writing into the storyline
    Generating,
    /// All sections generated and reviewed
    Ready,
}

/// The ordered collection of sections for one deliverable's narrative.
///
/// `id` is `None` until the storyline has been persisted; regeneration
/// refuses to run against an unsaved storyline.
///
/// # Examples
///
/// ```
/// use storydeck_core::{SectionBuilder, StorylineBuilder};
///
/// let storyline = StorylineBuilder::default()
///     .title("Entering the Nordic market")
///     .sections(vec![SectionBuilder::default().id("s1").build().unwrap()])
///     .build()
///     .unwrap();
/// assert!(storyline.id().is_none());
/// assert_eq!(storyline.sections().len(), 1);
/// ```
#[derive(
    Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into), default)]
#[serde(rename_all = "camelCase")]
pub struct Storyline {
    /// Persistence identifier; `None` until first saved
    #[serde(default)]
    id: Option<String>,
    /// Deliverable title
    #[serde(default)]
    title: String,
    /// Lifecycle status
    #[serde(default)]
    status: StorylineStatus,
    /// Ordered sections
    #[serde(default)]
    sections: Vec<Section>,
    /// Executive summary paragraph
    #[serde(default)]
    executive_summary: String,
    /// Narrative flow description
    #[serde(default)]
    presentation_flow: String,
    /// Closing call to action
    #[serde(default)]
    call_to_action: String,
}

impl Storyline {
    /// Record the persistence identifier after a save.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Mutable access to the section list.
    ///
    /// Intended for the state store, which owns invariant maintenance;
    /// callers going through this directly are responsible for keeping
    /// `order` contiguous.
    pub fn sections_mut(&mut self) -> &mut Vec<Section> {
        &mut self.sections
    }

    /// Set the lifecycle status.
    pub fn set_status(&mut self, status: StorylineStatus) {
        self.status = status;
    }

    /// Look up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == id)
    }

    /// One-paragraph brief used as context for per-section service calls.
    pub fn brief(&self) -> String {
        if self.executive_summary.trim().is_empty() {
            self.title.clone()
        } else {
            format!("{}: {}", self.title, self.executive_summary)
        }
    }
}
