//! Section records and the section patch applied by the state store.

use crate::{Chart, ContentBlock, LayoutId, LayoutPreview, Slide};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a section.
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
pub enum SectionStatus {
    /// Editable, regeneration-eligible
    #[default]
    Draft,
    /// Locked content, excluded from regeneration
    Final,
    /// A long-running operation is writing into this section
    Loading,
}

/// One addressable unit of a storyline, eventually rendered as one or more
/// slides.
///
/// Invariants maintained by the state store:
/// - `order` values across a storyline are unique and contiguous `0..n-1`
/// - a locked section is never mutated by automated regeneration; only an
///   explicit unlock changes `locked`
#[derive(
    Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into), default)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Stable section identifier
    id: String,
    /// Section title
    #[serde(default)]
    title: String,
    /// Short prose description
    #[serde(default)]
    description: String,
    /// Source markdown, if the content agent supplied any
    #[serde(default)]
    markdown: String,
    /// Framework-rendered HTML from the markdown engine
    #[serde(default)]
    html: String,
    /// Charts extracted from rendered content
    #[serde(default)]
    charts: Vec<Chart>,
    /// Key points in presentation order
    #[serde(default)]
    key_points: Vec<String>,
    /// Structured content blocks
    #[serde(default)]
    content_blocks: Vec<ContentBlock>,
    /// Generated slide deck, empty until slide generation runs
    #[serde(default)]
    slides: Vec<Slide>,
    /// Currently selected layout, if any
    #[serde(default)]
    layout: Option<LayoutId>,
    /// Cached AI layout suggestion
    #[serde(default)]
    layout_preview: Option<LayoutPreview>,
    /// Whether the section is protected from automated regeneration
    #[serde(default)]
    locked: bool,
    /// When the section was locked
    #[serde(default)]
    locked_at: Option<DateTime<Utc>>,
    /// Lifecycle status
    #[serde(default)]
    status: SectionStatus,
    /// Domain framework tag driving layout compatibility
    #[serde(default)]
    framework: Option<String>,
    /// Position within the storyline
    #[serde(default)]
    order: usize,
    /// Last mutation timestamp
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl Section {
    /// Whether the section carries structured content beyond plain prose.
    pub fn has_structured_content(&self) -> bool {
        !self.key_points.is_empty() || !self.content_blocks.is_empty()
    }

    /// Lock the section, forcing `status = Final` and stamping `locked_at`.
    pub fn lock(&mut self, at: DateTime<Utc>) {
        self.locked = true;
        self.locked_at = Some(at);
        self.status = SectionStatus::Final;
    }

    /// Unlock the section, forcing `status = Draft` and clearing `locked_at`.
    pub fn unlock(&mut self) {
        self.locked = false;
        self.locked_at = None;
        self.status = SectionStatus::Draft;
    }

    /// Set the section's position within the storyline.
    pub fn set_order(&mut self, order: usize) {
        self.order = order;
    }

    /// Select a layout for this section.
    pub fn set_layout(&mut self, layout: Option<LayoutId>) {
        self.layout = layout;
    }

    /// Replace the cached layout suggestion.
    pub fn set_preview(&mut self, preview: Option<LayoutPreview>) {
        self.layout_preview = preview;
    }

    /// Replace the generated slide deck.
    pub fn set_slides(&mut self, slides: Vec<Slide>) {
        self.slides = slides;
    }

    /// Set the lifecycle status.
    pub fn set_status(&mut self, status: SectionStatus) {
        self.status = status;
    }

    /// Stamp the last-mutation timestamp.
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }

    /// Merge a patch into this section and stamp `updated_at`.
    ///
    /// Lock state and `order` are deliberately outside the patch surface:
    /// they change only through their dedicated commands.
    pub fn apply_patch(&mut self, patch: &SectionPatch, at: DateTime<Utc>) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(markdown) = &patch.markdown {
            self.markdown = markdown.clone();
        }
        if let Some(html) = &patch.html {
            self.html = html.clone();
        }
        if let Some(charts) = &patch.charts {
            self.charts = charts.clone();
        }
        if let Some(key_points) = &patch.key_points {
            self.key_points = key_points.clone();
        }
        if let Some(content_blocks) = &patch.content_blocks {
            self.content_blocks = content_blocks.clone();
        }
        if let Some(slides) = &patch.slides {
            self.slides = slides.clone();
        }
        if let Some(layout) = patch.layout {
            self.layout = Some(layout);
        }
        if let Some(framework) = &patch.framework {
            self.framework = Some(framework.clone());
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = Some(at);
    }
}

/// A partial update merged into a section by the state store.
///
/// Every field is optional; absent fields leave the section untouched.
///
/// # Examples
///
/// ```
/// use storydeck_core::SectionPatchBuilder;
///
/// let patch = SectionPatchBuilder::default()
///     .title("Market sizing")
///     .key_points(vec!["TAM $4.2B".to_string()])
///     .build()
///     .unwrap();
/// assert!(!patch.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into, strip_option), default)]
#[serde(rename_all = "camelCase")]
pub struct SectionPatch {
    /// Replacement title
    pub title: Option<String>,
    /// Replacement description
    pub description: Option<String>,
    /// Replacement markdown
    pub markdown: Option<String>,
    /// Replacement rendered HTML
    pub html: Option<String>,
    /// Replacement chart list
    pub charts: Option<Vec<Chart>>,
    /// Replacement key points
    pub key_points: Option<Vec<String>>,
    /// Replacement content blocks
    pub content_blocks: Option<Vec<ContentBlock>>,
    /// Replacement slide deck
    pub slides: Option<Vec<Slide>>,
    /// Replacement layout selection
    pub layout: Option<LayoutId>,
    /// Replacement framework tag
    pub framework: Option<String>,
    /// Replacement status
    pub status: Option<SectionStatus>,
}

impl SectionPatch {
    /// Whether the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self == &SectionPatch::default()
    }
}
