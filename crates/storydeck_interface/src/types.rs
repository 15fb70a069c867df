//! Request and response types for the external services.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use storydeck_core::{LayoutId, Section};

/// Context summary of a locked section sent alongside a regeneration
/// request.
///
/// Locked sections are never regenerated; the service still needs them to
/// keep the replacement drafts narratively coherent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct LockedSummary {
    /// Locked section id
    id: String,
    /// Locked section title
    title: String,
    /// One-paragraph content summary
    summary: String,
}

impl LockedSummary {
    /// Summarize a locked section for regeneration context.
    pub fn from_section(section: &Section) -> Self {
        let summary = if !section.description().trim().is_empty() {
            section.description().clone()
        } else {
            section.key_points().join("; ")
        };
        Self {
            id: section.id().clone(),
            title: section.title().clone(),
            summary,
        }
    }
}

/// Request sent to the regeneration service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct RegenerationRequest {
    /// Persisted storyline id; transient storylines are never regenerated
    storyline_id: String,
    /// Draft sections to replace
    draft_sections: Vec<Section>,
    /// Locked-section context the service must not rewrite
    #[builder(default)]
    locked_context: Vec<LockedSummary>,
}

/// Response from the regeneration service.
///
/// Sections arrive as loose values and are canonicalized before merging.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct RegenerationResponse {
    /// Replacement draft sections, loosely shaped
    #[serde(default)]
    sections: Vec<JsonValue>,
    /// Error detail, surfaced verbatim to the caller when present
    #[serde(default)]
    error: Option<String>,
}

impl RegenerationResponse {
    /// Build a successful response from loose section payloads.
    pub fn with_sections(sections: Vec<JsonValue>) -> Self {
        Self {
            sections,
            error: None,
        }
    }

    /// Build a failed response carrying service error detail.
    pub fn with_error(detail: impl Into<String>) -> Self {
        Self {
            sections: Vec::new(),
            error: Some(detail.into()),
        }
    }
}

/// Request sent to the slide generation service for one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct SlideRequest {
    /// The section to generate a deck for
    section: Section,
    /// One-paragraph storyline brief for narrative context
    storyline_summary: String,
    /// Layout the slides should target
    layout: LayoutId,
}

/// Response from the slide generation service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct SlideResponse {
    /// Generated slides, loosely shaped
    #[serde(default)]
    slides: Vec<JsonValue>,
    /// Whether the service claims success; an empty deck overrides this
    #[serde(default)]
    success: bool,
    /// Error detail for failed generations
    #[serde(default)]
    error: Option<String>,
}

impl SlideResponse {
    /// Build a successful response from loose slide payloads.
    pub fn with_slides(slides: Vec<JsonValue>) -> Self {
        Self {
            slides,
            success: true,
            error: None,
        }
    }

    /// Build a failed response carrying service error detail.
    pub fn with_error(detail: impl Into<String>) -> Self {
        Self {
            slides: Vec::new(),
            success: false,
            error: Some(detail.into()),
        }
    }
}

/// Request sent to the design suggestion service for one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    /// The section to recommend a layout for
    section: Section,
    /// Storyline title for narrative context
    storyline_title: String,
    /// Project context passed through to the agent
    #[builder(default)]
    project_context: String,
    /// Identity of the design agent answering the request
    agent_id: String,
}

/// Output of the markdown/chart extraction collaborator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Rendered {
    /// Rendered HTML
    #[serde(default)]
    html: String,
    /// Charts extracted during rendering, loosely shaped
    #[serde(default)]
    charts: Vec<JsonValue>,
}

impl Rendered {
    /// Build a rendered result.
    pub fn new(html: impl Into<String>, charts: Vec<JsonValue>) -> Self {
        Self {
            html: html.into(),
            charts,
        }
    }
}
