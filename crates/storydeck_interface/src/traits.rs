//! Trait definitions for the external services.

use crate::{RegenerationRequest, RegenerationResponse, Rendered, SlideRequest, SlideResponse,
    SuggestionRequest};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use storydeck_core::Storyline;
use storydeck_error::StorydeckResult;

/// Service that regenerates draft sections of a storyline.
///
/// Receives the draft sections plus locked-section context and returns
/// replacement drafts. The caller owns merging and never lets a response
/// overwrite a locked section.
#[async_trait]
pub trait RegenerationService: Send + Sync {
    /// Regenerate the request's draft sections.
    async fn regenerate(
        &self,
        request: &RegenerationRequest,
    ) -> StorydeckResult<RegenerationResponse>;
}

/// Service that generates a slide deck for one section.
#[async_trait]
pub trait SlideService: Send + Sync {
    /// Generate slides for the request's section.
    async fn generate_slides(&self, request: &SlideRequest) -> StorydeckResult<SlideResponse>;
}

/// Service that recommends a layout (and optionally richer content) for one
/// section.
///
/// The response shape is deliberately untyped: agents answer with raw
/// objects, JSON-encoded strings, or payloads nested under `response`/`data`,
/// and the suggestion broker parses them defensively.
#[async_trait]
pub trait SuggestionService: Send + Sync {
    /// Request a layout recommendation.
    async fn suggest_layout(&self, request: &SuggestionRequest) -> StorydeckResult<JsonValue>;
}

/// Markdown/chart extraction collaborator, consumed as a black box.
///
/// The core never parses markdown itself.
#[async_trait]
pub trait MarkdownEngine: Send + Sync {
    /// Render markdown to HTML and extract embedded charts.
    async fn render(&self, markdown: &str) -> StorydeckResult<Rendered>;
}

/// Storyline persistence API, consumed as an opaque JSON resource.
///
/// Persistence itself is out of scope; the composition layer only needs the
/// fixed field contract below.
#[async_trait]
pub trait StorylineRepository: Send + Sync {
    /// List storylines belonging to one deliverable.
    async fn list_by_deliverable(&self, deliverable_id: &str) -> StorydeckResult<Vec<Storyline>>;

    /// Create a storyline, returning its persisted id.
    async fn create(&self, storyline: &Storyline) -> StorydeckResult<String>;

    /// Update a persisted storyline by id.
    async fn update(&self, id: &str, storyline: &Storyline) -> StorydeckResult<()>;
}
