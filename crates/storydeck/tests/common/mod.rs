//! Minimal service doubles for the facade acceptance tests.
#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use storydeck::{
    HttpError, RegenerationRequest, RegenerationResponse, RegenerationService, Section,
    SlideRequest, SlideResponse, SlideService, StorydeckResult, StorylineBuilder, StorylineStore,
    SuggestionRequest, SuggestionService, normalize_section,
};

/// Regeneration double that replaces every draft section it receives.
pub struct EchoRegeneration {
    /// Replacement payloads keyed by section id.
    pub replacements: HashMap<String, JsonValue>,
}

#[async_trait]
impl RegenerationService for EchoRegeneration {
    async fn regenerate(
        &self,
        request: &RegenerationRequest,
    ) -> StorydeckResult<RegenerationResponse> {
        let sections = request
            .draft_sections()
            .iter()
            .filter_map(|section| self.replacements.get(section.id().as_str()).cloned())
            .collect();
        Ok(RegenerationResponse::with_sections(sections))
    }
}

/// Slide double that fails for the listed section ids and answers a
/// one-slide deck for everything else.
pub struct FlakySlides {
    pub failing: Vec<String>,
}

#[async_trait]
impl SlideService for FlakySlides {
    async fn generate_slides(&self, request: &SlideRequest) -> StorydeckResult<SlideResponse> {
        if self.failing.contains(request.section().id()) {
            return Err(HttpError::new("synthetic section failure").into());
        }
        Ok(SlideResponse::with_slides(vec![serde_json::json!({
            "title": format!("{} deck", request.section().title()),
            "bullets": ["generated"],
        })]))
    }
}

/// Suggestion double returning one fixed payload and counting calls.
pub struct CountingSuggestion {
    pub payload: JsonValue,
    pub calls: Arc<AtomicUsize>,
}

#[async_trait]
impl SuggestionService for CountingSuggestion {
    async fn suggest_layout(&self, _request: &SuggestionRequest) -> StorydeckResult<JsonValue> {
        self.calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(self.payload.clone())
    }
}

/// A persisted storyline store over the given sections.
pub fn saved_store(sections: Vec<Section>) -> StorylineStore {
    StorylineStore::new(
        StorylineBuilder::default()
            .id("story-1".to_string())
            .title("Acceptance storyline")
            .sections(sections)
            .build()
            .unwrap(),
    )
}

/// Quick normalized section fixture.
pub fn section(id: &str, framework: Option<&str>) -> Section {
    normalize_section(
        &serde_json::json!({
            "id": id,
            "title": format!("Section {id}"),
            "description": format!("Description for {id}"),
            "framework": framework,
        }),
        0,
    )
}
