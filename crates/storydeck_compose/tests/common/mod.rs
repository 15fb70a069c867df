//! Scripted service doubles shared by the composition tests.
#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use storydeck_core::{Section, Storyline, StorylineBuilder};
use storydeck_error::{HttpError, StorydeckResult};
use storydeck_interface::{
    MarkdownEngine, RegenerationRequest, RegenerationResponse, RegenerationService, Rendered,
    SlideRequest, SlideResponse, SlideService, StorylineRepository, SuggestionRequest,
    SuggestionService,
};
use storydeck_normalize::normalize_section;
use storydeck_store::StorylineStore;

/// Regeneration service answering from a scripted queue.
pub struct ScriptedRegeneration {
    responses: Mutex<VecDeque<StorydeckResult<RegenerationResponse>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedRegeneration {
    pub fn new(responses: Vec<StorydeckResult<RegenerationResponse>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared call counter, usable after the service moves into an
    /// orchestrator.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl RegenerationService for ScriptedRegeneration {
    async fn regenerate(
        &self,
        _request: &RegenerationRequest,
    ) -> StorydeckResult<RegenerationResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::new("script exhausted").into()))
    }
}

/// Per-section slide behavior.
pub enum SlideScript {
    Slides(Vec<JsonValue>),
    Error(String),
    EmptySuccess,
    FailureFlag(String),
}

/// Slide service scripted per section id.
pub struct ScriptedSlides {
    scripts: HashMap<String, SlideScript>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedSlides {
    pub fn new(scripts: HashMap<String, SlideScript>) -> Self {
        Self {
            scripts,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared call counter.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl SlideService for ScriptedSlides {
    async fn generate_slides(&self, request: &SlideRequest) -> StorydeckResult<SlideResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.scripts.get(request.section().id().as_str()) {
            Some(SlideScript::Slides(slides)) => Ok(SlideResponse::with_slides(slides.clone())),
            Some(SlideScript::Error(message)) => Err(HttpError::new(message.clone()).into()),
            Some(SlideScript::EmptySuccess) => Ok(SlideResponse::with_slides(Vec::new())),
            Some(SlideScript::FailureFlag(message)) => Ok(SlideResponse::with_error(message.clone())),
            None => Ok(SlideResponse::with_slides(vec![
                serde_json::json!({"title": "Generated"}),
            ])),
        }
    }
}

/// Suggestion service returning one fixed payload.
pub struct ScriptedSuggestion {
    payload: JsonValue,
    calls: Arc<AtomicUsize>,
}

impl ScriptedSuggestion {
    pub fn new(payload: JsonValue) -> Self {
        Self {
            payload,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared call counter.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl SuggestionService for ScriptedSuggestion {
    async fn suggest_layout(&self, _request: &SuggestionRequest) -> StorydeckResult<JsonValue> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.payload.clone())
    }
}

/// Markdown engine double answering fixed HTML and chart payloads.
pub struct StaticMarkdown {
    pub html: String,
    pub charts: Vec<JsonValue>,
}

#[async_trait]
impl MarkdownEngine for StaticMarkdown {
    async fn render(&self, _markdown: &str) -> StorydeckResult<Rendered> {
        Ok(Rendered::new(self.html.clone(), self.charts.clone()))
    }
}

/// In-memory storyline repository.
#[derive(Default)]
pub struct MemoryRepository {
    saved: Mutex<HashMap<String, Storyline>>,
    next_id: AtomicUsize,
}

impl MemoryRepository {
    pub fn stored(&self, id: &str) -> Option<Storyline> {
        self.saved.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl StorylineRepository for MemoryRepository {
    async fn list_by_deliverable(&self, _deliverable_id: &str) -> StorydeckResult<Vec<Storyline>> {
        Ok(self.saved.lock().unwrap().values().cloned().collect())
    }

    async fn create(&self, storyline: &Storyline) -> StorydeckResult<String> {
        let id = format!("story-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.saved
            .lock()
            .unwrap()
            .insert(id.clone(), storyline.clone());
        Ok(id)
    }

    async fn update(&self, id: &str, storyline: &Storyline) -> StorydeckResult<()> {
        match self.saved.lock().unwrap().get_mut(id) {
            Some(slot) => {
                *slot = storyline.clone();
                Ok(())
            }
            None => Err(HttpError::new(format!("404: storyline {id} not found")).into()),
        }
    }
}

/// A persisted three-section storyline store; section ids s1, s2, s3.
pub fn saved_store(sections: Vec<Section>) -> StorylineStore {
    StorylineStore::new(
        StorylineBuilder::default()
            .id("story-1".to_string())
            .title("Nordic expansion")
            .sections(sections)
            .build()
            .unwrap(),
    )
}

/// An unsaved storyline store.
pub fn unsaved_store(sections: Vec<Section>) -> StorylineStore {
    StorylineStore::new(
        StorylineBuilder::default()
            .title("Unsaved draft")
            .sections(sections)
            .build()
            .unwrap(),
    )
}

/// Normalize a quick section fixture.
pub fn section(id: &str, title: &str, framework: Option<&str>) -> Section {
    normalize_section(
        &serde_json::json!({
            "id": id,
            "title": title,
            "description": format!("{title} description"),
            "framework": framework,
        }),
        0,
    )
}
