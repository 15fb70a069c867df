//! AI design suggestion brokering.

use crate::extraction::{layout_hint, unwrap_payload};
use chrono::Utc;
use derive_getters::Getters;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use storydeck_core::{LayoutId, LayoutPreview, LayoutPreviewBuilder, Section, SectionPatchBuilder};
use storydeck_error::{
    StoreError, StoreErrorKind, StorydeckResult, SuggestionError, SuggestionErrorKind,
};
use storydeck_interface::{SuggestionRequestBuilder, SuggestionService};
use storydeck_layout::{definition, is_known_framework, normalize_layout_id};
use storydeck_store::{SectionCommand, StorylineStore};

/// Per-section state of the suggestion broker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SuggestionState {
    /// No request made
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// A preview is cached
    Success,
    /// The last request failed or the section is ineligible
    Error,
}

/// Whether a section qualifies for a design suggestion.
///
/// Only framework-tagged sections with a compatibility row are eligible;
/// everything else resolves to an error with no network call.
pub fn eligible_for_suggestion(section: &Section) -> bool {
    section
        .framework()
        .as_deref()
        .is_some_and(is_known_framework)
}

/// Result of a suggestion request.
#[derive(Debug, Clone, Getters)]
pub struct SuggestionOutcome {
    /// Section the suggestion belongs to
    section_id: String,
    /// Canonicalized recommended layout
    layout: LayoutId,
    /// The preview written to (or read from) the section
    preview: LayoutPreview,
    /// Layout the agent asked to activate, if it requested selection
    select_layout: Option<LayoutId>,
    /// Whether the outcome was served from the cache without a service call
    from_cache: bool,
}

/// Brokers cached layout recommendations from the design agent.
///
/// Cache-first: an existing preview from the same agent identity whose
/// layout the catalog still knows short-circuits without a duplicate call.
/// Fresh responses are parsed defensively and written non-destructively;
/// promotion into live section fields happens only through
/// [`apply_suggestion`](SuggestionBroker::apply_suggestion).
pub struct SuggestionBroker<S: SuggestionService> {
    service: S,
    states: HashMap<String, SuggestionState>,
}

impl<S: SuggestionService> SuggestionBroker<S> {
    /// Create a broker over a suggestion service.
    pub fn new(service: S) -> Self {
        Self {
            service,
            states: HashMap::new(),
        }
    }

    /// Current state for a section.
    pub fn state(&self, section_id: &str) -> SuggestionState {
        self.states.get(section_id).copied().unwrap_or_default()
    }

    fn set_state(&mut self, section_id: &str, state: SuggestionState) {
        tracing::debug!(section = %section_id, state = %state, "Suggestion state transition");
        self.states.insert(section_id.to_string(), state);
    }

    /// Request a layout suggestion for one section.
    ///
    /// # Errors
    ///
    /// - `SectionNotFound` when the id is unknown
    /// - `IneligibleSection` when the framework predicate rejects it (no
    ///   network call is made)
    /// - `AlreadyLoading` when a request for the section is in flight
    /// - `StaleResponse` when the section's identity changed while waiting
    /// - the service error, unretried, when the call fails
    #[tracing::instrument(skip(self, store, project_context), fields(section = %section_id, agent = %agent_id))]
    pub async fn request_suggestion(
        &mut self,
        store: &mut StorylineStore,
        section_id: &str,
        agent_id: &str,
        project_context: &str,
    ) -> StorydeckResult<SuggestionOutcome> {
        let Some(section) = store.section(section_id).cloned() else {
            return Err(StoreError::new(StoreErrorKind::SectionNotFound(
                section_id.to_string(),
            ))
            .into());
        };

        if !eligible_for_suggestion(&section) {
            self.set_state(section_id, SuggestionState::Error);
            return Err(SuggestionError::new(SuggestionErrorKind::IneligibleSection(
                section_id.to_string(),
            ))
            .into());
        }

        if let Some(cached) = section.layout_preview() {
            let identity_matches = cached.agent_id() == agent_id;
            let layout_still_known = definition(*cached.layout()).is_some();
            if identity_matches && layout_still_known {
                tracing::debug!(section = %section_id, "Serving cached layout preview");
                self.set_state(section_id, SuggestionState::Success);
                return Ok(SuggestionOutcome {
                    section_id: section_id.to_string(),
                    layout: *cached.layout(),
                    preview: cached.clone(),
                    select_layout: None,
                    from_cache: true,
                });
            }
            tracing::debug!(
                section = %section_id,
                cached_agent = %cached.agent_id(),
                "Cached preview no longer matches request context, recomputing"
            );
        }

        if self.state(section_id) == SuggestionState::Loading {
            return Err(SuggestionError::new(SuggestionErrorKind::AlreadyLoading(
                section_id.to_string(),
            ))
            .into());
        }

        self.set_state(section_id, SuggestionState::Loading);
        let identity = section.framework().clone();

        let request = SuggestionRequestBuilder::default()
            .section(section.clone())
            .storyline_title(store.storyline().title().clone())
            .project_context(project_context)
            .agent_id(agent_id)
            .build()
            .expect("all suggestion request fields set");

        let raw = match self.service.suggest_layout(&request).await {
            Ok(raw) => raw,
            Err(e) => {
                self.set_state(section_id, SuggestionState::Error);
                return Err(e);
            }
        };

        // Stale-response guard: the section may have been removed or
        // repurposed while the request was in flight.
        let still_current = store
            .section(section_id)
            .is_some_and(|current| current.framework() == &identity);
        if !still_current {
            self.set_state(section_id, SuggestionState::Error);
            return Err(SuggestionError::new(SuggestionErrorKind::StaleResponse(
                section_id.to_string(),
            ))
            .into());
        }

        let outcome = self.absorb_response(store, section_id, agent_id, &section, raw)?;
        self.set_state(section_id, SuggestionState::Success);
        Ok(outcome)
    }

    /// Parse a fresh response and write the merged preview to the store.
    fn absorb_response(
        &mut self,
        store: &mut StorylineStore,
        section_id: &str,
        agent_id: &str,
        section: &Section,
        raw: JsonValue,
    ) -> StorydeckResult<SuggestionOutcome> {
        let payload = unwrap_payload(&raw);

        let layout = layout_hint(&payload)
            .and_then(|text| normalize_layout_id(&text))
            .unwrap_or_else(|| {
                tracing::warn!(
                    section = %section_id,
                    "No recognizable layout in suggestion, defaulting to full-width"
                );
                LayoutId::FullWidth
            });

        let fresh = LayoutPreviewBuilder::default()
            .layout(layout)
            .agent_id(agent_id)
            .reason(string_field(&payload, &["reason", "rationale", "why"]))
            .layout_name(string_field(&payload, &["layoutName", "layout_name", "name"]))
            .design_guidelines(string_items(
                &payload,
                &["designGuidelines", "design_guidelines", "guidelines"],
            ))
            .data(data_field(&payload))
            .raw(raw)
            .build()
            .expect("all preview builder fields defaulted");

        // Non-destructive write: keep richer fields from any existing
        // preview unless the fresh suggestion replaces them.
        let preview = match section.layout_preview() {
            Some(existing) => existing.absorb(fresh),
            None => fresh,
        };

        let select_layout = payload
            .get("applyLayout")
            .or_else(|| payload.get("apply_layout"))
            .or_else(|| payload.get("updateLayout"))
            .and_then(JsonValue::as_bool)
            .unwrap_or(false)
            .then_some(layout);

        store.apply(SectionCommand::SetPreview {
            id: section_id.to_string(),
            preview: Some(preview.clone()),
        })?;

        Ok(SuggestionOutcome {
            section_id: section_id.to_string(),
            layout,
            preview,
            select_layout,
            from_cache: false,
        })
    }

    /// Promote a cached preview's content into the live section fields.
    ///
    /// Refuses unless the section's currently-selected layout equals the
    /// preview's recommended layout: a suggestion computed for one layout
    /// choice is never silently applied to another.
    ///
    /// # Errors
    ///
    /// - `SectionNotFound` when the id is unknown
    /// - `MissingPreview` when no preview is cached
    /// - `LayoutMismatch` when the selected layout differs from the
    ///   preview's recommendation
    /// - `MalformedResponse` when the preview carries no content payload
    #[tracing::instrument(skip(self, store), fields(section = %section_id))]
    pub fn apply_suggestion(
        &mut self,
        store: &mut StorylineStore,
        section_id: &str,
    ) -> StorydeckResult<()> {
        let Some(section) = store.section(section_id).cloned() else {
            return Err(StoreError::new(StoreErrorKind::SectionNotFound(
                section_id.to_string(),
            ))
            .into());
        };

        let Some(preview) = section.layout_preview().clone() else {
            return Err(SuggestionError::new(SuggestionErrorKind::MissingPreview(
                section_id.to_string(),
            ))
            .into());
        };

        if *section.layout() != Some(*preview.layout()) {
            return Err(SuggestionError::new(SuggestionErrorKind::LayoutMismatch {
                selected: (*section.layout())
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| "none".to_string()),
                recommended: preview.layout().to_string(),
            })
            .into());
        }

        let Some(data) = preview.data() else {
            return Err(SuggestionError::new(SuggestionErrorKind::MalformedResponse(
                "layout preview carries no content payload".to_string(),
            ))
            .into());
        };

        let enriched = storydeck_normalize::normalize_section(data, *section.order());

        let mut patch = SectionPatchBuilder::default();
        if !enriched.description().trim().is_empty() {
            patch.description(enriched.description().clone());
        }
        if !enriched.markdown().trim().is_empty() {
            patch.markdown(enriched.markdown().clone());
        }
        if !enriched.html().trim().is_empty() {
            patch.html(enriched.html().clone());
        }
        if !enriched.key_points().is_empty() {
            patch.key_points(enriched.key_points().clone());
        }
        if !enriched.content_blocks().is_empty() {
            patch.content_blocks(enriched.content_blocks().clone());
        }
        if !enriched.charts().is_empty() {
            patch.charts(enriched.charts().clone());
        }

        store.apply(SectionCommand::UpdateSection {
            id: section_id.to_string(),
            patch: patch.build().expect("all patch fields defaulted"),
        })?;

        let mut applied = preview;
        applied.mark_applied(Utc::now());
        store.apply(SectionCommand::SetPreview {
            id: section_id.to_string(),
            preview: Some(applied),
        })?;

        tracing::info!(section = %section_id, "Applied layout suggestion");
        Ok(())
    }
}

/// First non-empty string under the candidate keys.
fn string_field(payload: &JsonValue, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| payload.get(*key))
        .filter_map(JsonValue::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// First array of strings under the candidate keys.
fn string_items(payload: &JsonValue, keys: &[&str]) -> Vec<String> {
    keys.iter()
        .filter_map(|key| payload.get(*key))
        .filter_map(JsonValue::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(JsonValue::as_str)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
        })
        .find(|items| !items.is_empty())
        .unwrap_or_default()
}

/// The richer alternate section payload, when the agent supplied one.
fn data_field(payload: &JsonValue) -> Option<JsonValue> {
    ["data", "section", "content"]
        .iter()
        .filter_map(|key| payload.get(*key))
        .find(|v| v.is_object())
        .cloned()
}
