//! Storydeck: storyline section lifecycle and layout composition for
//! AI-generated presentations.
//!
//! This facade re-exports the full public API of the Storydeck workspace:
//!
//! - [`normalize_section`]/[`normalize_slide`] canonicalize the loosely-typed
//!   payloads the content agent returns
//! - the layout catalog validates and recommends layouts per section, and
//!   [`render`] distributes content into a layout's structural slots
//! - [`StorylineStore`] owns the live section list behind a named-command
//!   reducer
//! - [`RegenerationOrchestrator`], [`SlideCoordinator`], and
//!   [`SuggestionBroker`] drive the three external AI services under the
//!   documented merge rules
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use storydeck::{
//!     LayoutId, SectionCommand, StorylineBuilder, StorylineStore, normalize_section, render,
//! };
//!
//! let section = normalize_section(
//!     &json!({"id": "s1", "title": "Sizing", "points": ["TAM $4.2B"]}),
//!     0,
//! );
//! let mut store = StorylineStore::new(
//!     StorylineBuilder::default()
//!         .title("Market entry")
//!         .sections(vec![section])
//!         .build()
//!         .unwrap(),
//! );
//!
//! store
//!     .apply(SectionCommand::ApplyLayout {
//!         id: "s1".to_string(),
//!         layout: LayoutId::TitleTwoColumns,
//!     })
//!     .unwrap();
//!
//! let tree = render(store.section("s1").unwrap(), LayoutId::TitleTwoColumns);
//! assert_eq!(tree.slots().len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use storydeck_compose::{
    RegenerationOrchestrator, RegenerationOutcome, RegenerationPhase, SlideCoordinator,
    SlideFailure, SlideGenerationReport, SuggestionBroker, SuggestionOutcome, SuggestionState,
    eligible_for_suggestion, extract_json, hydrate_markdown, layout_hint, load_storylines,
    needs_slides, save_storyline, unwrap_payload,
};
pub use storydeck_core::{
    Chart, ChartBuilder, ContentBlock, ContentBlockBuilder, LayoutId, LayoutPreview,
    LayoutPreviewBuilder, Section, SectionBuilder, SectionPatch, SectionPatchBuilder,
    SectionStatus, Slide, SlideBuilder, Storyline, StorylineBuilder, StorylineStatus,
    StructuralType, init_telemetry,
};
pub use storydeck_error::{
    HttpError, JsonError, LayoutError, LayoutErrorKind, RegenerationError, RegenerationErrorKind,
    RetryableError, SlideError, SlideErrorKind, StoreError, StoreErrorKind, StorydeckError,
    StorydeckErrorKind, StorydeckResult, SuggestionError, SuggestionErrorKind,
};
pub use storydeck_interface::{
    LockedSummary, MarkdownEngine, RegenerationRequest, RegenerationRequestBuilder,
    RegenerationResponse, RegenerationService, Rendered, SlideRequest, SlideRequestBuilder,
    SlideResponse, SlideService, StorylineRepository, SuggestionRequest,
    SuggestionRequestBuilder, SuggestionService,
};
pub use storydeck_layout::{
    Header, LayoutDefinition, RenderItem, RenderTree, Slot, SlotMetadata, SlotRole, definition,
    is_known_framework, list_layouts, normalize_layout_id, recommended_layout, render,
    select_charts, supported_layouts, validate_selection,
};
pub use storydeck_normalize::{heuristics, normalize_chart, normalize_section, normalize_slide};
pub use storydeck_rate_limit::{RetryPolicy, RetryPolicyBuilder, run_with_backoff};
pub use storydeck_store::{SectionCommand, StorylineStore};
