//! Trait definitions for Storydeck's external collaborators.
//!
//! The composition layer talks to every external service (regeneration,
//! slide generation, design suggestion, markdown rendering, storyline
//! persistence) through the traits defined here. Responses from the
//! generative services are deliberately loose (`serde_json::Value`); the
//! composition layer parses them defensively and treats them as untrusted.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{
    MarkdownEngine, RegenerationService, SlideService, StorylineRepository, SuggestionService,
};
pub use types::{
    LockedSummary, RegenerationRequest, RegenerationRequestBuilder, RegenerationResponse,
    Rendered, SlideRequest, SlideRequestBuilder, SlideResponse, SuggestionRequest,
    SuggestionRequestBuilder,
};
