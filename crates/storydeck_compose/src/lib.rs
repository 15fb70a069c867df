//! Composition layer for Storydeck: storyline regeneration, per-section
//! slide generation, and AI design suggestions.
//!
//! Each orchestrator reads sections from the state store, calls one external
//! service, and writes results back under documented merge rules. Locked
//! sections always win over service output, per-section slide failures never
//! abort their cohort, and suggestion responses are parsed defensively as
//! untrusted input.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod markdown;
mod persist;
mod regenerate;
mod slides;
mod suggest;

pub use extraction::{extract_json, layout_hint, unwrap_payload};
pub use markdown::hydrate_markdown;
pub use persist::{load_storylines, save_storyline};
pub use regenerate::{RegenerationOrchestrator, RegenerationOutcome, RegenerationPhase};
pub use slides::{SlideCoordinator, SlideFailure, SlideGenerationReport, needs_slides};
pub use suggest::{SuggestionBroker, SuggestionOutcome, SuggestionState, eligible_for_suggestion};
