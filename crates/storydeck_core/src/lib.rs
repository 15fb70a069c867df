//! Core data types for the Storydeck storyline composition library.
//!
//! This crate provides the canonical data model shared by every Storydeck
//! interface: storylines, sections, slides, charts, layout identity, and the
//! cached AI layout suggestion. Every loosely-shaped external payload is
//! converted into these records by `storydeck_normalize` before any other
//! component sees it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod block;
mod chart;
mod layout;
mod preview;
mod section;
mod slide;
mod storyline;
mod telemetry;

pub use block::{ContentBlock, ContentBlockBuilder};
pub use chart::{Chart, ChartBuilder};
pub use layout::{LayoutId, StructuralType};
pub use preview::{LayoutPreview, LayoutPreviewBuilder};
pub use section::{Section, SectionBuilder, SectionPatch, SectionPatchBuilder, SectionStatus};
pub use slide::{Slide, SlideBuilder};
pub use storyline::{Storyline, StorylineBuilder, StorylineStatus};
pub use telemetry::init_telemetry;
