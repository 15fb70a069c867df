//! Slide records.

use crate::LayoutId;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One rendered slide of a section's deck.
///
/// Produced by direct generation, or derived by heuristically splitting text
/// when no structured slide exists in the payload.
///
/// # Examples
///
/// ```
/// use storydeck_core::{LayoutId, SlideBuilder};
///
/// let slide = SlideBuilder::default()
///     .title("Market size")
///     .bullets(vec!["TAM $4.2B".to_string(), "CAGR 11%".to_string()])
///     .layout(LayoutId::FullWidth)
///     .build()
///     .unwrap();
/// assert_eq!(slide.bullets().len(), 2);
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into), default)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Slide title
    #[serde(default)]
    title: String,
    /// Optional subtitle line
    #[serde(default)]
    subtitle: String,
    /// Prose summary paragraph
    #[serde(default)]
    summary: String,
    /// Bullet list
    #[serde(default)]
    bullets: Vec<String>,
    /// Speaker notes
    #[serde(default)]
    notes: String,
    /// Layout this slide was generated for
    layout: LayoutId,
}

impl Default for Slide {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            summary: String::new(),
            bullets: Vec::new(),
            notes: String::new(),
            layout: LayoutId::FullWidth,
        }
    }
}
