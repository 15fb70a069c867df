//! Slide payload canonicalization.

use crate::heuristics::split_fragments;
use crate::value::{first_string, first_value, string_list, text_of};
use serde_json::Value as JsonValue;
use std::str::FromStr;
use storydeck_core::{LayoutId, Slide, SlideBuilder};

/// Canonicalize one raw slide payload.
///
/// Strings are split heuristically into bullets, arrays become bullet lists,
/// and objects are read through the usual key aliases. The slide's layout
/// falls back to `fallback_layout` when the payload names none or names one
/// the catalog does not know.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use storydeck_core::LayoutId;
/// use storydeck_normalize::normalize_slide;
///
/// let slide = normalize_slide(
///     &json!({"heading": "Growth", "points": ["+11% CAGR"]}),
///     0,
///     LayoutId::FullWidth,
/// );
/// assert_eq!(slide.title(), "Growth");
/// assert_eq!(*slide.layout(), LayoutId::FullWidth);
/// ```
pub fn normalize_slide(raw: &JsonValue, index: usize, fallback_layout: LayoutId) -> Slide {
    let default_title = format!("Slide {}", index + 1);

    let builder = match raw {
        JsonValue::Object(_) => {
            let layout = first_string(raw, &["layout", "layoutId", "layout_id"])
                .and_then(|s| LayoutId::from_str(s.trim()).ok())
                .unwrap_or(fallback_layout);
            let mut b = SlideBuilder::default();
            b.title(first_string(raw, &["title", "heading", "name"]).unwrap_or(default_title))
                .subtitle(first_string(raw, &["subtitle", "subheading"]).unwrap_or_default())
                .summary(
                    first_string(raw, &["summary", "description", "content"]).unwrap_or_default(),
                )
                .bullets(
                    first_value(raw, &["bullets", "points", "keyPoints", "key_points"])
                        .map(string_list)
                        .unwrap_or_default(),
                )
                .notes(
                    first_string(raw, &["notes", "speakerNotes", "speaker_notes"])
                        .unwrap_or_default(),
                )
                .layout(layout);
            b
        }
        JsonValue::String(text) => {
            let mut b = SlideBuilder::default();
            b.title(default_title)
                .summary(text.trim())
                .bullets(split_fragments(text))
                .layout(fallback_layout);
            b
        }
        JsonValue::Array(items) => {
            let mut b = SlideBuilder::default();
            b.title(default_title)
                .bullets(
                    items
                        .iter()
                        .filter_map(text_of)
                        .filter(|s| !s.is_empty())
                        .collect::<Vec<_>>(),
                )
                .layout(fallback_layout);
            b
        }
        _ => {
            tracing::debug!(?raw, index, "Unrecognized slide shape, using defaults");
            let mut b = SlideBuilder::default();
            b.title(default_title).layout(fallback_layout);
            b
        }
    };

    builder.build().expect("all slide builder fields defaulted")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_slide_resolves_aliases() {
        let raw = json!({
            "name": "Summary",
            "subheading": "Q3",
            "content": "Revenue grew.",
            "speakerNotes": "pause here",
        });
        let slide = normalize_slide(&raw, 0, LayoutId::FullWidth);
        assert_eq!(slide.title(), "Summary");
        assert_eq!(slide.subtitle(), "Q3");
        assert_eq!(slide.summary(), "Revenue grew.");
        assert_eq!(slide.notes(), "pause here");
    }

    #[test]
    fn string_slide_splits_into_bullets() {
        let slide = normalize_slide(&json!("- one\n- two"), 1, LayoutId::Timeline);
        assert_eq!(slide.title(), "Slide 2");
        assert_eq!(slide.bullets(), &vec!["one".to_string(), "two".to_string()]);
        assert_eq!(*slide.layout(), LayoutId::Timeline);
    }

    #[test]
    fn unknown_layout_string_falls_back() {
        let raw = json!({"title": "T", "layout": "hexagon"});
        let slide = normalize_slide(&raw, 0, LayoutId::Grid2x2);
        assert_eq!(*slide.layout(), LayoutId::Grid2x2);
    }
}
