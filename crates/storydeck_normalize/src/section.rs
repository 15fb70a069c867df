//! Section payload canonicalization.

use crate::chart::normalize_chart;
use crate::slide::normalize_slide;
use crate::value::{bool_at, first_string, first_value, string_list, text_of, timestamp_at};
use serde_json::Value as JsonValue;
use std::str::FromStr;
use storydeck_core::{
    ContentBlock, ContentBlockBuilder, LayoutId, LayoutPreview, Section, SectionBuilder,
    SectionStatus,
};

/// Canonicalize one raw section payload.
///
/// Accepts strings, arrays, or objects with inconsistent key names and always
/// returns a fully-populated record with deterministic defaults. Normalizing
/// an already-canonical section again yields an identical record.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use storydeck_normalize::normalize_section;
///
/// let section = normalize_section(&json!("Just a paragraph of prose."), 2);
/// assert_eq!(section.id(), "section-3");
/// assert_eq!(section.title(), "Section 3");
/// assert_eq!(section.description(), "Just a paragraph of prose.");
/// ```
pub fn normalize_section(raw: &JsonValue, index: usize) -> Section {
    match raw {
        JsonValue::Object(_) => from_object(raw, index),
        JsonValue::String(text) => {
            let mut b = defaults(index);
            b.description(text.trim());
            b.build().expect("all section builder fields defaulted")
        }
        JsonValue::Array(items) => {
            let mut b = defaults(index);
            b.key_points(
                items
                    .iter()
                    .filter_map(text_of)
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>(),
            );
            b.build().expect("all section builder fields defaulted")
        }
        _ => {
            tracing::debug!(?raw, index, "Unrecognized section shape, using defaults");
            defaults(index)
                .build()
                .expect("all section builder fields defaulted")
        }
    }
}

/// Builder seeded with the deterministic positional defaults.
fn defaults(index: usize) -> SectionBuilder {
    let mut b = SectionBuilder::default();
    b.id(format!("section-{}", index + 1))
        .title(format!("Section {}", index + 1))
        .order(index);
    b
}

fn from_object(raw: &JsonValue, index: usize) -> Section {
    let layout = first_string(raw, &["layout", "layoutId", "layout_id"])
        .and_then(|s| LayoutId::from_str(s.trim()).ok());
    let fallback_layout = layout.unwrap_or(LayoutId::FullWidth);

    let locked = bool_at(raw, &["locked", "isLocked", "is_locked"]).unwrap_or(false);
    let status = first_string(raw, &["status"])
        .and_then(|s| SectionStatus::from_str(&s.trim().to_ascii_lowercase()).ok())
        .unwrap_or(if locked {
            SectionStatus::Final
        } else {
            SectionStatus::Draft
        });

    let slides: Vec<_> = first_value(raw, &["slides", "deck"])
        .and_then(JsonValue::as_array)
        .map(|items| {
            items
                .iter()
                .enumerate()
                .map(|(i, item)| normalize_slide(item, i, fallback_layout))
                .collect()
        })
        .unwrap_or_default();

    let charts: Vec<_> = first_value(raw, &["charts", "visuals", "figures"])
        .and_then(JsonValue::as_array)
        .map(|items| {
            items
                .iter()
                .enumerate()
                .filter_map(|(i, item)| normalize_chart(item, i))
                .collect()
        })
        .unwrap_or_default();

    let content_blocks: Vec<_> = first_value(raw, &["contentBlocks", "content_blocks", "blocks"])
        .and_then(JsonValue::as_array)
        .map(|items| items.iter().filter_map(normalize_block).collect())
        .unwrap_or_default();

    let layout_preview: Option<LayoutPreview> =
        first_value(raw, &["layoutPreview", "layout_preview"]).and_then(|v| {
            serde_json::from_value(v.clone())
                .map_err(|e| {
                    tracing::debug!(error = %e, "Ignoring unreadable layout preview");
                    e
                })
                .ok()
        });

    let mut b = SectionBuilder::default();
    b.id(first_string(raw, &["id", "sectionId", "section_id", "uuid", "key"])
        .unwrap_or_else(|| format!("section-{}", index + 1)))
        .title(
            first_string(raw, &["title", "name", "heading"])
                .unwrap_or_else(|| format!("Section {}", index + 1)),
        )
        .description(first_string(raw, &["description", "summary", "content"]).unwrap_or_default())
        .markdown(first_string(raw, &["markdown", "md", "body"]).unwrap_or_default())
        .html(first_string(raw, &["html", "rendered", "renderedHtml"]).unwrap_or_default())
        .charts(charts)
        .key_points(
            first_value(raw, &["keyPoints", "key_points", "bullets", "points"])
                .map(string_list)
                .unwrap_or_default(),
        )
        .content_blocks(content_blocks)
        .slides(slides)
        .layout(layout)
        .layout_preview(layout_preview)
        .locked(locked)
        .locked_at(timestamp_at(raw, &["lockedAt", "locked_at"]))
        .status(status)
        .framework(first_string(
            raw,
            &["framework", "frameworkType", "framework_type"],
        ))
        .order(
            first_value(raw, &["order", "position", "index"])
                .and_then(JsonValue::as_u64)
                .map(|n| n as usize)
                .unwrap_or(index),
        )
        .updated_at(timestamp_at(raw, &["updatedAt", "updated_at"]));

    b.build().expect("all section builder fields defaulted")
}

/// Canonicalize one content block item.
fn normalize_block(raw: &JsonValue) -> Option<ContentBlock> {
    let (heading, body, emphasis) = match raw {
        JsonValue::Object(_) => {
            let heading = first_string(raw, &["heading", "title"]).unwrap_or_default();
            let body = first_string(raw, &["body", "text", "content", "description"])
                .or_else(|| text_of(raw))
                .unwrap_or_default();
            let emphasis = bool_at(raw, &["emphasis", "highlight", "isKey"]).unwrap_or(false);
            (heading, body, emphasis)
        }
        JsonValue::String(s) => (String::new(), s.trim().to_string(), false),
        _ => return None,
    };

    if heading.is_empty() && body.is_empty() {
        return None;
    }

    Some(
        ContentBlockBuilder::default()
            .heading(heading)
            .body(body)
            .emphasis(emphasis)
            .build()
            .expect("all block builder fields defaulted"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_key_aliases() {
        let raw = json!({
            "sectionId": "s7",
            "name": "Competitive landscape",
            "summary": "Crowded midmarket.",
            "points": ["Five incumbents", "Two entrants"],
            "frameworkType": "competitive_landscape",
        });
        let section = normalize_section(&raw, 0);
        assert_eq!(section.id(), "s7");
        assert_eq!(section.title(), "Competitive landscape");
        assert_eq!(section.description(), "Crowded midmarket.");
        assert_eq!(section.key_points().len(), 2);
        assert_eq!(section.framework().as_deref(), Some("competitive_landscape"));
    }

    #[test]
    fn locked_without_status_becomes_final() {
        let section = normalize_section(&json!({"id": "s1", "locked": "true"}), 0);
        assert!(*section.locked());
        assert_eq!(*section.status(), SectionStatus::Final);
    }

    #[test]
    fn key_points_split_from_single_string() {
        let raw = json!({"bullets": "- one\n- two\n- three"});
        let section = normalize_section(&raw, 0);
        assert_eq!(section.key_points().len(), 3);
    }

    #[test]
    fn unusable_charts_are_dropped() {
        let raw = json!({
            "charts": [
                {"id": "good", "config": {"type": "bar"}},
                {"id": "bad"},
            ]
        });
        let section = normalize_section(&raw, 0);
        assert_eq!(section.charts().len(), 1);
        assert_eq!(section.charts()[0].id(), "good");
    }

    #[test]
    fn normalization_is_idempotent() {
        let raw = json!({
            "id": "s1",
            "title": "Market sizing",
            "description": "How big is the prize",
            "keyPoints": ["TAM $4.2B", "SAM $800M"],
            "contentBlocks": [{"heading": "Note", "body": "Bottom-up build", "emphasis": true}],
            "slides": [{"title": "Sizing", "bullets": ["TAM"], "layout": "full-width"}],
            "charts": [{"id": "c1", "title": "Funnel", "config": {"type": "funnel"}}],
            "layout": "title-2-columns",
            "locked": true,
            "status": "final",
            "framework": "market_sizing",
            "order": 3,
        });
        let once = normalize_section(&raw, 3);
        let serialized = serde_json::to_value(&once).unwrap();
        let twice = normalize_section(&serialized, 3);
        assert_eq!(once, twice);
    }

    #[test]
    fn array_payload_becomes_key_points() {
        let section = normalize_section(&json!(["alpha", {"label": "beta"}]), 1);
        assert_eq!(section.key_points(), &vec!["alpha".to_string(), "beta".to_string()]);
        assert_eq!(section.id(), "section-2");
    }
}
