//! Chart payload canonicalization.

use crate::value::{first_string, first_value};
use serde_json::Value as JsonValue;
use storydeck_core::{Chart, ChartBuilder};

/// Canonicalize one raw chart payload.
///
/// Returns `None`, with a warning, when no object-shaped configuration can
/// be extracted: a chart the renderer cannot draw is dropped rather than
/// rendered broken.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use storydeck_normalize::normalize_chart;
///
/// let chart = normalize_chart(&json!({"name": "Share", "spec": {"type": "pie"}}), 0);
/// assert!(chart.is_some());
///
/// assert!(normalize_chart(&json!({"name": "No config"}), 0).is_none());
/// ```
pub fn normalize_chart(raw: &JsonValue, index: usize) -> Option<Chart> {
    let config = extract_config(raw)?;

    let chart = ChartBuilder::default()
        .id(first_string(raw, &["id", "chartId", "chart_id"])
            .unwrap_or_else(|| format!("chart-{}", index + 1)))
        .title(first_string(raw, &["title", "name"]).unwrap_or_default())
        .caption(first_string(raw, &["caption", "subtitle"]).unwrap_or_default())
        .source(first_string(raw, &["source", "attribution"]).unwrap_or_default())
        .config(config)
        .attributes(
            first_value(raw, &["attributes", "meta", "metadata"])
                .cloned()
                .unwrap_or(JsonValue::Null),
        )
        .build()
        .expect("all chart builder fields defaulted");

    Some(chart)
}

/// Pull the first object-shaped configuration out of the candidate keys.
///
/// A JSON-encoded string config is tolerated and decoded.
fn extract_config(raw: &JsonValue) -> Option<JsonValue> {
    let candidate = first_value(raw, &["config", "chartConfig", "chart_config", "spec", "options"]);

    let config = match candidate {
        Some(JsonValue::Object(map)) => Some(JsonValue::Object(map.clone())),
        Some(JsonValue::String(s)) => serde_json::from_str::<JsonValue>(s)
            .ok()
            .filter(JsonValue::is_object),
        _ => None,
    };

    if config.is_none() {
        tracing::warn!(
            chart = %first_string(raw, &["id", "title", "name"]).unwrap_or_else(|| "<unnamed>".into()),
            "Dropping chart without extractable configuration"
        );
    }
    config
}
