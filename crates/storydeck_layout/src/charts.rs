//! Chart selection across candidate locations.

use serde_json::Value as JsonValue;
use storydeck_core::{Chart, Section};
use storydeck_normalize::normalize_chart;

/// Select the charts to render for a section.
///
/// Scans the candidate locations in order (the canonical chart list, the
/// layout preview's enriched payload, then the preview's raw response) and
/// uses the first non-empty parseable list. Charts without an extractable
/// configuration are dropped by normalization, never rendered broken.
pub fn select_charts(section: &Section) -> Vec<Chart> {
    let canonical: Vec<Chart> = section
        .charts()
        .iter()
        .filter(|chart| chart.config().is_object())
        .cloned()
        .collect();
    if !canonical.is_empty() {
        return canonical;
    }

    if let Some(preview) = section.layout_preview() {
        if let Some(data) = preview.data() {
            let from_data = charts_in(data);
            if !from_data.is_empty() {
                return from_data;
            }
        }
        let from_raw = charts_in(preview.raw());
        if !from_raw.is_empty() {
            tracing::debug!(section = %section.id(), "Using charts from raw suggestion payload");
            return from_raw;
        }
    }

    Vec::new()
}

/// Parse a `charts` array nested in a loose payload.
fn charts_in(payload: &JsonValue) -> Vec<Chart> {
    payload
        .get("charts")
        .and_then(JsonValue::as_array)
        .map(|items| {
            items
                .iter()
                .enumerate()
                .filter_map(|(i, item)| normalize_chart(item, i))
                .collect()
        })
        .unwrap_or_default()
}
