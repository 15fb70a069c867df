//! Loose JSON access helpers shared by the normalizers.

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

/// First value present under any of the candidate keys.
pub(crate) fn first_value<'a>(raw: &'a JsonValue, keys: &[&str]) -> Option<&'a JsonValue> {
    let map = raw.as_object()?;
    keys.iter()
        .find_map(|key| map.get(*key))
        .filter(|v| !v.is_null())
}

/// First non-empty string readable under any of the candidate keys.
///
/// Accepts plain strings, numbers, and objects carrying a text-ish field.
pub(crate) fn first_string(raw: &JsonValue, keys: &[&str]) -> Option<String> {
    first_value(raw, keys)
        .and_then(text_of)
        .filter(|s| !s.is_empty())
}

/// Best-effort text content of a single value.
pub(crate) fn text_of(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.trim().to_string()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Object(map) => ["text", "title", "label", "content", "body"]
            .iter()
            .find_map(|key| map.get(*key))
            .and_then(text_of),
        _ => None,
    }
}

/// Read a list of strings from an array of strings/objects, or by splitting
/// a single string on bullet boundaries.
pub(crate) fn string_list(value: &JsonValue) -> Vec<String> {
    match value {
        JsonValue::Array(items) => items
            .iter()
            .filter_map(text_of)
            .filter(|s| !s.is_empty())
            .collect(),
        JsonValue::String(s) => crate::heuristics::split_fragments(s),
        _ => Vec::new(),
    }
}

/// Boolean under any of the candidate keys; accepts bools, 0/1, and
/// "true"/"false" strings.
pub(crate) fn bool_at(raw: &JsonValue, keys: &[&str]) -> Option<bool> {
    match first_value(raw, keys)? {
        JsonValue::Bool(b) => Some(*b),
        JsonValue::Number(n) => n.as_i64().map(|n| n != 0),
        JsonValue::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// RFC 3339 timestamp under any of the candidate keys.
pub(crate) fn timestamp_at(raw: &JsonValue, keys: &[&str]) -> Option<DateTime<Utc>> {
    first_value(raw, keys)?
        .as_str()
        .and_then(|s| s.parse::<DateTime<Utc>>().ok())
}
