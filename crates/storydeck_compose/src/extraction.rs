//! Utilities for extracting structured data from agent responses.
//!
//! Agent responses often arrive as JSON wrapped in markdown code blocks,
//! JSON-encoded strings, or payloads nested under `response`/`data` keys.
//! This module provides the defensive extraction the suggestion broker runs
//! before trusting anything in a response.

use serde_json::Value as JsonValue;

/// Extract JSON text from a response that may contain markdown or extra
/// prose.
///
/// Tries, in order: fenced ```json blocks, balanced braces, balanced
/// brackets. Returns `None` when nothing JSON-shaped is present, so callers
/// degrade rather than fail.
///
/// # Examples
///
/// ```
/// use storydeck_compose::extract_json;
///
/// let response = "Here you go:\n```json\n{\"layout\": \"timeline\"}\n```";
/// let json = extract_json(response).unwrap();
/// assert!(json.contains("timeline"));
///
/// assert!(extract_json("no structure here").is_none());
/// ```
pub fn extract_json(response: &str) -> Option<String> {
    if let Some(json) = extract_from_code_block(response, "json") {
        return Some(json);
    }

    let bracket_pos = response.find('[');
    let brace_pos = response.find('{');

    match (bracket_pos, brace_pos) {
        (Some(b), Some(c)) if b < c => extract_balanced(response, '[', ']')
            .or_else(|| extract_balanced(response, '{', '}')),
        (Some(_), None) => extract_balanced(response, '[', ']'),
        _ => extract_balanced(response, '{', '}')
            .or_else(|| extract_balanced(response, '[', ']')),
    }
}

/// Extract content from a fenced markdown code block.
fn extract_from_code_block(response: &str, language: &str) -> Option<String> {
    let pattern = format!("```{}", language);

    if let Some(start) = response.find(&pattern) {
        let content_start = start + pattern.len();
        if let Some(end) = response[content_start..].find("```") {
            return Some(response[content_start..content_start + end].trim().to_string());
        }
        // No closing fence, likely a truncated response.
        return Some(response[content_start..].trim().to_string());
    }

    None
}

/// Extract content between balanced delimiters, respecting strings.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + 1].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

/// Unwrap a suggestion payload to the object carrying the recommendation.
///
/// Handles the shapes agents actually produce: the recommendation object
/// itself, a JSON-encoded string (possibly fenced), and objects nesting the
/// recommendation under `response` or `data`. Descent stops as soon as a
/// layout hint is visible and is depth-limited.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use storydeck_compose::unwrap_payload;
///
/// let nested = json!({"response": {"layout": "grid-2x2"}});
/// assert_eq!(unwrap_payload(&nested)["layout"], "grid-2x2");
///
/// let encoded = json!("{\"layout\": \"timeline\"}");
/// assert_eq!(unwrap_payload(&encoded)["layout"], "timeline");
/// ```
pub fn unwrap_payload(raw: &JsonValue) -> JsonValue {
    let mut current = raw.clone();

    for _ in 0..4 {
        match &current {
            JsonValue::String(text) => {
                match extract_json(text).and_then(|json| serde_json::from_str(&json).ok()) {
                    Some(parsed) => current = parsed,
                    None => break,
                }
            }
            JsonValue::Object(map) => {
                if layout_hint(&current).is_some() {
                    break;
                }
                let nested = map.get("response").or_else(|| map.get("data"));
                match nested {
                    Some(inner) if inner.is_object() || inner.is_string() => {
                        current = inner.clone();
                    }
                    _ => break,
                }
            }
            _ => break,
        }
    }

    current
}

/// Pull a free-text layout reference out of a suggestion payload.
///
/// Checks the known key spellings, then a nested `recommendation` object.
/// The result still needs catalog canonicalization.
pub fn layout_hint(payload: &JsonValue) -> Option<String> {
    const KEYS: [&str; 5] = [
        "layout",
        "layoutId",
        "layout_id",
        "recommendedLayout",
        "recommended_layout",
    ];

    let map = payload.as_object()?;

    for key in KEYS {
        if let Some(text) = map.get(key).and_then(JsonValue::as_str) {
            let text = text.trim();
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }

    match map.get("recommendation") {
        Some(JsonValue::String(text)) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Some(nested @ JsonValue::Object(_)) => layout_hint(nested),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extract_json_from_code_block() {
        let response = "Sure!\n```json\n{\"layout\": \"flow\"}\n```\nHope this helps.";
        assert_eq!(extract_json(response).unwrap(), "{\"layout\": \"flow\"}");
    }

    #[test]
    fn extract_json_balanced_with_string_escapes() {
        let response = r#"Answer: {"reason": "said \"grid\"", "layout": "grid-2x2"}"#;
        let json = extract_json(response).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.ends_with('}'));
        assert!(json.contains("grid-2x2"));
    }

    #[test]
    fn extract_json_prefers_leading_array() {
        let response = "[{\"a\": 1}] and then {\"b\": 2}";
        assert!(extract_json(response).unwrap().starts_with('['));
    }

    #[test]
    fn unwrap_descends_nested_strings_and_objects() {
        let raw = json!({"response": "```json\n{\"layout\": \"timeline\", \"reason\": \"r\"}\n```"});
        let payload = unwrap_payload(&raw);
        assert_eq!(payload["layout"], "timeline");
    }

    #[test]
    fn unwrap_stops_at_first_layout_hint() {
        let raw = json!({"layout": "flow", "data": {"layout": "grid-2x2"}});
        assert_eq!(unwrap_payload(&raw)["layout"], "flow");
    }

    #[test]
    fn layout_hint_reads_recommendation_objects() {
        let payload = json!({"recommendation": {"layout": "bcg matrix"}});
        assert_eq!(layout_hint(&payload).unwrap(), "bcg matrix");
        assert_eq!(layout_hint(&json!({"other": 1})), None);
    }
}
