//! Heuristic extraction of fragments from unstructured legacy text.
//!
//! This stage is deliberately separated from the canonical model so it can be
//! swapped or removed without touching the record types: everything here
//! takes plain text in and returns plain fragments out.

use regex::Regex;
use std::sync::LazyLock;

static BULLET_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-*•]\s+|\d+[.)]\s+)").expect("static bullet pattern"));

/// Split unstructured text into presentation fragments.
///
/// Paragraphs separated by blank lines win; a single paragraph falls back to
/// line splitting. Bullet markers (`-`, `*`, `•`) and numbered prefixes are
/// stripped, empty fragments dropped.
///
/// # Examples
///
/// ```
/// use storydeck_normalize::heuristics::split_fragments;
///
/// let fragments = split_fragments("- first point\n- second point");
/// assert_eq!(fragments, vec!["first point", "second point"]);
///
/// let paragraphs = split_fragments("Intro paragraph.\n\nDetail paragraph.");
/// assert_eq!(paragraphs.len(), 2);
/// ```
pub fn split_fragments(text: &str) -> Vec<String> {
    let paragraphs: Vec<&str> = text
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let pieces: Vec<&str> = if paragraphs.len() > 1 {
        paragraphs
    } else {
        text.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
    };

    pieces
        .into_iter()
        .map(strip_marker)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Strip a leading bullet marker or numbered prefix from one fragment.
fn strip_marker(line: &str) -> String {
    BULLET_PREFIX.replace(line, "").trim().to_string()
}
