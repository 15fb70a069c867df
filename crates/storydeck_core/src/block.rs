//! Canonical content block records.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One structured block of section content.
///
/// Canonical form of the loosely-shaped `contentBlocks` items delivered by
/// the content agent.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into), default)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    /// Block heading, may be empty
    #[serde(default)]
    heading: String,
    /// Block body text
    #[serde(default)]
    body: String,
    /// Whether the producing agent flagged this block as a key insight
    #[serde(default)]
    emphasis: bool,
}
