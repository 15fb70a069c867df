//! Cached AI layout suggestion records.

use crate::LayoutId;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A cached layout recommendation produced by the design agent.
///
/// Created by the suggestion broker and promoted into the live section
/// fields only by an explicit apply action. Cache identity is the agent id
/// plus the recommended layout; a preview is recomputed when either no
/// longer matches the request context.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into), default)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPreview {
    /// When the preview was promoted into the section, if ever
    #[serde(default)]
    applied_at: Option<DateTime<Utc>>,
    /// Recommended layout
    layout: LayoutId,
    /// Identity of the agent that produced the recommendation
    agent_id: String,
    /// Agent's stated reason for the recommendation
    #[serde(default)]
    reason: String,
    /// Human-readable layout name supplied by the agent
    #[serde(default)]
    layout_name: String,
    /// Design guidance lines accompanying the recommendation
    #[serde(default)]
    design_guidelines: Vec<String>,
    /// Richer alternate section payload, if the agent supplied one
    #[serde(default)]
    data: Option<JsonValue>,
    /// The raw response the preview was parsed from
    #[serde(default)]
    raw: JsonValue,
}

impl Default for LayoutPreview {
    fn default() -> Self {
        Self {
            applied_at: None,
            layout: LayoutId::FullWidth,
            agent_id: String::new(),
            reason: String::new(),
            layout_name: String::new(),
            design_guidelines: Vec::new(),
            data: None,
            raw: JsonValue::Null,
        }
    }
}

impl LayoutPreview {
    /// Merge a fresh suggestion over this preview without discarding detail.
    ///
    /// Layout and agent identity always come from the incoming preview since
    /// they define cache identity; descriptive fields are replaced only when
    /// the incoming preview supplies a non-empty value. `applied_at` is
    /// cleared: the merged preview has not been applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use storydeck_core::{LayoutId, LayoutPreviewBuilder};
    ///
    /// let cached = LayoutPreviewBuilder::default()
    ///     .agent_id("design-v1")
    ///     .layout(LayoutId::Grid2x2)
    ///     .reason("quadrant-shaped findings")
    ///     .build()
    ///     .unwrap();
    /// let fresh = LayoutPreviewBuilder::default()
    ///     .agent_id("design-v2")
    ///     .layout(LayoutId::Timeline)
    ///     .build()
    ///     .unwrap();
    ///
    /// let merged = cached.absorb(fresh);
    /// assert_eq!(merged.agent_id(), "design-v2");
    /// // The richer cached reason survives the empty incoming one.
    /// assert_eq!(merged.reason(), "quadrant-shaped findings");
    /// ```
    pub fn absorb(&self, incoming: LayoutPreview) -> LayoutPreview {
        let pick = |new: String, old: &str| {
            if new.trim().is_empty() {
                old.to_string()
            } else {
                new
            }
        };
        LayoutPreview {
            applied_at: None,
            layout: incoming.layout,
            agent_id: incoming.agent_id,
            reason: pick(incoming.reason, &self.reason),
            layout_name: pick(incoming.layout_name, &self.layout_name),
            design_guidelines: if incoming.design_guidelines.is_empty() {
                self.design_guidelines.clone()
            } else {
                incoming.design_guidelines
            },
            data: incoming.data.or_else(|| self.data.clone()),
            raw: if incoming.raw.is_null() {
                self.raw.clone()
            } else {
                incoming.raw
            },
        }
    }

    /// Stamp the moment this preview was promoted into the live section.
    pub fn mark_applied(&mut self, at: DateTime<Utc>) {
        self.applied_at = Some(at);
    }
}
