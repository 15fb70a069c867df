//! Chart records with opaque rendering configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A chart extracted from rendered section content.
///
/// The `config` payload belongs to the chart renderer and is never
/// interpreted here; a chart without an object-shaped config is unusable and
/// is dropped during normalization.
///
/// # Examples
///
/// ```
/// use storydeck_core::ChartBuilder;
/// use serde_json::json;
///
/// let chart = ChartBuilder::default()
///     .id("chart-1")
///     .title("Market share")
///     .config(json!({"type": "bar"}))
///     .build()
///     .unwrap();
/// assert!(chart.config().is_object());
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into), default)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    /// Stable chart identifier
    id: String,
    /// Display title
    #[serde(default)]
    title: String,
    /// Caption shown under the rendered chart
    #[serde(default)]
    caption: String,
    /// Data source attribution
    #[serde(default)]
    source: String,
    /// Opaque renderer configuration
    config: JsonValue,
    /// Free-form metadata attached by the producing agent
    #[serde(default)]
    attributes: JsonValue,
}

impl Default for Chart {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            caption: String::new(),
            source: String::new(),
            config: JsonValue::Object(serde_json::Map::new()),
            attributes: JsonValue::Null,
        }
    }
}
