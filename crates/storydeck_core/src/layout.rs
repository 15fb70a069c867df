//! Layout identity and structural classification.

use serde::{Deserialize, Serialize};

/// Identifier of a visual layout template.
///
/// The canonical string form is the kebab-case id used on the wire and in
/// free-text agent recommendations; `Display`/`FromStr` round-trip it.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use storydeck_core::LayoutId;
///
/// assert_eq!(LayoutId::TitleTwoColumns.to_string(), "title-2-columns");
/// assert_eq!(LayoutId::from_str("grid-2x2").unwrap(), LayoutId::Grid2x2);
/// assert!(LayoutId::from_str("hexagon").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum LayoutId {
    /// Single full-width column
    #[serde(rename = "full-width")]
    #[strum(serialize = "full-width")]
    FullWidth,
    /// Title header over two content columns
    #[serde(rename = "title-2-columns")]
    #[strum(serialize = "title-2-columns")]
    TitleTwoColumns,
    /// Three evenly split content columns
    #[serde(rename = "three-columns")]
    #[strum(serialize = "three-columns")]
    ThreeColumns,
    /// Two-by-two quadrant grid
    #[serde(rename = "grid-2x2")]
    #[strum(serialize = "grid-2x2")]
    Grid2x2,
    /// Growth-share quadrant matrix
    #[serde(rename = "bcg-matrix")]
    #[strum(serialize = "bcg-matrix")]
    BcgMatrix,
    /// Chronological milestone band
    #[serde(rename = "timeline")]
    #[strum(serialize = "timeline")]
    Timeline,
    /// Sequential process steps
    #[serde(rename = "process-flow")]
    #[strum(serialize = "process-flow")]
    Flow,
    /// Placeholder entry carried by compatibility rows; never recommended
    #[serde(rename = "default")]
    #[strum(serialize = "default")]
    Default,
}

impl LayoutId {
    /// Whether this id is the placeholder `default` entry.
    pub fn is_default_entry(&self) -> bool {
        matches!(self, LayoutId::Default)
    }
}

/// Structural family of a layout template.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StructuralType {
    /// One column holding all content in priority order
    SingleColumn,
    /// Two or three side-by-side columns
    MultiColumn,
    /// Quadrant grid
    Grid,
    /// Ordered milestone nodes
    Timeline,
    /// Ordered process steps
    Flow,
}
