//! Static layout registry and framework compatibility matrix.

use crate::definition::{LayoutDefinition, SlotMetadata, SlotRole};
use std::str::FromStr;
use std::sync::LazyLock;
use storydeck_core::{LayoutId, Section, StructuralType};
use storydeck_error::{LayoutError, LayoutErrorKind, StorydeckResult};

static CATALOG: LazyLock<Vec<LayoutDefinition>> = LazyLock::new(|| {
    use SlotRole::*;
    vec![
        LayoutDefinition::new(
            LayoutId::FullWidth,
            StructuralType::SingleColumn,
            vec![SlotMetadata::new("main", Primary)],
        ),
        LayoutDefinition::new(
            LayoutId::TitleTwoColumns,
            StructuralType::MultiColumn,
            vec![
                SlotMetadata::new("left", Primary),
                SlotMetadata::new("right", Supporting),
            ],
        ),
        LayoutDefinition::new(
            LayoutId::ThreeColumns,
            StructuralType::MultiColumn,
            vec![
                SlotMetadata::new("column-1", Primary),
                SlotMetadata::new("column-2", Primary),
                SlotMetadata::new("column-3", Primary),
            ],
        ),
        LayoutDefinition::new(
            LayoutId::Grid2x2,
            StructuralType::Grid,
            vec![
                SlotMetadata::new("quadrant-1", Quadrant),
                SlotMetadata::new("quadrant-2", Quadrant),
                SlotMetadata::new("quadrant-3", Quadrant),
                SlotMetadata::new("quadrant-4", Quadrant),
            ],
        ),
        LayoutDefinition::new(
            LayoutId::BcgMatrix,
            StructuralType::Grid,
            vec![
                SlotMetadata::new("quadrant-1", Quadrant),
                SlotMetadata::new("quadrant-2", Quadrant),
                SlotMetadata::new("quadrant-3", Quadrant),
                SlotMetadata::new("quadrant-4", Quadrant),
            ],
        ),
        LayoutDefinition::new(
            LayoutId::Timeline,
            StructuralType::Timeline,
            vec![
                SlotMetadata::new("milestone-1", Step),
                SlotMetadata::new("milestone-2", Step),
                SlotMetadata::new("milestone-3", Step),
                SlotMetadata::new("milestone-4", Step),
            ],
        ),
        LayoutDefinition::new(
            LayoutId::Flow,
            StructuralType::Flow,
            vec![
                SlotMetadata::new("step-1", Step),
                SlotMetadata::new("step-2", Step),
                SlotMetadata::new("step-3", Step),
                SlotMetadata::new("step-4", Step),
            ],
        ),
    ]
});

/// All layout templates in catalog order.
pub fn list_layouts() -> &'static [LayoutDefinition] {
    &CATALOG
}

/// Look up the definition of one layout id.
///
/// The `default` placeholder entry has no definition.
pub fn definition(id: LayoutId) -> Option<&'static LayoutDefinition> {
    CATALOG.iter().find(|def| *def.id() == id)
}

/// Ordered compatible layout row for a framework tag; first entry is the
/// recommendation.
fn framework_row(framework: &str) -> Option<&'static [LayoutId]> {
    use LayoutId::*;
    const MARKET_SIZING: &[LayoutId] = &[TitleTwoColumns, FullWidth, ThreeColumns];
    const COMPETITIVE_LANDSCAPE: &[LayoutId] = &[BcgMatrix, Grid2x2, TitleTwoColumns, FullWidth];
    const SWOT: &[LayoutId] = &[Grid2x2, TitleTwoColumns, FullWidth];
    const VALUE_CHAIN: &[LayoutId] = &[Flow, Timeline, FullWidth];
    const CUSTOMER_JOURNEY: &[LayoutId] = &[Timeline, Flow, FullWidth];
    const GTM_STRATEGY: &[LayoutId] = &[Default, ThreeColumns, TitleTwoColumns, FullWidth];

    match framework {
        "market_sizing" => Some(MARKET_SIZING),
        "competitive_landscape" => Some(COMPETITIVE_LANDSCAPE),
        "swot" => Some(SWOT),
        "value_chain" => Some(VALUE_CHAIN),
        "customer_journey" => Some(CUSTOMER_JOURNEY),
        "gtm_strategy" => Some(GTM_STRATEGY),
        _ => None,
    }
}

/// Whether a framework tag has a row in the compatibility matrix.
pub fn is_known_framework(framework: &str) -> bool {
    framework_row(framework).is_some()
}

/// Layout ids compatible with a section.
///
/// A known framework resolves through the matrix; an unknown framework is
/// pinned to full-width; a section with no framework but structured content
/// gets the two text-friendly layouts; anything else may use the full
/// catalog.
///
/// # Examples
///
/// ```
/// use storydeck_core::{LayoutId, SectionBuilder};
/// use storydeck_layout::supported_layouts;
///
/// let section = SectionBuilder::default()
///     .id("s1")
///     .framework("market_sizing".to_string())
///     .build()
///     .unwrap();
/// let supported = supported_layouts(&section);
/// assert!(supported.contains(&LayoutId::TitleTwoColumns));
/// assert!(!supported.contains(&LayoutId::BcgMatrix));
/// ```
pub fn supported_layouts(section: &Section) -> Vec<LayoutId> {
    if let Some(framework) = section.framework() {
        return match framework_row(framework) {
            Some(row) => row.to_vec(),
            None => {
                tracing::debug!(framework = %framework, "Unknown framework, pinning to full-width");
                vec![LayoutId::FullWidth]
            }
        };
    }

    if section.has_structured_content() {
        return vec![LayoutId::FullWidth, LayoutId::TitleTwoColumns];
    }

    CATALOG.iter().map(|def| *def.id()).collect()
}

/// Recommended layout for a section: the first non-`default` compatible
/// entry, else full-width.
///
/// The recommendation is always contained in `supported_layouts(section)`.
pub fn recommended_layout(section: &Section) -> LayoutId {
    supported_layouts(section)
        .into_iter()
        .find(|id| !id.is_default_entry())
        .unwrap_or(LayoutId::FullWidth)
}

/// Check a layout selection strictly instead of falling back.
///
/// [`render`](crate::render) silently falls back to the recommendation;
/// selection surfaces such as a picker or command handler use this to reject an
/// incompatible choice up front.
///
/// # Errors
///
/// `UnknownLayout` for the `default` placeholder, `UnsupportedLayout` when
/// the section's compatibility list excludes the choice.
///
/// # Examples
///
/// ```
/// use storydeck_core::{LayoutId, SectionBuilder};
/// use storydeck_layout::validate_selection;
///
/// let section = SectionBuilder::default()
///     .id("s1")
///     .framework("market_sizing".to_string())
///     .build()
///     .unwrap();
/// assert!(validate_selection(&section, LayoutId::FullWidth).is_ok());
/// assert!(validate_selection(&section, LayoutId::BcgMatrix).is_err());
/// ```
pub fn validate_selection(section: &Section, layout: LayoutId) -> StorydeckResult<()> {
    if layout.is_default_entry() || definition(layout).is_none() {
        return Err(LayoutError::new(LayoutErrorKind::UnknownLayout(layout.to_string())).into());
    }
    if !supported_layouts(section).contains(&layout) {
        return Err(LayoutError::new(LayoutErrorKind::UnsupportedLayout {
            layout: layout.to_string(),
            framework: section
                .framework()
                .clone()
                .unwrap_or_else(|| "<none>".to_string()),
        })
        .into());
    }
    Ok(())
}

/// Canonicalize a free-text layout reference to a catalog id.
///
/// Exact ids win; otherwise alias/substring rules apply in a fixed priority
/// order. Unmatched input returns `None`, forcing the caller to fall back
/// explicitly.
///
/// # Examples
///
/// ```
/// use storydeck_core::LayoutId;
/// use storydeck_layout::normalize_layout_id;
///
/// assert_eq!(normalize_layout_id("Timeline view"), Some(LayoutId::Timeline));
/// assert_eq!(normalize_layout_id("a 3-col comparison"), Some(LayoutId::ThreeColumns));
/// assert_eq!(normalize_layout_id("two-columns"), Some(LayoutId::TitleTwoColumns));
/// assert_eq!(normalize_layout_id("something else"), None);
/// ```
pub fn normalize_layout_id(free_text: &str) -> Option<LayoutId> {
    let text = free_text.trim().to_ascii_lowercase();
    if text.is_empty() {
        return None;
    }

    if let Ok(id) = LayoutId::from_str(&text) {
        if !id.is_default_entry() {
            return Some(id);
        }
        return None;
    }

    let contains_any = |needles: &[&str]| needles.iter().any(|n| text.contains(n));

    if contains_any(&["timeline", "chrono"]) {
        Some(LayoutId::Timeline)
    } else if contains_any(&["process", "flow", "step"]) {
        Some(LayoutId::Flow)
    } else if contains_any(&["bcg", "matrix"]) {
        Some(LayoutId::BcgMatrix)
    } else if contains_any(&["quadrant", "grid", "2x2"]) {
        Some(LayoutId::Grid2x2)
    } else if contains_any(&["three", "3-col", "3 col", "3col"]) {
        Some(LayoutId::ThreeColumns)
    } else if contains_any(&["full", "single", "one col", "one-col"]) {
        Some(LayoutId::FullWidth)
    } else if contains_any(&["two", "2-col", "2 col", "column"]) {
        Some(LayoutId::TitleTwoColumns)
    } else {
        None
    }
}
