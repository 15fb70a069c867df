//! Content distribution into layout slots.

use crate::catalog::{definition, recommended_layout, supported_layouts};
use crate::charts::select_charts;
use crate::render::{Header, RenderItem, RenderTree, Slot};
use storydeck_core::{Chart, LayoutId, Section, StructuralType};
use storydeck_normalize::heuristics::split_fragments;

/// Where a section's primary content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrimarySource {
    Slides,
    Rendered,
    KeyPoints,
    Blocks,
    Markdown,
    Description,
    Nothing,
}

/// Distribute a section's content into the structural slots of a layout.
///
/// A layout outside the section's compatibility list falls back to the
/// recommended layout; the returned tree records the layout actually used.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use storydeck_core::LayoutId;
/// use storydeck_layout::render;
/// use storydeck_normalize::normalize_section;
///
/// // bcg-matrix is not compatible with market_sizing, so rendering falls
/// // back to the recommended layout.
/// let section = normalize_section(
///     &json!({"id": "s1", "framework": "market_sizing"}),
///     0,
/// );
/// let tree = render(&section, LayoutId::BcgMatrix);
/// assert_eq!(*tree.layout(), LayoutId::TitleTwoColumns);
/// ```
#[tracing::instrument(skip(section), fields(section = %section.id(), layout = %layout_id))]
pub fn render(section: &Section, layout_id: LayoutId) -> RenderTree {
    let supported = supported_layouts(section);
    let effective = if supported.contains(&layout_id) && !layout_id.is_default_entry() {
        layout_id
    } else {
        let fallback = recommended_layout(section);
        tracing::warn!(
            requested = %layout_id,
            fallback = %fallback,
            "Layout not supported for section, falling back to recommendation"
        );
        fallback
    };

    let def = definition(effective)
        .expect("recommended layouts always have a catalog definition");

    let (primary, source) = primary_content(section);
    let charts = select_charts(section);

    let slots = match def.structural_type() {
        StructuralType::SingleColumn => single_column(primary, &charts),
        StructuralType::MultiColumn if *def.slot_count() == 2 => {
            two_column(section, primary, source, &charts)
        }
        StructuralType::MultiColumn => three_column(primary),
        StructuralType::Grid => grid(section, primary, effective),
        StructuralType::Timeline => timeline(primary),
        StructuralType::Flow => flow(primary),
    };

    RenderTree::new(
        effective,
        Header::new(section.title().clone(), section.description().clone()),
        slots,
    )
}

/// Collect the section's primary content in precedence order.
///
/// Precedence: explicit slides, framework-rendered content, key points,
/// content blocks, markdown/html, then description fragments.
fn primary_content(section: &Section) -> (Vec<RenderItem>, PrimarySource) {
    if !section.slides().is_empty() {
        let items = section
            .slides()
            .iter()
            .enumerate()
            .map(|(index, slide)| RenderItem::SlideRef {
                index,
                title: slide.title().clone(),
            })
            .collect();
        return (items, PrimarySource::Slides);
    }

    if section.framework().is_some() && !section.html().trim().is_empty() {
        return (
            vec![RenderItem::Text(section.html().clone())],
            PrimarySource::Rendered,
        );
    }

    if !section.key_points().is_empty() {
        let items = section
            .key_points()
            .iter()
            .map(|point| RenderItem::Bullet(point.clone()))
            .collect();
        return (items, PrimarySource::KeyPoints);
    }

    if !section.content_blocks().is_empty() {
        let items = section
            .content_blocks()
            .iter()
            .map(|block| RenderItem::Block {
                heading: block.heading().clone(),
                body: block.body().clone(),
            })
            .collect();
        return (items, PrimarySource::Blocks);
    }

    if !section.markdown().trim().is_empty() {
        return (
            vec![RenderItem::Text(section.markdown().clone())],
            PrimarySource::Markdown,
        );
    }
    if !section.html().trim().is_empty() {
        return (
            vec![RenderItem::Text(section.html().clone())],
            PrimarySource::Rendered,
        );
    }

    let fragments = split_fragments(section.description());
    if !fragments.is_empty() {
        return (
            fragments.into_iter().map(RenderItem::Text).collect(),
            PrimarySource::Description,
        );
    }

    (Vec::new(), PrimarySource::Nothing)
}

fn chart_refs(charts: &[Chart]) -> Vec<RenderItem> {
    charts
        .iter()
        .map(|chart| RenderItem::ChartRef {
            chart_id: chart.id().clone(),
            title: chart.title().clone(),
        })
        .collect()
}

/// All content concatenated into one slot in priority order.
fn single_column(primary: Vec<RenderItem>, charts: &[Chart]) -> Vec<Slot> {
    let mut items = primary;
    items.extend(chart_refs(charts));
    if items.is_empty() {
        items.push(RenderItem::Placeholder("Content".to_string()));
    }
    vec![Slot::new("main", items)]
}

/// Left column holds primary content; right column holds charts, source
/// attributions, and key insights.
fn two_column(
    section: &Section,
    primary: Vec<RenderItem>,
    source: PrimarySource,
    charts: &[Chart],
) -> Vec<Slot> {
    let mut supporting = chart_refs(charts);
    for attribution in charts
        .iter()
        .map(|chart| chart.source().trim())
        .filter(|s| !s.is_empty())
    {
        supporting.push(RenderItem::Text(format!("Source: {attribution}")));
    }

    // Emphasized blocks act as insights when they are not already the
    // primary content.
    if source != PrimarySource::Blocks {
        supporting.extend(
            section
                .content_blocks()
                .iter()
                .filter(|block| *block.emphasis())
                .map(|block| RenderItem::Block {
                    heading: block.heading().clone(),
                    body: block.body().clone(),
                }),
        );
    }

    if supporting.is_empty() {
        supporting.push(RenderItem::Placeholder("Supporting evidence".to_string()));
    }

    let left = if primary.is_empty() {
        vec![RenderItem::Placeholder("Content".to_string())]
    } else {
        primary
    };

    vec![Slot::new("left", left), Slot::new("right", supporting)]
}

/// Items split into ceil(n/3)-sized chunks per column, preserving order.
fn three_column(primary: Vec<RenderItem>) -> Vec<Slot> {
    let chunk_size = primary.len().div_ceil(3).max(1);
    let mut chunks = primary.chunks(chunk_size);

    (0..3)
        .map(|i| {
            let items = chunks
                .next()
                .map(<[RenderItem]>::to_vec)
                .unwrap_or_else(|| {
                    vec![RenderItem::Placeholder(format!("Column {}", i + 1))]
                });
            Slot::new(format!("column-{}", i + 1), items)
        })
        .collect()
}

/// Quadrant labels for the two grid layouts.
fn quadrant_labels(layout: LayoutId) -> [&'static str; 4] {
    match layout {
        LayoutId::BcgMatrix => ["Stars", "Question Marks", "Cash Cows", "Dogs"],
        _ => ["High Priority", "Medium Priority", "Opportunities", "Risks"],
    }
}

/// Exactly four populated quadrants, whatever the section supplies.
///
/// Up to four items map 1:1 in source order; overflow items join the fourth
/// quadrant; missing quadrants get their deterministic placeholder label,
/// with the first quadrant preferring the section description.
fn grid(section: &Section, primary: Vec<RenderItem>, layout: LayoutId) -> Vec<Slot> {
    let labels = quadrant_labels(layout);
    let mut quadrants: Vec<Vec<RenderItem>> = vec![Vec::new(), Vec::new(), Vec::new(), Vec::new()];

    for (i, item) in primary.into_iter().enumerate() {
        let target = i.min(3);
        quadrants[target].push(item);
    }

    quadrants
        .into_iter()
        .enumerate()
        .map(|(i, items)| {
            let items = if items.is_empty() {
                if i == 0 && !section.description().trim().is_empty() {
                    vec![RenderItem::Text(section.description().clone())]
                } else {
                    vec![RenderItem::Placeholder(labels[i].to_string())]
                }
            } else {
                items
            };
            Slot::new(format!("quadrant-{}", i + 1), items)
        })
        .collect()
}

/// First four items become ordered milestone nodes.
fn timeline(primary: Vec<RenderItem>) -> Vec<Slot> {
    if primary.is_empty() {
        return vec![Slot::new(
            "milestone-1",
            vec![RenderItem::Placeholder("Milestone".to_string())],
        )];
    }

    primary
        .into_iter()
        .take(4)
        .enumerate()
        .map(|(i, item)| Slot::new(format!("milestone-{}", i + 1), vec![item]))
        .collect()
}

/// First four items become ordered process steps; a generic four-step
/// sequence appears only when zero real content exists.
fn flow(primary: Vec<RenderItem>) -> Vec<Slot> {
    const GENERIC_STEPS: [&str; 4] = ["Discover", "Define", "Develop", "Deliver"];

    if primary.is_empty() {
        return GENERIC_STEPS
            .iter()
            .enumerate()
            .map(|(i, step)| {
                Slot::new(
                    format!("step-{}", i + 1),
                    vec![RenderItem::Placeholder((*step).to_string())],
                )
            })
            .collect();
    }

    primary
        .into_iter()
        .take(4)
        .enumerate()
        .map(|(i, item)| Slot::new(format!("step-{}", i + 1), vec![item]))
        .collect()
}
