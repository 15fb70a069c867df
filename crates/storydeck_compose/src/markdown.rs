//! Markdown hydration through the extraction collaborator.

use storydeck_core::SectionPatchBuilder;
use storydeck_error::{StoreError, StoreErrorKind, StorydeckResult};
use storydeck_interface::MarkdownEngine;
use storydeck_normalize::normalize_chart;
use storydeck_store::{SectionCommand, StorylineStore};

/// Render one section's markdown into HTML and extracted charts.
///
/// The markdown engine is a black box returning `{html, charts[]}`; charts
/// without a usable configuration are dropped during canonicalization. A
/// section with no markdown is left untouched.
///
/// # Errors
///
/// Returns `SectionNotFound` for an unknown id, or the engine's error
/// unchanged.
#[tracing::instrument(skip(store, engine), fields(section = %section_id))]
pub async fn hydrate_markdown<E: MarkdownEngine>(
    store: &mut StorylineStore,
    engine: &E,
    section_id: &str,
) -> StorydeckResult<()> {
    let Some(section) = store.section(section_id) else {
        return Err(StoreError::new(StoreErrorKind::SectionNotFound(
            section_id.to_string(),
        ))
        .into());
    };

    let markdown = section.markdown().clone();
    if markdown.trim().is_empty() {
        tracing::debug!(section = %section_id, "No markdown to hydrate");
        return Ok(());
    }

    let rendered = engine.render(&markdown).await?;

    let charts: Vec<_> = rendered
        .charts()
        .iter()
        .enumerate()
        .filter_map(|(i, raw)| normalize_chart(raw, i))
        .collect();

    let mut patch = SectionPatchBuilder::default();
    patch.html(rendered.html().clone());
    if !charts.is_empty() {
        patch.charts(charts);
    }

    store.apply(SectionCommand::UpdateSection {
        id: section_id.to_string(),
        patch: patch.build().expect("all patch fields defaulted"),
    })
}
