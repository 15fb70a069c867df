//! Acceptance scenarios for the storyline lifecycle.

mod common;

use common::{EchoRegeneration, FlakySlides, saved_store, section};
use serde_json::json;
use std::collections::HashMap;
use storydeck::{
    LayoutId, RegenerationOrchestrator, SectionCommand, SlideCoordinator, needs_slides, render,
    supported_layouts,
};

#[test]
fn incompatible_layout_selection_falls_back_to_recommendation() {
    // A market-sizing section cannot use the bcg-matrix layout; rendering
    // falls back to the framework's recommended layout.
    let section = section("s1", Some("market_sizing"));

    let supported = supported_layouts(&section);
    assert!(!supported.contains(&LayoutId::BcgMatrix));

    let tree = render(&section, LayoutId::BcgMatrix);
    assert_eq!(*tree.layout(), LayoutId::TitleTwoColumns);
}

#[tokio::test]
async fn regeneration_replaces_drafts_around_a_locked_section() {
    // 3-section storyline with section[1] locked; regeneration returns
    // replacements for sections 0 and 2.
    let mut store = saved_store(vec![
        section("s1", None),
        section("s2", None),
        section("s3", None),
    ]);
    store
        .apply(SectionCommand::ToggleLock {
            id: "s2".to_string(),
            locked: true,
        })
        .unwrap();
    let locked_before = store.section("s2").unwrap().clone();

    let mut replacements = HashMap::new();
    replacements.insert(
        "s1".to_string(),
        json!({"id": "s1", "title": "Section s1 (regenerated)"}),
    );
    replacements.insert(
        "s3".to_string(),
        json!({"id": "s3", "title": "Section s3 (regenerated)"}),
    );
    let mut orchestrator = RegenerationOrchestrator::new(EchoRegeneration { replacements });

    let outcome = orchestrator.regenerate(&mut store).await.unwrap();

    assert_eq!(outcome.replaced().len(), 2);
    assert_eq!(store.section("s1").unwrap().title(), "Section s1 (regenerated)");
    assert_eq!(store.section("s2").unwrap(), &locked_before);
    assert_eq!(store.section("s3").unwrap().title(), "Section s3 (regenerated)");
}

#[test]
fn removal_reindexes_order_and_clamps_the_preview_index() {
    // removeSection('s2') from a 3-section storyline where s2.order == 1.
    let mut store = saved_store(vec![
        section("s1", None),
        section("s2", None),
        section("s3", None),
    ]);
    assert_eq!(*store.section("s2").unwrap().order(), 1);

    store
        .apply(SectionCommand::RemoveSection {
            id: "s2".to_string(),
        })
        .unwrap();

    let orders: Vec<usize> = store.sections().iter().map(|s| *s.order()).collect();
    assert_eq!(orders, vec![0, 1]);
    // A caller-held preview index of 2 clamps to the new last section.
    assert_eq!(store.clamp_index(2), 1);
}

#[tokio::test]
async fn slide_cohort_isolates_one_failing_section() {
    // 3-section cohort where the third section throws: the report counts all
    // three as processed, records one failure, and the other two sections
    // end up with non-empty decks.
    let mut store = saved_store(vec![
        section("s1", None),
        section("s2", None),
        section("s3", None),
    ]);
    let coordinator = SlideCoordinator::new(FlakySlides {
        failing: vec!["s3".to_string()],
    });

    let report = coordinator
        .generate_for_sections(&mut store, needs_slides)
        .await
        .unwrap();

    assert_eq!(*report.completed(), 3);
    assert_eq!(report.failures().len(), 1);
    assert_eq!(report.failures()[0].section_id(), "s3");

    assert!(!store.section("s1").unwrap().slides().is_empty());
    assert!(!store.section("s2").unwrap().slides().is_empty());
    assert!(store.section("s3").unwrap().slides().is_empty());
}
