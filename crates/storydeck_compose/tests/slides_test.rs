//! Slide coordinator behavior: sequential progress, partial-failure
//! isolation, and single-pass commits.

mod common;

use common::{ScriptedSlides, SlideScript, saved_store, section};
use serde_json::json;
use std::collections::HashMap;
use storydeck_compose::{SlideCoordinator, needs_slides};

fn cohort_store() -> storydeck_store::StorylineStore {
    saved_store(vec![
        section("s1", "Opening", None),
        section("s2", "Middle", None),
        section("s3", "Closing", None),
    ])
}

#[tokio::test]
async fn failing_section_does_not_abort_the_cohort() {
    // Scenario: 3-section cohort where section 2 throws. The result reports
    // completed:3 with one failure, and the other two sections get decks.
    let mut scripts = HashMap::new();
    scripts.insert(
        "s1".to_string(),
        SlideScript::Slides(vec![json!({"title": "Deck 1"})]),
    );
    scripts.insert("s2".to_string(), SlideScript::Error("boom".to_string()));
    scripts.insert(
        "s3".to_string(),
        SlideScript::Slides(vec![json!({"title": "Deck 3"})]),
    );

    let mut store = cohort_store();
    let coordinator = SlideCoordinator::new(ScriptedSlides::new(scripts));

    let report = coordinator
        .generate_for_sections(&mut store, needs_slides)
        .await
        .unwrap();

    assert_eq!(*report.completed(), 3);
    assert_eq!(*report.total(), 3);
    assert_eq!(report.failures().len(), 1);
    assert_eq!(report.failures()[0].section_id(), "s2");
    assert!(report.is_partial_failure());
    assert!(!report.is_total_failure());

    assert!(!store.section("s1").unwrap().slides().is_empty());
    assert!(store.section("s2").unwrap().slides().is_empty());
    assert!(!store.section("s3").unwrap().slides().is_empty());
}

#[tokio::test]
async fn empty_deck_counts_as_failure_even_when_marked_successful() {
    let mut scripts = HashMap::new();
    scripts.insert("s1".to_string(), SlideScript::EmptySuccess);
    let mut store = saved_store(vec![section("s1", "Only", None)]);
    let coordinator = SlideCoordinator::new(ScriptedSlides::new(scripts));

    let report = coordinator
        .generate_for_sections(&mut store, needs_slides)
        .await
        .unwrap();

    assert_eq!(report.failures().len(), 1);
    assert!(report.failures()[0].error().contains("empty deck"));
    assert!(report.is_total_failure());
    // Zero successes means zero store mutation.
    assert!(!store.is_dirty());
}

#[tokio::test]
async fn service_failure_flag_is_recorded_with_detail() {
    let mut scripts = HashMap::new();
    scripts.insert(
        "s1".to_string(),
        SlideScript::FailureFlag("model overloaded".to_string()),
    );
    let mut store = saved_store(vec![section("s1", "Only", None)]);
    let coordinator = SlideCoordinator::new(ScriptedSlides::new(scripts));

    let report = coordinator
        .generate_for_sections(&mut store, needs_slides)
        .await
        .unwrap();

    assert!(report.failures()[0].error().contains("model overloaded"));
}

#[tokio::test]
async fn progress_counter_is_monotonic_and_complete() {
    let mut store = cohort_store();
    let coordinator = SlideCoordinator::new(ScriptedSlides::new(HashMap::new()));

    let mut seen = Vec::new();
    coordinator
        .generate_with_progress(&mut store, needs_slides, |completed, total| {
            seen.push((completed, total));
        })
        .await
        .unwrap();

    assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
}

#[tokio::test]
async fn predicate_limits_the_cohort() {
    let mut store = cohort_store();
    let service = ScriptedSlides::new(HashMap::new());
    let calls = service.counter();
    let coordinator = SlideCoordinator::new(service);

    let report = coordinator
        .generate_for_sections(&mut store, |section| section.id() == "s2")
        .await
        .unwrap();

    assert_eq!(*report.total(), 1);
    assert_eq!(report.updated(), &vec!["s2".to_string()]);
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    assert!(store.section("s1").unwrap().slides().is_empty());
}

#[tokio::test]
async fn sections_with_decks_are_skipped_by_default_predicate() {
    let mut store = cohort_store();
    let coordinator = SlideCoordinator::new(ScriptedSlides::new(HashMap::new()));
    coordinator
        .generate_for_sections(&mut store, needs_slides)
        .await
        .unwrap();

    // Second run: everything already has slides, so nothing is targeted.
    let report = coordinator
        .generate_for_sections(&mut store, needs_slides)
        .await
        .unwrap();
    assert_eq!(*report.total(), 0);
    assert_eq!(*report.completed(), 0);
    assert!(!report.is_total_failure());
}
