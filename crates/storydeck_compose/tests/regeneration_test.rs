//! Regeneration orchestrator behavior: partitioning, lock preservation,
//! atomic merge, and failure isolation.

mod common;

use common::{ScriptedRegeneration, saved_store, section, unsaved_store};
use serde_json::json;
use std::sync::atomic::Ordering;
use storydeck_compose::{RegenerationOrchestrator, RegenerationPhase};
use storydeck_error::{HttpError, StorydeckErrorKind};
use storydeck_interface::RegenerationResponse;
use storydeck_store::SectionCommand;

fn three_sections() -> Vec<storydeck_core::Section> {
    vec![
        section("s1", "Opening", None),
        section("s2", "Middle", None),
        section("s3", "Closing", None),
    ]
}

#[tokio::test]
async fn locked_sections_survive_regeneration_unchanged() {
    // Scenario: 3-section storyline with section[1] locked; the service
    // returns replacements for sections 0 and 2 (and cheekily echoes the
    // locked one back).
    let mut store = saved_store(three_sections());
    store
        .apply(SectionCommand::ToggleLock {
            id: "s2".to_string(),
            locked: true,
        })
        .unwrap();
    let locked_before = store.section("s2").unwrap().clone();
    store.mark_clean();

    let service = ScriptedRegeneration::new(vec![Ok(RegenerationResponse::with_sections(vec![
        json!({"id": "s1", "title": "Opening v2", "description": "rewritten"}),
        json!({"id": "s2", "title": "Should never land", "description": "overwrite attempt"}),
        json!({"id": "s3", "title": "Closing v2", "description": "rewritten"}),
    ]))]);
    let mut orchestrator = RegenerationOrchestrator::new(service);

    let outcome = orchestrator.regenerate(&mut store).await.unwrap();

    assert_eq!(orchestrator.phase(), RegenerationPhase::Done);
    assert_eq!(outcome.replaced(), &vec!["s1".to_string(), "s3".to_string()]);
    assert_eq!(outcome.preserved(), &vec!["s2".to_string()]);
    assert_eq!(outcome.backup().len(), 3);

    assert_eq!(store.section("s1").unwrap().title(), "Opening v2");
    assert_eq!(store.section("s3").unwrap().title(), "Closing v2");

    // Locked content is byte-identical to the pre-regeneration section.
    assert_eq!(store.section("s2").unwrap(), &locked_before);

    // Order stays contiguous and the success sets the dirty flag.
    let orders: Vec<usize> = store.sections().iter().map(|s| *s.order()).collect();
    assert_eq!(orders, vec![0, 1, 2]);
    assert!(store.is_dirty());
}

#[tokio::test]
async fn unsaved_storyline_fails_before_any_request() {
    let service = ScriptedRegeneration::new(vec![]);
    let mut store = unsaved_store(three_sections());
    let mut orchestrator = RegenerationOrchestrator::new(service);

    let err = orchestrator.regenerate(&mut store).await.unwrap_err();

    assert!(format!("{err}").contains("saved before regenerating"));
    assert_eq!(orchestrator.phase(), RegenerationPhase::Failed);
    assert!(!store.is_dirty());
}

#[tokio::test]
async fn all_locked_fails_fast_with_nothing_to_regenerate() {
    let mut store = saved_store(three_sections());
    for id in ["s1", "s2", "s3"] {
        store
            .apply(SectionCommand::ToggleLock {
                id: id.to_string(),
                locked: true,
            })
            .unwrap();
    }
    store.mark_clean();

    let service = ScriptedRegeneration::new(vec![]);
    let mut orchestrator = RegenerationOrchestrator::new(service);

    let err = orchestrator.regenerate(&mut store).await.unwrap_err();
    assert!(format!("{err}").contains("No draft sections"));
    assert!(!store.is_dirty());
}

#[tokio::test]
async fn service_failure_leaves_storyline_unmodified() {
    let mut store = saved_store(three_sections());
    let before = store.snapshot();

    let service =
        ScriptedRegeneration::new(vec![Err(HttpError::new("connection reset").into())]);
    let mut orchestrator = RegenerationOrchestrator::new(service);

    let err = orchestrator.regenerate(&mut store).await.unwrap_err();
    assert!(format!("{err}").contains("connection reset"));
    assert_eq!(orchestrator.phase(), RegenerationPhase::Failed);
    assert_eq!(store.snapshot(), before);
    assert!(!store.is_dirty());
}

#[tokio::test]
async fn response_error_detail_is_surfaced_verbatim() {
    let mut store = saved_store(three_sections());

    let service = ScriptedRegeneration::new(vec![Ok(RegenerationResponse::with_error(
        "brief is below quality threshold",
    ))]);
    let mut orchestrator = RegenerationOrchestrator::new(service);

    let err = orchestrator.regenerate(&mut store).await.unwrap_err();
    match err.kind() {
        StorydeckErrorKind::Regeneration(e) => {
            assert!(format!("{e}").contains("brief is below quality threshold"));
        }
        other => panic!("unexpected error kind: {other}"),
    }
    assert!(!store.is_dirty());
}

#[tokio::test]
async fn unknown_response_sections_are_ignored() {
    let mut store = saved_store(three_sections());
    let service = ScriptedRegeneration::new(vec![Ok(RegenerationResponse::with_sections(vec![
        json!({"id": "s1", "title": "Fresh"}),
        json!({"id": "ghost", "title": "Nobody ordered this"}),
    ]))]);
    let mut orchestrator = RegenerationOrchestrator::new(service);

    let outcome = orchestrator.regenerate(&mut store).await.unwrap();
    assert_eq!(outcome.replaced(), &vec!["s1".to_string()]);
    assert_eq!(store.sections().len(), 3);
    assert!(store.section("ghost").is_none());
}

#[tokio::test(start_paused = true)]
async fn rate_limited_regeneration_retries_then_succeeds() {
    use storydeck_error::{RegenerationError, RegenerationErrorKind};

    let mut store = saved_store(three_sections());
    let service = ScriptedRegeneration::new(vec![
        Err(RegenerationError::new(RegenerationErrorKind::RateLimited("429".into())).into()),
        Err(RegenerationError::new(RegenerationErrorKind::RateLimited("429".into())).into()),
        Ok(RegenerationResponse::with_sections(vec![
            json!({"id": "s1", "title": "After backoff"}),
        ])),
    ]);
    let mut orchestrator = RegenerationOrchestrator::new(service);

    let outcome = orchestrator.regenerate(&mut store).await.unwrap();
    assert_eq!(outcome.replaced(), &vec!["s1".to_string()]);
    assert_eq!(store.section("s1").unwrap().title(), "After backoff");
}

#[tokio::test]
async fn transient_network_errors_do_not_retry() {
    let mut store = saved_store(three_sections());
    let service = ScriptedRegeneration::new(vec![
        Err(HttpError::new("502 Bad Gateway").into()),
        Ok(RegenerationResponse::with_sections(vec![
            json!({"id": "s1", "title": "Should not be reached"}),
        ])),
    ]);
    let calls = service.counter();
    let mut orchestrator = RegenerationOrchestrator::new(service);

    let err = orchestrator.regenerate(&mut store).await.unwrap_err();
    assert!(format!("{err}").contains("502"));
    // Exactly one attempt: only rate limits are retried on this path.
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
