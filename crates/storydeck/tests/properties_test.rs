//! Cross-crate properties of the composition engine.

mod common;

use common::{CountingSuggestion, saved_store, section};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use storydeck::{
    LayoutId, SectionCommand, SuggestionBroker, normalize_section, recommended_layout, render,
    supported_layouts,
};

#[test]
fn normalizing_a_canonical_section_is_identity() {
    let raw = json!({
        "id": "s1",
        "title": "Competitive landscape",
        "description": "Crowded midmarket",
        "keyPoints": ["Five incumbents"],
        "contentBlocks": [{"heading": "Note", "body": "Entrants undercut", "emphasis": false}],
        "charts": [{"id": "c1", "config": {"type": "bubble"}}],
        "slides": [{"title": "Landscape", "layout": "bcg-matrix"}],
        "layout": "bcg-matrix",
        "framework": "competitive_landscape",
        "locked": false,
        "order": 0,
    });

    let canonical = normalize_section(&raw, 0);
    let reserialized = serde_json::to_value(&canonical).unwrap();
    assert_eq!(normalize_section(&reserialized, 0), canonical);
}

#[test]
fn recommendation_is_contained_in_supported_for_every_framework() {
    for framework in [
        "market_sizing",
        "competitive_landscape",
        "swot",
        "value_chain",
        "customer_journey",
        "gtm_strategy",
        "not_a_framework",
    ] {
        let section = section("s1", Some(framework));
        assert!(supported_layouts(&section).contains(&recommended_layout(&section)));
    }
}

#[test]
fn grid_render_is_complete_for_any_item_count() {
    for count in 0..6 {
        let points: Vec<String> = (0..count).map(|i| format!("finding {i}")).collect();
        let section = normalize_section(
            &json!({"id": "s1", "framework": "swot", "keyPoints": points}),
            0,
        );
        let tree = render(&section, LayoutId::Grid2x2);
        assert_eq!(tree.slots().len(), 4);
        assert!(tree.slots().iter().all(|slot| !slot.items().is_empty()));
    }
}

#[test]
fn order_stays_contiguous_through_arbitrary_removals() {
    let mut store = saved_store(
        (1..=6).map(|i| section(&format!("s{i}"), None)).collect(),
    );

    for id in ["s4", "s1", "s6", "s3"] {
        store
            .apply(SectionCommand::RemoveSection { id: id.to_string() })
            .unwrap();
        let orders: Vec<usize> = store.sections().iter().map(|s| *s.order()).collect();
        let expected: Vec<usize> = (0..store.sections().len()).collect();
        assert_eq!(orders, expected);
    }
}

#[tokio::test]
async fn suggestion_cache_prevents_duplicate_network_calls() {
    let mut store = saved_store(vec![section("s1", Some("swot"))]);
    let calls = Arc::new(AtomicUsize::new(0));
    let mut broker = SuggestionBroker::new(CountingSuggestion {
        payload: json!({"layout": "2x2 quadrant view", "reason": "four balanced findings"}),
        calls: Arc::clone(&calls),
    });

    let first = broker
        .request_suggestion(&mut store, "s1", "design-v1", "ctx")
        .await
        .unwrap();
    let second = broker
        .request_suggestion(&mut store, "s1", "design-v1", "ctx")
        .await
        .unwrap();

    assert_eq!(*first.layout(), LayoutId::Grid2x2);
    assert!(second.from_cache());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
