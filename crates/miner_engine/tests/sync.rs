use std::time::{Duration, Instant};

use miner_core::{SearchQuery, Topic, ViewMode, RESTORED_NOTICE_MESSAGE};
use miner_engine::{Location, MemoryHistory, QuerySyncController};
use pretty_assertions::assert_eq;

fn history(initial: &str) -> MemoryHistory {
    MemoryHistory::new("https://miner.example", "/search", initial)
}

#[test]
fn edits_replace_the_current_entry() {
    miner_logging::initialize_for_tests();
    let mut sync = QuerySyncController::new(history(""), false);

    sync.set_query(SearchQuery::keyword(" cats "));
    sync.set_view_mode(ViewMode::List);

    assert_eq!(sync.location().entries(), ["?q=cats&view=list".to_string()]);
    assert_eq!(
        sync.location().share_url(),
        "https://miner.example/search?q=cats&view=list"
    );
}

#[test]
fn back_navigation_restores_and_requests_a_search() {
    let mut sync = QuerySyncController::new(history("?q=cats"), true);
    sync.location_mut().push("?q=dogs&topic=animal");
    assert_eq!(
        sync.handle_navigation(),
        Some(SearchQuery {
            keyword: "dogs".to_string(),
            topic: Topic::Animal,
            ..SearchQuery::default()
        })
    );

    assert!(sync.location_mut().back());
    let restored = sync.handle_navigation();
    assert_eq!(restored, Some(SearchQuery::keyword("cats")));
    assert_eq!(sync.query(), &SearchQuery::keyword("cats"));

    let now = Instant::now();
    let notice = sync.notice_at(now).expect("restored notice");
    assert_eq!(notice.message(), RESTORED_NOTICE_MESSAGE);
    assert!(sync.notice_at(now + Duration::from_secs(5)).is_none());
}

#[test]
fn navigation_without_auto_search_only_adopts_state() {
    let mut sync = QuerySyncController::new(history("?q=cats"), false);
    sync.location_mut().push("?q=dogs");

    assert_eq!(sync.handle_navigation(), None);
    assert_eq!(sync.query(), &SearchQuery::keyword("dogs"));
    assert!(sync.notice().is_none());
}

#[test]
fn view_mode_only_navigation_never_searches() {
    let mut sync = QuerySyncController::new(history("?q=cats"), true);
    sync.location_mut().push("?q=cats&view=list");

    assert_eq!(sync.handle_navigation(), None);
    assert_eq!(sync.view_mode(), ViewMode::List);
    assert!(sync.notice().is_none());
}

#[test]
fn navigation_to_a_non_canonical_entry_rewrites_it() {
    let mut sync = QuerySyncController::new(history(""), true);
    sync.location_mut().push("?limit=999&q=cats&topic=bogus");

    assert_eq!(sync.handle_navigation(), Some(SearchQuery::keyword("cats")));
    assert_eq!(sync.location().search(), "?q=cats");
    assert_eq!(sync.location().entries().len(), 2);
}

#[test]
fn toggling_auto_search_affects_later_navigation() {
    let mut sync = QuerySyncController::new(history("?q=cats"), false);
    sync.set_auto_search(true);
    sync.location_mut().push("?q=birds");
    assert_eq!(sync.handle_navigation(), Some(SearchQuery::keyword("birds")));
    assert!(sync.state().auto_search_on_navigation());
}

#[test]
fn history_bounds_and_forward_truncation() {
    let mut history = history("?q=a");
    assert!(!history.back());
    history.push("?q=b");
    history.push("?q=c");
    assert!(history.back());
    assert!(history.back());
    assert!(!history.back());
    assert!(history.forward());
    assert_eq!(history.search(), "?q=b");

    history.push("?q=d");
    assert!(!history.forward());
    assert_eq!(history.entries(), ["?q=a", "?q=b", "?q=d"].map(String::from));
    assert_eq!(history.index(), 2);
}
