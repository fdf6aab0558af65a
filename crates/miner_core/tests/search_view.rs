use miner_core::{SearchOutcome, SearchResultCard, SearchResultsState, SearchView};

fn card(id: &str) -> SearchResultCard {
    SearchResultCard {
        video_id: id.to_string(),
        title: format!("title {id}"),
        channel_name: "channel".to_string(),
        thumbnail_url: None,
        duration_text: None,
        published_date_text: None,
        view_count: None,
        view_count_text: None,
        subscriber_count_text: None,
        channel_grade: None,
        is_short_form: None,
        badge_label: None,
    }
}

#[test]
fn success_and_empty_are_split_by_item_count() {
    let mut view = SearchView::default();
    let before = view.begin_loading();
    assert_eq!(view.state, SearchResultsState::Loading);
    view.apply_outcome(
        SearchOutcome::Success {
            items: vec![card("a")],
        },
        before,
    );
    assert_eq!(view.state, SearchResultsState::Success);
    assert_eq!(view.items.len(), 1);

    let before = view.begin_loading();
    view.apply_outcome(SearchOutcome::Success { items: Vec::new() }, before);
    assert_eq!(view.state, SearchResultsState::Empty);
}

#[test]
fn skipped_restores_the_view_before_loading() {
    let mut view = SearchView::default();
    let before = view.begin_loading();
    view.apply_outcome(
        SearchOutcome::Success {
            items: vec![card("a"), card("b")],
        },
        before,
    );
    let settled = view.clone();

    let before = view.begin_loading();
    view.apply_outcome(SearchOutcome::Skipped, before);
    assert_eq!(view, settled);
}

#[test]
fn superseded_leaves_the_newer_view_alone() {
    let mut view = SearchView::default();
    let older_before = view.begin_loading();
    let newer_before = view.begin_loading();
    view.apply_outcome(
        SearchOutcome::Success {
            items: vec![card("new")],
        },
        newer_before,
    );
    let settled = view.clone();

    view.apply_outcome(SearchOutcome::Superseded, older_before);
    assert_eq!(view, settled);
}

#[test]
fn error_discards_items_and_exposes_policy() {
    let mut view = SearchView::new(vec![card("seed")]);
    let before = view.begin_loading();
    view.apply_outcome(
        SearchOutcome::Error {
            message: "bad input".to_string(),
            retryable: false,
        },
        before,
    );
    assert_eq!(view.state, SearchResultsState::Error);
    assert!(view.items.is_empty());
    assert_eq!(view.error_message.as_deref(), Some("bad input"));
    assert!(!view.attention_snapshot().retryable);

    let policy = view.error_ui_policy().expect("error panel policy");
    assert_eq!(policy.primary_action_label, "Edit search");

    // A new attempt resets the retryable flag while loading.
    view.begin_loading();
    assert!(view.retryable);
    assert_eq!(view.error_ui_policy(), None);
}

#[test]
fn reset_returns_to_idle() {
    let mut view = SearchView::new(vec![card("seed")]);
    view.reset();
    assert_eq!(view, SearchView::default());
    assert_eq!(view.state, SearchResultsState::Idle);
}
