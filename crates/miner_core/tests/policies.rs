use miner_core::{
    evaluate_pop_state_sync, is_search_input_attention_required,
    should_trigger_search_input_attention, AttentionSnapshot, AttentionTracker,
    PopStateSyncDecision, PopStateSyncInputs, SearchQuery, SearchResultsState, Topic, ViewMode,
};

fn snapshot(results_state: SearchResultsState, retryable: bool) -> AttentionSnapshot {
    AttentionSnapshot {
        results_state,
        retryable,
    }
}

#[test]
fn pop_state_with_identical_state_does_nothing() {
    let query = SearchQuery::keyword("cats");
    for auto in [false, true] {
        let decision = evaluate_pop_state_sync(&PopStateSyncInputs {
            parsed_query: &query,
            parsed_view_mode: ViewMode::List,
            current_query: &query.clone(),
            current_view_mode: ViewMode::List,
            auto_search_on_navigation: auto,
        });
        assert_eq!(decision, PopStateSyncDecision::default());
    }
}

#[test]
fn pop_state_query_change_triggers_search_only_with_auto_search() {
    let parsed = SearchQuery::keyword("dogs");
    let current = SearchQuery::keyword("cats");

    let with_auto = evaluate_pop_state_sync(&PopStateSyncInputs {
        parsed_query: &parsed,
        parsed_view_mode: ViewMode::Grid,
        current_query: &current,
        current_view_mode: ViewMode::Grid,
        auto_search_on_navigation: true,
    });
    assert_eq!(
        with_auto,
        PopStateSyncDecision {
            has_query_changed: true,
            has_view_mode_changed: false,
            should_apply_state: true,
            should_trigger_search: true,
            should_show_restored_notice: true,
        }
    );

    let without_auto = evaluate_pop_state_sync(&PopStateSyncInputs {
        auto_search_on_navigation: false,
        ..with_auto_inputs(&parsed, &current)
    });
    assert!(without_auto.should_apply_state);
    assert!(!without_auto.should_trigger_search);
    assert!(!without_auto.should_show_restored_notice);
}

fn with_auto_inputs<'a>(parsed: &'a SearchQuery, current: &'a SearchQuery) -> PopStateSyncInputs<'a> {
    PopStateSyncInputs {
        parsed_query: parsed,
        parsed_view_mode: ViewMode::Grid,
        current_query: current,
        current_view_mode: ViewMode::Grid,
        auto_search_on_navigation: true,
    }
}

#[test]
fn pop_state_view_mode_change_never_triggers_search() {
    let query = SearchQuery {
        topic: Topic::Game,
        ..SearchQuery::keyword("speedrun")
    };
    let decision = evaluate_pop_state_sync(&PopStateSyncInputs {
        parsed_query: &query,
        parsed_view_mode: ViewMode::List,
        current_query: &query,
        current_view_mode: ViewMode::Grid,
        auto_search_on_navigation: true,
    });
    assert!(decision.has_view_mode_changed);
    assert!(!decision.has_query_changed);
    assert!(decision.should_apply_state);
    assert!(!decision.should_trigger_search);
}

#[test]
fn attention_required_only_for_non_retryable_errors() {
    assert!(is_search_input_attention_required(&snapshot(
        SearchResultsState::Error,
        false
    )));
    assert!(!is_search_input_attention_required(&snapshot(
        SearchResultsState::Error,
        true
    )));
    for state in [
        SearchResultsState::Idle,
        SearchResultsState::Loading,
        SearchResultsState::Success,
        SearchResultsState::Empty,
    ] {
        assert!(!is_search_input_attention_required(&snapshot(state, false)));
    }
}

#[test]
fn attention_triggers_on_rising_edge_only() {
    let required = snapshot(SearchResultsState::Error, false);
    let loading = snapshot(SearchResultsState::Loading, true);

    assert!(should_trigger_search_input_attention(None, &required));
    assert!(should_trigger_search_input_attention(Some(&loading), &required));
    assert!(!should_trigger_search_input_attention(Some(&required), &required));
    assert!(!should_trigger_search_input_attention(Some(&required), &loading));
}

#[test]
fn attention_tracker_fires_once_per_entry_into_required_state() {
    let mut tracker = AttentionTracker::new();
    let required = snapshot(SearchResultsState::Error, false);

    assert!(!tracker.observe(snapshot(SearchResultsState::Idle, true)));
    assert!(tracker.observe(required));
    assert!(!tracker.observe(required));
    assert!(!tracker.observe(required));
    assert!(!tracker.observe(snapshot(SearchResultsState::Loading, true)));
    assert!(tracker.observe(required));
}
