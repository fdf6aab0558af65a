use crate::options::ViewMode;
use crate::SearchQuery;

/// Everything the history-navigation decision looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopStateSyncInputs<'a> {
    pub parsed_query: &'a SearchQuery,
    pub parsed_view_mode: ViewMode,
    pub current_query: &'a SearchQuery,
    pub current_view_mode: ViewMode,
    pub auto_search_on_navigation: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopStateSyncDecision {
    pub has_query_changed: bool,
    pub has_view_mode_changed: bool,
    pub should_apply_state: bool,
    pub should_trigger_search: bool,
    pub should_show_restored_notice: bool,
}

/// Decides what a back/forward navigation should do to in-memory state.
///
/// A view-mode-only change is adopted but never re-runs the search.
pub fn evaluate_pop_state_sync(inputs: &PopStateSyncInputs<'_>) -> PopStateSyncDecision {
    let has_query_changed = inputs.parsed_query != inputs.current_query;
    let has_view_mode_changed = inputs.parsed_view_mode != inputs.current_view_mode;
    let should_trigger_search = has_query_changed && inputs.auto_search_on_navigation;

    PopStateSyncDecision {
        has_query_changed,
        has_view_mode_changed,
        should_apply_state: has_query_changed || has_view_mode_changed,
        should_trigger_search,
        should_show_restored_notice: should_trigger_search,
    }
}
