use crate::options::ViewMode;
use crate::url_state::QueryUrlState;
use crate::SearchQuery;

/// In-memory side of the address-bar synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyncState {
    query: SearchQuery,
    view_mode: ViewMode,
    /// Query string most recently written to or read from the location.
    last_applied: String,
    auto_search_on_navigation: bool,
}

impl SyncState {
    /// Seeds state from the location the page was opened with.
    pub fn from_location(search: &str, auto_search_on_navigation: bool) -> Self {
        let parsed = QueryUrlState::parse(search);
        Self {
            query: parsed.query,
            view_mode: parsed.view_mode,
            last_applied: search.to_string(),
            auto_search_on_navigation,
        }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn last_applied(&self) -> &str {
        &self.last_applied
    }

    pub fn auto_search_on_navigation(&self) -> bool {
        self.auto_search_on_navigation
    }

    pub fn url_state(&self) -> QueryUrlState {
        QueryUrlState::new(self.query.clone(), self.view_mode)
    }

    pub(crate) fn set_query(&mut self, query: SearchQuery) {
        self.query = query;
    }

    pub(crate) fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    pub(crate) fn set_last_applied(&mut self, search: impl Into<String>) {
        self.last_applied = search.into();
    }

    pub(crate) fn set_auto_search(&mut self, enabled: bool) {
        self.auto_search_on_navigation = enabled;
    }
}
