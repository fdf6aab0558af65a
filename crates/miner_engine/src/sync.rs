use std::time::{Duration, Instant};

use miner_core::{
    share_url, update, Effect, Msg, SearchQuery, SyncState, TransientNotice, ViewMode, NOTICE_TTL,
    RESTORED_NOTICE_MESSAGE,
};
use miner_logging::miner_debug;

/// The navigable location the query state is mirrored into.
pub trait Location {
    /// Current query string, with or without the leading `?`.
    fn search(&self) -> String;
    /// Replaces the current entry without adding history.
    fn replace(&mut self, search: &str);
}

/// In-process history stack with back/forward navigation.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    origin: String,
    path: String,
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    pub fn new(origin: impl Into<String>, path: impl Into<String>, initial: &str) -> Self {
        Self {
            origin: origin.into(),
            path: path.into(),
            entries: vec![initial.to_string()],
            index: 0,
        }
    }

    /// Adds an entry after the current one, dropping any forward entries.
    pub fn push(&mut self, search: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(search.to_string());
        self.index = self.entries.len() - 1;
    }

    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn share_url(&self) -> String {
        share_url(&self.origin, &self.path, &self.entries[self.index])
    }
}

impl Location for MemoryHistory {
    fn search(&self) -> String {
        self.entries[self.index].clone()
    }

    fn replace(&mut self, search: &str) {
        self.entries[self.index] = search.to_string();
    }
}

/// Keeps the query state and a [`Location`] in step. Runs location effects
/// itself and hands back the query a navigation wants searched.
pub struct QuerySyncController<L: Location> {
    state: SyncState,
    location: L,
    notice: Option<TransientNotice>,
    notice_ttl: Duration,
}

impl<L: Location> QuerySyncController<L> {
    pub fn new(location: L, auto_search_on_navigation: bool) -> Self {
        let state = SyncState::from_location(&location.search(), auto_search_on_navigation);
        Self {
            state,
            location,
            notice: None,
            notice_ttl: NOTICE_TTL,
        }
    }

    pub fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.notice_ttl = ttl;
        self
    }

    pub fn state(&self) -> &SyncState {
        &self.state
    }

    pub fn query(&self) -> &SearchQuery {
        self.state.query()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode()
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    pub fn set_query(&mut self, query: SearchQuery) {
        self.dispatch(Msg::QueryEdited(query));
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.dispatch(Msg::ViewModeChanged(view_mode));
    }

    pub fn set_auto_search(&mut self, enabled: bool) {
        self.dispatch(Msg::AutoSearchToggled(enabled));
    }

    /// Call after the location moved on its own (back/forward). Returns the
    /// query to search when the navigation asks for one.
    pub fn handle_navigation(&mut self) -> Option<SearchQuery> {
        let search = self.location.search();
        self.dispatch(Msg::Navigated { search })
    }

    /// The restored-search notice, while it has not expired.
    pub fn notice_at(&self, now: Instant) -> Option<&TransientNotice> {
        self.notice.as_ref().filter(|notice| notice.is_active(now))
    }

    pub fn notice(&self) -> Option<&TransientNotice> {
        self.notice_at(Instant::now())
    }

    fn dispatch(&mut self, msg: Msg) -> Option<SearchQuery> {
        let (state, effects) = update(std::mem::take(&mut self.state), msg);
        self.state = state;
        let mut search = None;
        for effect in effects {
            match effect {
                Effect::ReplaceUrl { search } => {
                    miner_debug!("location replaced with {:?}", search);
                    self.location.replace(&search);
                }
                Effect::RunSearch(query) => search = Some(query),
                Effect::ShowRestoredNotice => {
                    self.notice = Some(TransientNotice::new(
                        RESTORED_NOTICE_MESSAGE,
                        Instant::now(),
                        self.notice_ttl,
                    ));
                }
            }
        }
        search
    }
}
