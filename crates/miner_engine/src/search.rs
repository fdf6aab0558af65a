use miner_core::{SearchFilters, SearchOutcome, SearchQuery, SearchResultCard, SearchView};
use tokio::sync::watch;

use crate::RequestExecutor;

/// Owns the search projection and drives it through the executor.
pub struct SearchController {
    executor: RequestExecutor,
    view: watch::Sender<SearchView>,
}

impl SearchController {
    pub fn new(executor: RequestExecutor, initial_items: Vec<SearchResultCard>) -> Self {
        let (view, _) = watch::channel(SearchView::new(initial_items));
        Self { executor, view }
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchView> {
        self.view.subscribe()
    }

    pub fn view(&self) -> SearchView {
        self.view.borrow().clone()
    }

    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    pub async fn run_search(
        &self,
        query: &SearchQuery,
        filters: &SearchFilters,
        credentials: &[String],
    ) -> SearchOutcome {
        let mut previous = None;
        self.view.send_modify(|view| previous = Some(view.begin_loading()));
        let outcome = self.executor.execute(query, filters, credentials).await;
        self.view.send_modify(|view| {
            let previous = previous.take().unwrap_or_else(|| view.clone());
            view.apply_outcome(outcome.clone(), previous);
        });
        outcome
    }

    /// Clears the projection and the executor's dedup memory.
    pub fn reset_search(&self) {
        self.executor.reset();
        self.view.send_modify(SearchView::reset);
    }
}
