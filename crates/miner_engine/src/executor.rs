use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use miner_core::{RequestKey, SearchFilters, SearchOutcome, SearchQuery};
use miner_logging::{miner_debug, miner_info, miner_warn};

use crate::{map_search_api_error, ExecutorSettings, SearchApi, SearchErrorMapper, SearchParams};

/// Runs searches, skipping a request identical to the last one that did not
/// fail. A failure forgets the request so the same input can be retried, and
/// a response that arrives after a newer request was marked is dropped.
pub struct RequestExecutor {
    api: Arc<dyn SearchApi>,
    settings: ExecutorSettings,
    map_error: SearchErrorMapper,
    last_key: Mutex<Option<RequestKey>>,
}

impl RequestExecutor {
    pub fn new(api: Arc<dyn SearchApi>, settings: ExecutorSettings) -> Self {
        Self {
            api,
            settings,
            map_error: map_search_api_error,
            last_key: Mutex::new(None),
        }
    }

    pub fn with_error_mapper(mut self, map_error: SearchErrorMapper) -> Self {
        self.map_error = map_error;
        self
    }

    pub async fn execute(
        &self,
        query: &SearchQuery,
        filters: &SearchFilters,
        credentials: &[String],
    ) -> SearchOutcome {
        let key = RequestKey::new(query, filters, credentials);
        {
            let mut last = self.lock_key();
            if last.as_ref() == Some(&key) {
                miner_debug!("search skipped, identical to last request");
                return SearchOutcome::Skipped;
            }
            // Marked before the request so a concurrent identical call is skipped.
            *last = Some(key.clone());
        }

        if !self.settings.warmup_delay.is_zero() {
            tokio::time::sleep(self.settings.warmup_delay).await;
        }

        let params = SearchParams {
            query: query.clone(),
            filters: filters.clone(),
            credentials: credentials.to_vec(),
        };
        let result = self.api.search_videos(&params).await;

        let mut last = self.lock_key();
        if last.as_ref() != Some(&key) {
            drop(last);
            miner_debug!("search response dropped, a newer request replaced it");
            return SearchOutcome::Superseded;
        }
        match result {
            Ok(items) => {
                drop(last);
                miner_info!("search returned {} items", items.len());
                SearchOutcome::Success { items }
            }
            Err(err) => {
                *last = None;
                drop(last);
                miner_warn!("search failed: {}", err);
                let mapped = (self.map_error)(&err);
                SearchOutcome::Error {
                    message: mapped.message,
                    retryable: mapped.retryable,
                }
            }
        }
    }

    /// Forgets the last request; the next call always goes out.
    pub fn reset(&self) {
        *self.lock_key() = None;
    }

    pub fn last_key(&self) -> Option<RequestKey> {
        self.lock_key().clone()
    }

    fn lock_key(&self) -> MutexGuard<'_, Option<RequestKey>> {
        self.last_key.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
