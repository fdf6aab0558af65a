use miner_core::{AnalysisStatusData, SearchFilters, SearchQuery, SearchResultCard};

use crate::ApiError;

/// Everything one search request sends to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: SearchQuery,
    pub filters: SearchFilters,
    pub credentials: Vec<String>,
}

impl SearchParams {
    /// Trimmed, non-empty credentials in their given order.
    pub fn header_credentials(&self) -> Option<String> {
        let keys: Vec<&str> = self
            .credentials
            .iter()
            .map(|key| key.trim())
            .filter(|key| !key.is_empty())
            .collect();
        if keys.is_empty() {
            None
        } else {
            Some(keys.join(","))
        }
    }
}

#[async_trait::async_trait]
pub trait SearchApi: Send + Sync {
    async fn search_videos(&self, params: &SearchParams) -> Result<Vec<SearchResultCard>, ApiError>;
}

#[async_trait::async_trait]
pub trait AnalysisApi: Send + Sync {
    async fn create_job(
        &self,
        video_id: &str,
        force_refresh: bool,
    ) -> Result<AnalysisStatusData, ApiError>;

    async fn get_job_status(&self, job_id: &str) -> Result<AnalysisStatusData, ApiError>;
}
