//! Material miner engine: HTTP collaborators and the async controllers.
mod api;
mod client;
mod executor;
mod poller;
mod search;
mod settings;
mod sync;
mod types;

pub use api::{AnalysisApi, SearchApi, SearchParams};
pub use client::{ReqwestApiClient, API_KEYS_HEADER};
pub use executor::RequestExecutor;
pub use poller::JobPoller;
pub use search::SearchController;
pub use settings::{
    resolve_base_url, ClientSettings, ExecutorSettings, PollSettings, LOCAL_API_BASE_URL,
    PRODUCTION_API_BASE_URL,
};
pub use sync::{Location, MemoryHistory, QuerySyncController};
pub use types::{
    map_analysis_api_error, map_search_api_error, AnalysisFailureMapper, ApiError, FailureKind,
    SearchErrorMapper,
};
