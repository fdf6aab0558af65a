//! Miner core: search/analysis data model and pure decision functions.
//!
//! Nothing in this crate performs I/O or awaits. The engine crate wraps these
//! types in the async controllers.
mod analysis;
mod attention;
mod effect;
pub mod error;
mod msg;
mod notice;
mod options;
mod pop_state;
mod query;
mod request_key;
mod search_view;
mod state;
mod update;
mod url_state;

pub use analysis::{
    AnalysisMeta, AnalysisPhase, AnalysisResult, AnalysisStatusData, AnalysisSummary,
    AnalysisView, ContentIdea, JobError, JobStatus, LoadingState, IN_PROGRESS_MESSAGE,
    PREPARING_MESSAGE,
};
pub use attention::{
    is_search_input_attention_required, should_trigger_search_input_attention,
    AttentionSnapshot, AttentionTracker,
};
pub use effect::Effect;
pub use error::{
    map_analysis_error, map_search_error, AnalysisErrorMapper, DisplayError, ErrorClass,
    SearchErrorPresentation,
};
pub use msg::Msg;
pub use notice::{TransientNotice, NOTICE_TTL, RESTORED_NOTICE_MESSAGE};
pub use options::{
    CorePreset, DurationBucket, HoverMetric, Period, ResultLimit, ScriptType, ShortFormType,
    SortOption, Topic, ViewMode,
};
pub use pop_state::{evaluate_pop_state_sync, PopStateSyncDecision, PopStateSyncInputs};
pub use query::{apply_core_preset, SearchFilters, SearchQuery};
pub use request_key::RequestKey;
pub use search_view::{
    SearchErrorUiPolicy, SearchOutcome, SearchResultCard, SearchResultsState, SearchView,
};
pub use state::SyncState;
pub use update::update;
pub use url_state::{share_url, QueryUrlState};
