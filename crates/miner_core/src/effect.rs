use crate::SearchQuery;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace (never push) the current history entry's query string.
    ReplaceUrl { search: String },
    /// Run the search collaborator with this query.
    RunSearch(SearchQuery),
    /// Surface the transient "restored from history" notice.
    ShowRestoredNotice,
}
