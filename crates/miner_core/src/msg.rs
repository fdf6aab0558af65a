use crate::options::ViewMode;
use crate::SearchQuery;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User replaced the query (submit, chip click, clear-all).
    QueryEdited(SearchQuery),
    /// User toggled grid/list.
    ViewModeChanged(ViewMode),
    /// Browser back/forward landed on a location with this query string.
    Navigated { search: String },
    /// Preference toggle for re-running searches on history navigation.
    AutoSearchToggled(bool),
    /// Fallback for placeholder wiring.
    NoOp,
}
