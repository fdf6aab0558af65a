use serde::{Deserialize, Serialize};

use crate::attention::AttentionSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchResultsState {
    #[default]
    Idle,
    Loading,
    Success,
    Empty,
    Error,
}

/// One video card as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultCard {
    pub video_id: String,
    pub title: String,
    pub channel_name: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub duration_text: Option<String>,
    #[serde(default)]
    pub published_date_text: Option<String>,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub view_count_text: Option<String>,
    #[serde(default)]
    pub subscriber_count_text: Option<String>,
    #[serde(default)]
    pub channel_grade: Option<String>,
    #[serde(default)]
    pub is_short_form: Option<bool>,
    #[serde(default)]
    pub badge_label: Option<String>,
}

/// Result of one `execute` call on the request executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Identical to the last successful request; nothing was sent.
    Skipped,
    /// A newer request replaced this one while it was in flight; its
    /// response was dropped.
    Superseded,
    Success { items: Vec<SearchResultCard> },
    Error { message: String, retryable: bool },
}

/// Display projection of the search surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub state: SearchResultsState,
    pub items: Vec<SearchResultCard>,
    pub error_message: Option<String>,
    pub retryable: bool,
}

impl Default for SearchView {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl SearchView {
    pub fn new(initial_items: Vec<SearchResultCard>) -> Self {
        Self {
            state: SearchResultsState::Idle,
            items: initial_items,
            error_message: None,
            retryable: true,
        }
    }

    /// Enters `Loading` and returns the view as it was, so a skipped request
    /// can put it back untouched.
    pub fn begin_loading(&mut self) -> SearchView {
        let previous = self.clone();
        self.state = SearchResultsState::Loading;
        self.error_message = None;
        self.retryable = true;
        previous
    }

    pub fn apply_outcome(&mut self, outcome: SearchOutcome, previous: SearchView) {
        match outcome {
            SearchOutcome::Skipped => *self = previous,
            // The newer request owns the view.
            SearchOutcome::Superseded => {}
            SearchOutcome::Error { message, retryable } => {
                self.items.clear();
                self.error_message = Some(message);
                self.retryable = retryable;
                self.state = SearchResultsState::Error;
            }
            SearchOutcome::Success { items } => {
                self.state = if items.is_empty() {
                    SearchResultsState::Empty
                } else {
                    SearchResultsState::Success
                };
                self.items = items;
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn attention_snapshot(&self) -> AttentionSnapshot {
        AttentionSnapshot {
            results_state: self.state,
            retryable: self.retryable,
        }
    }

    /// Helper text and primary action for the error panel, if one is shown.
    pub fn error_ui_policy(&self) -> Option<SearchErrorUiPolicy> {
        (self.state == SearchResultsState::Error)
            .then(|| SearchErrorUiPolicy::for_retryable(self.retryable))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchErrorUiPolicy {
    pub helper_message: &'static str,
    pub primary_action_label: &'static str,
}

impl SearchErrorUiPolicy {
    pub fn for_retryable(retryable: bool) -> Self {
        if retryable {
            Self {
                helper_message: "This looks temporary. Retrying the same search usually helps.",
                primary_action_label: "Retry search",
            }
        } else {
            Self {
                helper_message: "Adjust the keyword or filters before searching again.",
                primary_action_label: "Edit search",
            }
        }
    }
}
