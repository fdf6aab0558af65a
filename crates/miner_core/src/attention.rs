use crate::search_view::SearchResultsState;

/// What the attention policy needs to know about the search surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttentionSnapshot {
    pub results_state: SearchResultsState,
    pub retryable: bool,
}

/// Attention on the query input is wanted only for errors the user has to fix
/// by editing parameters.
pub fn is_search_input_attention_required(snapshot: &AttentionSnapshot) -> bool {
    snapshot.results_state == SearchResultsState::Error && !snapshot.retryable
}

/// Fires on the not-required to required edge only.
pub fn should_trigger_search_input_attention(
    previous: Option<&AttentionSnapshot>,
    current: &AttentionSnapshot,
) -> bool {
    let was_required = previous.is_some_and(is_search_input_attention_required);
    !was_required && is_search_input_attention_required(current)
}

/// Remembers the last observed snapshot so callers can feed every render.
#[derive(Debug, Clone, Default)]
pub struct AttentionTracker {
    previous: Option<AttentionSnapshot>,
}

impl AttentionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `current` and reports whether the attention action should run.
    pub fn observe(&mut self, current: AttentionSnapshot) -> bool {
        let fire = should_trigger_search_input_attention(self.previous.as_ref(), &current);
        self.previous = Some(current);
        fire
    }
}
