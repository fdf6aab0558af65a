use crate::pop_state::{evaluate_pop_state_sync, PopStateSyncInputs};
use crate::url_state::QueryUrlState;
use crate::{Effect, Msg, SyncState};

/// Pure update function: applies a message to the sync state and returns the
/// effects the shell has to perform.
pub fn update(mut state: SyncState, msg: Msg) -> (SyncState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryEdited(query) => {
            state.set_query(query);
            reconcile_url(&mut state)
        }
        Msg::ViewModeChanged(view_mode) => {
            state.set_view_mode(view_mode);
            reconcile_url(&mut state)
        }
        Msg::Navigated { search } => {
            let parsed = QueryUrlState::parse(&search);
            let decision = evaluate_pop_state_sync(&PopStateSyncInputs {
                parsed_query: &parsed.query,
                parsed_view_mode: parsed.view_mode,
                current_query: state.query(),
                current_view_mode: state.view_mode(),
                auto_search_on_navigation: state.auto_search_on_navigation(),
            });

            // Bookkeeping only: the location already shows this string, so the
            // next outbound comparison must not write it back.
            state.set_last_applied(search);
            if !decision.should_apply_state {
                return (state, Vec::new());
            }

            state.set_query(parsed.query);
            state.set_view_mode(parsed.view_mode);

            let mut effects = reconcile_url(&mut state);
            if decision.should_trigger_search {
                effects.push(Effect::RunSearch(state.query().clone()));
            }
            if decision.should_show_restored_notice {
                effects.push(Effect::ShowRestoredNotice);
            }
            effects
        }
        Msg::AutoSearchToggled(enabled) => {
            state.set_auto_search(enabled);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Outbound half of the sync: replace the entry when the canonical string
/// drifted from what the location last showed.
fn reconcile_url(state: &mut SyncState) -> Vec<Effect> {
    let next = state.url_state().to_search_string();
    if next == state.last_applied() {
        return Vec::new();
    }
    state.set_last_applied(next.clone());
    vec![Effect::ReplaceUrl { search: next }]
}
