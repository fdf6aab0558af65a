use std::fmt::Write;

use miner_core::{AnalysisPhase, AnalysisView, SearchResultsState, SearchView, ViewMode};

pub fn describe_search(view: &SearchView, view_mode: ViewMode) -> String {
    match view.state {
        SearchResultsState::Idle => "No search yet.".to_string(),
        SearchResultsState::Loading => "Searching...".to_string(),
        SearchResultsState::Empty => "No videos matched.".to_string(),
        SearchResultsState::Error => {
            let mut out = view
                .error_message
                .clone()
                .unwrap_or_else(|| "Search failed.".to_string());
            if let Some(policy) = view.error_ui_policy() {
                let _ = write!(out, "\n{} [{}]", policy.helper_message, policy.primary_action_label);
            }
            out
        }
        SearchResultsState::Success => {
            let mut out = format!("{} videos", view.items.len());
            for (index, card) in view.items.iter().enumerate() {
                match view_mode {
                    ViewMode::Grid => {
                        let _ = write!(out, "\n  [{}] {}", card.video_id, card.title);
                    }
                    ViewMode::List => {
                        let views = card.view_count_text.as_deref().unwrap_or("-");
                        let _ = write!(
                            out,
                            "\n  {:>3}. {} | {} | {} views | {}",
                            index + 1,
                            card.title,
                            card.channel_name,
                            views,
                            card.video_id
                        );
                    }
                }
            }
            out
        }
    }
}

pub fn describe_analysis(view: &AnalysisView) -> String {
    match view.phase {
        AnalysisPhase::Idle => "Analysis idle.".to_string(),
        AnalysisPhase::Loading => match view.loading.progress {
            Some(progress) => format!("{} ({}%)", view.loading.message, progress),
            None => view.loading.message.clone(),
        },
        AnalysisPhase::Error => match &view.error {
            Some(error) => {
                let action = if error.retryable { "retry" } else { "close" };
                format!("{}: {} [{}]", error.title, error.message, action)
            }
            None => "Analysis failed.".to_string(),
        },
        AnalysisPhase::Success => match &view.result {
            Some(result) => {
                let mut out = format!(
                    "Reactions: {}\nStrengths: {}\nWeak points: {}",
                    result.summary.major_reactions,
                    result.summary.positive_points,
                    result.summary.weak_points
                );
                for idea in &result.content_ideas {
                    let _ = write!(out, "\n  idea: {} - {}", idea.title, idea.description);
                }
                if !result.recommended_keywords.is_empty() {
                    let _ = write!(out, "\nKeywords: {}", result.recommended_keywords.join(", "));
                }
                out
            }
            None => "Analysis finished without a result.".to_string(),
        },
    }
}
