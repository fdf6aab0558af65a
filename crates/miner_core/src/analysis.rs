use serde::{Deserialize, Serialize};

use crate::error::{AnalysisErrorMapper, DisplayError};

pub const PREPARING_MESSAGE: &str = "Preparing analysis.";
pub const IN_PROGRESS_MESSAGE: &str = "Analysis in progress.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Queued,
    Processing,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobError {
    pub code: String,
    pub message: String,
}

/// Snapshot of a remote analysis job, as returned by create and status calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisStatusData {
    pub job_id: String,
    pub status: JobStatus,
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub step: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Option<AnalysisResult>,
    #[serde(default)]
    pub error: Option<JobError>,
}

impl AnalysisStatusData {
    /// `completed` only counts once the result is attached; the server may flip
    /// the status first.
    pub fn is_terminal(&self) -> bool {
        match self.status {
            JobStatus::Completed => self.result.is_some(),
            JobStatus::Failed => true,
            JobStatus::Queued | JobStatus::Processing => false,
        }
    }

    pub fn needs_polling(&self) -> bool {
        !self.is_terminal()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub major_reactions: String,
    pub positive_points: String,
    pub weak_points: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentIdea {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMeta {
    pub model: String,
    pub analyzed_at: String,
    #[serde(default)]
    pub comment_sample_count: Option<u32>,
    pub analysis_basis: Vec<String>,
    #[serde(default)]
    pub language_summary: Option<Vec<String>>,
    #[serde(default)]
    pub cache_hit: Option<bool>,
    pub analysis_version: String,
    pub schema_version: String,
    #[serde(default)]
    pub warnings: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: AnalysisSummary,
    pub content_ideas: Vec<ContentIdea>,
    pub recommended_keywords: Vec<String>,
    pub meta: AnalysisMeta,
}

/// Progress shown while a job is queued or running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingState {
    pub progress: Option<u8>,
    pub step: Option<String>,
    pub message: String,
}

impl LoadingState {
    pub fn preparing() -> Self {
        Self {
            progress: None,
            step: None,
            message: PREPARING_MESSAGE.to_string(),
        }
    }

    /// Projects a status snapshot, falling back to a status-dependent message
    /// when the server sends none.
    pub fn from_status(data: &AnalysisStatusData) -> Self {
        let message = data
            .message
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .unwrap_or(match data.status {
                JobStatus::Queued => PREPARING_MESSAGE,
                _ => IN_PROGRESS_MESSAGE,
            });

        Self {
            progress: data.progress,
            step: data.step.clone(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Display projection of one analysis surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisView {
    pub phase: AnalysisPhase,
    pub loading: LoadingState,
    pub result: Option<AnalysisResult>,
    pub error: Option<DisplayError>,
}

impl Default for AnalysisView {
    fn default() -> Self {
        Self {
            phase: AnalysisPhase::Idle,
            loading: LoadingState::preparing(),
            result: None,
            error: None,
        }
    }
}

impl AnalysisView {
    pub fn begin(&mut self) {
        self.phase = AnalysisPhase::Loading;
        self.result = None;
        self.error = None;
        self.loading = LoadingState::preparing();
    }

    pub fn apply_status(&mut self, data: &AnalysisStatusData, map_error: AnalysisErrorMapper) {
        match data.status {
            JobStatus::Completed if data.result.is_some() => {
                self.result = data.result.clone();
                self.error = None;
                self.phase = AnalysisPhase::Success;
            }
            JobStatus::Failed => {
                let error = data.error.as_ref();
                self.fail(map_error(
                    error.map(|e| e.code.as_str()),
                    error.map(|e| e.message.as_str()),
                    None,
                ));
            }
            _ => {
                self.loading = LoadingState::from_status(data);
                self.phase = AnalysisPhase::Loading;
            }
        }
    }

    /// Enters `Error`. Any earlier result is dropped rather than shown stale.
    pub fn fail(&mut self, error: DisplayError) {
        self.result = None;
        self.error = Some(error);
        self.phase = AnalysisPhase::Error;
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.phase, AnalysisPhase::Success | AnalysisPhase::Error)
    }
}
