use std::fmt;

use miner_core::error::codes;
use miner_core::{map_analysis_error, map_search_error, DisplayError, SearchErrorPresentation};

/// Failure of one call against the search or analysis API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The server answered with a non-success status and an error code.
    pub fn rejected(
        status: u16,
        code: impl Into<String>,
        message: impl Into<String>,
        retry_after_seconds: Option<u64>,
    ) -> Self {
        Self::new(
            FailureKind::Rejected {
                status,
                code: code.into(),
                retry_after_seconds,
            },
            message,
        )
    }

    /// Server error code, present only for rejections.
    pub fn code(&self) -> Option<&str> {
        match &self.kind {
            FailureKind::Rejected { code, .. } => Some(code),
            _ => None,
        }
    }

    pub fn retry_after_seconds(&self) -> Option<u64> {
        match &self.kind {
            FailureKind::Rejected {
                retry_after_seconds,
                ..
            } => *retry_after_seconds,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    Rejected {
        status: u16,
        code: String,
        retry_after_seconds: Option<u64>,
    },
    Timeout,
    Network,
    /// A success response whose body did not have the expected shape.
    InvalidPayload,
    InvalidUrl,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Rejected { status, code, .. } => {
                write!(f, "rejected {code} (http {status})")
            }
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::InvalidPayload => write!(f, "invalid payload"),
            FailureKind::InvalidUrl => write!(f, "invalid url"),
        }
    }
}

/// Search error mapping collaborator used by the request executor.
pub type SearchErrorMapper = fn(&ApiError) -> SearchErrorPresentation;

/// Analysis error mapping collaborator used by the job poller for failed calls.
pub type AnalysisFailureMapper = fn(&ApiError) -> DisplayError;

pub fn map_search_api_error(err: &ApiError) -> SearchErrorPresentation {
    map_search_error(err.code(), Some(&err.message))
}

/// Rejections go through the code table; a broken success payload is an
/// output-validation failure; anything else on the wire counts as a timeout.
pub fn map_analysis_api_error(err: &ApiError) -> DisplayError {
    match &err.kind {
        FailureKind::Rejected {
            code,
            retry_after_seconds,
            ..
        } => map_analysis_error(Some(code), Some(&err.message), *retry_after_seconds),
        FailureKind::InvalidPayload => {
            map_analysis_error(Some(codes::ANALYSIS_OUTPUT_INVALID), None, None)
        }
        FailureKind::Timeout | FailureKind::Network | FailureKind::InvalidUrl => {
            map_analysis_error(Some(codes::ANALYSIS_TIMEOUT), None, None)
        }
    }
}
