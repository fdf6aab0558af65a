//! Error taxonomy and the mapping from server codes to user-facing text.
//!
//! Nothing here retries. `retryable` only selects which action the UI offers.

/// Server error codes the client knows about.
pub mod codes {
    pub const COMMON_INVALID_REQUEST: &str = "COMMON_INVALID_REQUEST";
    pub const COMMON_UNKNOWN: &str = "COMMON_UNKNOWN";

    pub const SEARCH_QUERY_REQUIRED: &str = "SEARCH_QUERY_REQUIRED";
    pub const SEARCH_QUOTA_EXCEEDED: &str = "SEARCH_QUOTA_EXCEEDED";
    pub const SEARCH_RATE_LIMITED: &str = "SEARCH_RATE_LIMITED";
    pub const SEARCH_UPSTREAM_UNAVAILABLE: &str = "SEARCH_UPSTREAM_UNAVAILABLE";
    pub const SEARCH_UPSTREAM_ERROR: &str = "SEARCH_UPSTREAM_ERROR";

    pub const ANALYSIS_JOB_NOT_FOUND: &str = "ANALYSIS_JOB_NOT_FOUND";
    pub const ANALYSIS_RATE_LIMITED: &str = "ANALYSIS_RATE_LIMITED";
    pub const ANALYSIS_UPSTREAM_UNAVAILABLE: &str = "ANALYSIS_UPSTREAM_UNAVAILABLE";
    pub const ANALYSIS_OUTPUT_INVALID: &str = "ANALYSIS_OUTPUT_INVALID";
    pub const ANALYSIS_TIMEOUT: &str = "ANALYSIS_TIMEOUT";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Rate limits, quota, upstream outages, timeouts.
    TransientRetryable,
    /// The request itself is wrong; retrying unchanged will not help.
    InputInvalid,
    /// The server answered but the payload is unusable.
    OutputInvalid,
}

impl ErrorClass {
    /// Classifies a server code. Unknown codes are assumed transient.
    pub fn of(code: &str) -> Self {
        match code {
            codes::COMMON_INVALID_REQUEST
            | codes::SEARCH_QUERY_REQUIRED
            | codes::ANALYSIS_JOB_NOT_FOUND => ErrorClass::InputInvalid,
            codes::ANALYSIS_OUTPUT_INVALID => ErrorClass::OutputInvalid,
            _ => ErrorClass::TransientRetryable,
        }
    }

    pub fn retryable(self) -> bool {
        !matches!(self, ErrorClass::InputInvalid)
    }
}

/// Error shape rendered by the analysis surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayError {
    pub title: String,
    pub message: String,
    pub code: Option<String>,
    pub retryable: bool,
}

impl DisplayError {
    fn new(title: &str, message: impl Into<String>, code: Option<&str>) -> Self {
        let retryable = code.map(ErrorClass::of).unwrap_or(ErrorClass::TransientRetryable);
        Self {
            title: title.to_string(),
            message: message.into(),
            code: code.map(str::to_string),
            retryable: retryable.retryable(),
        }
    }

    /// Shown when a retry is requested but nothing was ever selected.
    pub fn generic() -> Self {
        Self::new(
            DEFAULT_ANALYSIS_TITLE,
            DEFAULT_ANALYSIS_MESSAGE,
            Some(codes::ANALYSIS_TIMEOUT),
        )
    }
}

/// Signature of the analysis error-mapping collaborator.
pub type AnalysisErrorMapper = fn(Option<&str>, Option<&str>, Option<u64>) -> DisplayError;

const DEFAULT_ANALYSIS_TITLE: &str = "Analysis failed";
const DEFAULT_ANALYSIS_MESSAGE: &str =
    "Something went wrong during the analysis. Please try again shortly.";

/// Maps a server code, message and optional retry-after hint to display text.
pub fn map_analysis_error(
    code: Option<&str>,
    message: Option<&str>,
    retry_after_seconds: Option<u64>,
) -> DisplayError {
    match code {
        Some(code @ codes::COMMON_INVALID_REQUEST) => DisplayError::new(
            "Invalid request",
            "The request is not valid. Please check the input.",
            Some(code),
        ),
        Some(code @ codes::ANALYSIS_JOB_NOT_FOUND) => DisplayError::new(
            "Job not found",
            "The analysis job could not be found. Please start a new analysis.",
            Some(code),
        ),
        Some(code @ codes::ANALYSIS_RATE_LIMITED) => {
            let delay = match retry_after_seconds {
                Some(seconds) => format!("Please try again in {seconds} seconds."),
                None => "Please try again shortly.".to_string(),
            };
            DisplayError::new(
                "Request delayed",
                format!("Too many analysis requests right now. {delay}"),
                Some(code),
            )
        }
        Some(code @ codes::ANALYSIS_UPSTREAM_UNAVAILABLE) => DisplayError::new(
            "Analysis service delayed",
            "The analysis service is not responding well. Please try again shortly.",
            Some(code),
        ),
        Some(code @ codes::ANALYSIS_OUTPUT_INVALID) => DisplayError::new(
            "Result validation failed",
            "The analysis result failed validation. Please try again.",
            Some(code),
        ),
        Some(code @ codes::ANALYSIS_TIMEOUT) => DisplayError::new(
            "Analysis timed out",
            "The analysis took too long. Please try again shortly.",
            Some(code),
        ),
        other => {
            let message = message
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .unwrap_or(DEFAULT_ANALYSIS_MESSAGE);
            DisplayError::new(
                DEFAULT_ANALYSIS_TITLE,
                message,
                Some(other.unwrap_or(codes::ANALYSIS_TIMEOUT)),
            )
        }
    }
}

/// Error shape consumed by the search surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchErrorPresentation {
    pub code: String,
    pub message: String,
    pub retryable: bool,
}

const DEFAULT_SEARCH_MESSAGE: &str =
    "Something went wrong while searching. Adjust the filters and press search to try again.";

/// Maps a search failure. `code` is `None` when the failure never reached the
/// API layer (transport error, cancelled runtime, ...).
pub fn map_search_error(code: Option<&str>, message: Option<&str>) -> SearchErrorPresentation {
    let Some(code) = code else {
        return SearchErrorPresentation {
            code: codes::COMMON_UNKNOWN.to_string(),
            message: DEFAULT_SEARCH_MESSAGE.to_string(),
            retryable: true,
        };
    };

    let known = match code {
        codes::COMMON_INVALID_REQUEST => Some("The request is not valid. Please check the input."),
        codes::SEARCH_QUERY_REQUIRED => Some("Enter a keyword or a channel name to search."),
        codes::SEARCH_QUOTA_EXCEEDED => {
            Some("The search quota has been reached. Please try again later.")
        }
        codes::SEARCH_RATE_LIMITED => {
            Some("Search requests are being delayed. Please try again shortly.")
        }
        codes::SEARCH_UPSTREAM_UNAVAILABLE => {
            Some("The search service is not reachable right now. Please try again shortly.")
        }
        codes::SEARCH_UPSTREAM_ERROR => {
            Some("A temporary error occurred while searching. Please try again shortly.")
        }
        _ => None,
    };

    let message = known
        .or(message.filter(|text| !text.trim().is_empty()))
        .unwrap_or(DEFAULT_SEARCH_MESSAGE);

    SearchErrorPresentation {
        code: code.to_string(),
        message: message.to_string(),
        retryable: ErrorClass::of(code).retryable(),
    }
}
