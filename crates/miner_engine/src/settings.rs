use std::time::Duration;

pub const LOCAL_API_BASE_URL: &str = "http://localhost:8000/api";
pub const PRODUCTION_API_BASE_URL: &str = "https://yt-search-mytn.onrender.com/api";
pub const DEFAULT_SEARCH_PATH: &str = "/search/videos";
pub const ANALYSIS_JOBS_PATH: &str = "/analysis/jobs";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub search_path: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: LOCAL_API_BASE_URL.to_string(),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_trailing_slash(&base_url.into()).to_string(),
            ..Self::default()
        }
    }
}

/// Picks the API base URL: a non-blank configured value wins, otherwise local
/// hosts talk to the local backend and everything else to production.
pub fn resolve_base_url(configured: Option<&str>, hostname: &str) -> String {
    if let Some(configured) = configured.map(str::trim).filter(|value| !value.is_empty()) {
        return trim_trailing_slash(configured).to_string();
    }
    if hostname == "localhost" || hostname == "127.0.0.1" {
        LOCAL_API_BASE_URL.to_string()
    } else {
        PRODUCTION_API_BASE_URL.to_string()
    }
}

fn trim_trailing_slash(value: &str) -> &str {
    value.strip_suffix('/').unwrap_or(value)
}

#[derive(Debug, Clone, Copy)]
pub struct ExecutorSettings {
    /// Pause before each non-skipped search; absorbs bursts while typing.
    pub warmup_delay: Duration,
}

impl Default for ExecutorSettings {
    fn default() -> Self {
        Self {
            warmup_delay: Duration::from_millis(250),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PollSettings {
    pub interval: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1200),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_base_url_wins_and_loses_trailing_slash() {
        assert_eq!(
            resolve_base_url(Some(" https://api.example.com/api/ "), "localhost"),
            "https://api.example.com/api"
        );
    }

    #[test]
    fn blank_configuration_falls_back_by_host() {
        assert_eq!(resolve_base_url(Some("  "), "127.0.0.1"), LOCAL_API_BASE_URL);
        assert_eq!(resolve_base_url(None, "localhost"), LOCAL_API_BASE_URL);
        assert_eq!(resolve_base_url(None, "miner.example"), PRODUCTION_API_BASE_URL);
    }
}
