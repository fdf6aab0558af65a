use miner_core::error::codes;
use miner_core::{AnalysisStatusData, SearchResultCard};
use miner_logging::miner_debug;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::settings::ANALYSIS_JOBS_PATH;
use crate::{AnalysisApi, ApiError, ClientSettings, FailureKind, SearchApi, SearchParams};

pub const API_KEYS_HEADER: &str = "X-YouTube-Api-Keys";

const SEARCH_FALLBACK_MESSAGE: &str = "The search request failed.";
const ANALYSIS_FALLBACK_MESSAGE: &str = "The analysis request failed.";

#[derive(Deserialize)]
struct SuccessEnvelope<T> {
    success: bool,
    data: T,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    success: bool,
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateJobBody<'a> {
    video_id: &'a str,
    force_refresh: bool,
}

#[derive(Deserialize)]
struct SearchData {
    items: Vec<SearchResultCard>,
}

/// Fallbacks used when a rejected response has no readable error envelope.
struct Fallback {
    code: &'static str,
    message: &'static str,
}

const SEARCH_FALLBACK: Fallback = Fallback {
    code: codes::COMMON_INVALID_REQUEST,
    message: SEARCH_FALLBACK_MESSAGE,
};

const ANALYSIS_FALLBACK: Fallback = Fallback {
    code: codes::ANALYSIS_TIMEOUT,
    message: ANALYSIS_FALLBACK_MESSAGE,
};

/// HTTP client for the search and analysis endpoints.
#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    client: reqwest::Client,
    settings: ClientSettings,
}

impl ReqwestApiClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.settings.base_url, path);
        Url::parse(&raw).map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    /// Full search URL including every filter as a query parameter.
    pub fn search_url(&self, params: &SearchParams) -> Result<Url, ApiError> {
        let mut url = self.endpoint(&self.settings.search_path)?;
        let query = &params.query;
        let filters = &params.filters;
        {
            let mut pairs = url.query_pairs_mut();
            let keyword = query.keyword.trim();
            if !keyword.is_empty() {
                pairs.append_pair("q", keyword);
            }
            let channel = query.channel.trim();
            if !channel.is_empty() {
                pairs.append_pair("channel", channel);
            }
            pairs
                .append_pair("topic", query.topic.as_str())
                .append_pair("resultLimit", &query.result_limit.value().to_string())
                .append_pair("sort", filters.sort.as_str())
                .append_pair("period", filters.period.as_str())
                .append_pair("minViews", &filters.min_views.to_string());
            let country = filters.country.trim();
            if !country.is_empty() {
                pairs.append_pair("country", &country.to_uppercase());
            }
            pairs
                .append_pair("maxSubscribers", &filters.max_subscribers.to_string())
                .append_pair(
                    "subscriberPublicOnly",
                    if filters.subscriber_public_only { "true" } else { "false" },
                )
                .append_pair("durationBucket", filters.duration_bucket.as_str())
                .append_pair("shortFormType", filters.short_form_type.as_str())
                .append_pair("scriptType", filters.script_type.as_str())
                .append_pair("hoverMetric", filters.hover_metric.as_str())
                .append_pair("minPerformance", &filters.min_performance.to_string())
                .append_pair("corePreset", filters.core_preset.as_str());
        }
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        fallback: &Fallback,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let retry_after = parse_retry_after(response.headers());
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let (code, message) = match serde_json::from_slice::<ErrorEnvelope>(&body) {
                Ok(envelope) if !envelope.success => (envelope.error.code, envelope.error.message),
                _ => (fallback.code.to_string(), fallback.message.to_string()),
            };
            miner_debug!("api rejected with {} ({})", code, status);
            return Err(ApiError::rejected(status.as_u16(), code, message, retry_after));
        }

        let envelope: SuccessEnvelope<T> = serde_json::from_slice(&body)
            .map_err(|err| ApiError::new(FailureKind::InvalidPayload, err.to_string()))?;
        if !envelope.success {
            return Err(ApiError::new(
                FailureKind::InvalidPayload,
                "success status with a failure envelope",
            ));
        }
        Ok(envelope.data)
    }
}

#[async_trait::async_trait]
impl SearchApi for ReqwestApiClient {
    async fn search_videos(&self, params: &SearchParams) -> Result<Vec<SearchResultCard>, ApiError> {
        let url = self.search_url(params)?;
        let mut request = self.client.get(url);
        if let Some(keys) = params.header_credentials() {
            request = request.header(API_KEYS_HEADER, keys);
        }
        let data: SearchData = self.send(request, &SEARCH_FALLBACK).await?;
        Ok(data.items)
    }
}

#[async_trait::async_trait]
impl AnalysisApi for ReqwestApiClient {
    async fn create_job(
        &self,
        video_id: &str,
        force_refresh: bool,
    ) -> Result<AnalysisStatusData, ApiError> {
        let url = self.endpoint(ANALYSIS_JOBS_PATH)?;
        let body = CreateJobBody {
            video_id,
            force_refresh,
        };
        let request = self.client.post(url).json(&body);
        self.send(request, &ANALYSIS_FALLBACK).await
    }

    async fn get_job_status(&self, job_id: &str) -> Result<AnalysisStatusData, ApiError> {
        let mut url = self.endpoint(ANALYSIS_JOBS_PATH)?;
        url.path_segments_mut()
            .map_err(|_| ApiError::new(FailureKind::InvalidUrl, "base url cannot hold a path"))?
            .push(job_id);
        self.send(self.client.get(url), &ANALYSIS_FALLBACK).await
    }
}

/// Leading decimal digits of `Retry-After`; dates and negative values are ignored.
fn parse_retry_after(headers: &HeaderMap) -> Option<u64> {
    let value = headers.get(RETRY_AFTER)?.to_str().ok()?.trim();
    let digits: String = value.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
