use std::fmt;

use crate::{SearchFilters, SearchQuery};

const FIELD_SEPARATOR: char = '|';
const CREDENTIAL_SEPARATOR: char = ',';

/// Canonical identity of one search parameterization.
///
/// Keyword and channel are trimmed and lowercased, country is trimmed and
/// uppercased, credentials are trimmed and kept in caller order. Free-text
/// segments are escaped so a separator typed into a field cannot make two
/// different requests collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestKey(String);

impl RequestKey {
    pub fn new(query: &SearchQuery, filters: &SearchFilters, credentials: &[String]) -> Self {
        let credentials = credentials
            .iter()
            .map(|credential| escape(credential.trim()))
            .collect::<Vec<_>>()
            .join(&CREDENTIAL_SEPARATOR.to_string());

        let segments = [
            escape(&query.keyword.trim().to_lowercase()),
            escape(&query.channel.trim().to_lowercase()),
            query.topic.as_str().to_string(),
            query.result_limit.to_string(),
            filters.sort.as_str().to_string(),
            filters.period.as_str().to_string(),
            filters.min_views.to_string(),
            escape(&filters.country.trim().to_uppercase()),
            filters.max_subscribers.to_string(),
            filters.subscriber_public_only.to_string(),
            filters.duration_bucket.as_str().to_string(),
            filters.short_form_type.as_str().to_string(),
            filters.script_type.as_str().to_string(),
            filters.hover_metric.as_str().to_string(),
            filters.min_performance.to_string(),
            filters.core_preset.as_str().to_string(),
            credentials,
        ];

        Self(segments.join(&FIELD_SEPARATOR.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch == '\\' || ch == FIELD_SEPARATOR || ch == CREDENTIAL_SEPARATOR {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
