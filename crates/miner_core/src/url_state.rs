use url::form_urlencoded;

use crate::options::{ResultLimit, Topic, ViewMode};
use crate::SearchQuery;

const KEY_KEYWORD: &str = "q";
const KEY_CHANNEL: &str = "channel";
const KEY_VIEW: &str = "view";
const KEY_TOPIC: &str = "topic";
const KEY_LIMIT: &str = "limit";

/// The part of the search state that lives in the address bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryUrlState {
    pub query: SearchQuery,
    pub view_mode: ViewMode,
}

impl QueryUrlState {
    pub fn new(query: SearchQuery, view_mode: ViewMode) -> Self {
        Self { query, view_mode }
    }

    /// Parses a location query string, with or without the leading `?`.
    ///
    /// The first occurrence of a key wins. Unknown keys are ignored and values
    /// outside the allow-list fall back to the default.
    pub fn parse(search: &str) -> Self {
        let raw = search.strip_prefix('?').unwrap_or(search);

        let mut keyword = None;
        let mut channel = None;
        let mut view = None;
        let mut topic = None;
        let mut limit = None;

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            let slot = match key.as_ref() {
                KEY_KEYWORD => &mut keyword,
                KEY_CHANNEL => &mut channel,
                KEY_VIEW => &mut view,
                KEY_TOPIC => &mut topic,
                KEY_LIMIT => &mut limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        Self {
            query: SearchQuery {
                keyword: keyword.unwrap_or_default(),
                channel: channel.unwrap_or_default(),
                topic: topic.as_deref().and_then(Topic::parse).unwrap_or_default(),
                result_limit: limit
                    .as_deref()
                    .and_then(ResultLimit::parse)
                    .unwrap_or_default(),
            },
            view_mode: view.as_deref().and_then(ViewMode::parse).unwrap_or_default(),
        }
    }

    /// Serializes to `""` or `"?…"`, emitting only fields that differ from
    /// their default.
    pub fn to_search_string(&self) -> String {
        let mut params = form_urlencoded::Serializer::new(String::new());

        let keyword = self.query.keyword.trim();
        let channel = self.query.channel.trim();

        if !keyword.is_empty() {
            params.append_pair(KEY_KEYWORD, keyword);
        }
        if !channel.is_empty() {
            params.append_pair(KEY_CHANNEL, channel);
        }
        if self.view_mode != ViewMode::default() {
            params.append_pair(KEY_VIEW, self.view_mode.as_str());
        }
        if self.query.topic != Topic::default() {
            params.append_pair(KEY_TOPIC, self.query.topic.as_str());
        }
        if self.query.result_limit != ResultLimit::default() {
            params.append_pair(KEY_LIMIT, &self.query.result_limit.to_string());
        }

        let built = params.finish();
        if built.is_empty() {
            built
        } else {
            format!("?{built}")
        }
    }
}

/// Shareable address of the current view.
pub fn share_url(origin: &str, path: &str, search: &str) -> String {
    format!("{origin}{path}{search}")
}
