use crate::options::{
    CorePreset, DurationBucket, HoverMetric, Period, ResultLimit, ScriptType, ShortFormType,
    SortOption, Topic,
};

/// User intent for a video search. Replaced wholesale on edit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    pub keyword: String,
    pub channel: String,
    pub topic: Topic,
    pub result_limit: ResultLimit,
}

impl SearchQuery {
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Self::default()
        }
    }

    /// True when neither keyword nor channel carries any text.
    pub fn is_blank(&self) -> bool {
        self.keyword.trim().is_empty() && self.channel.trim().is_empty()
    }
}

/// Sort, period, threshold and enumerated filters applied on top of a query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchFilters {
    pub sort: SortOption,
    pub period: Period,
    pub min_views: u64,
    pub country: String,
    /// 0 means no upper bound.
    pub max_subscribers: u64,
    pub subscriber_public_only: bool,
    pub duration_bucket: DurationBucket,
    pub short_form_type: ShortFormType,
    pub script_type: ScriptType,
    pub hover_metric: HoverMetric,
    pub min_performance: u32,
    pub core_preset: CorePreset,
}

/// Overlays the values a preset stands for and records the preset itself.
/// Fields a preset does not mention keep their current value.
pub fn apply_core_preset(filters: &SearchFilters, preset: CorePreset) -> SearchFilters {
    let mut next = filters.clone();
    match preset {
        CorePreset::None => {}
        CorePreset::NewRapidGrowth => {
            next.period = Period::Last30Days;
            next.min_views = 100_000;
            next.max_subscribers = 300_000;
            next.min_performance = 50;
        }
        CorePreset::EfficiencyMonster => {
            next.period = Period::Last30Days;
            next.min_views = 50_000;
            next.max_subscribers = 100_000;
            next.min_performance = 70;
            next.subscriber_public_only = true;
        }
        CorePreset::FastRising => {
            next.period = Period::Last7Days;
            next.min_views = 50_000;
            next.min_performance = 60;
        }
        CorePreset::KrTrend => {
            next.period = Period::Last7Days;
            next.country = "KR".to_string();
            next.min_views = 30_000;
            next.min_performance = 30;
        }
        CorePreset::GlobalTrend => {
            next.period = Period::Last7Days;
            next.country = String::new();
            next.min_views = 50_000;
            next.min_performance = 30;
        }
    }
    next.core_preset = preset;
    next
}
