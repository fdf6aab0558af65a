use miner_core::{
    CorePreset, DurationBucket, HoverMetric, Period, RequestKey, ResultLimit, ScriptType,
    SearchFilters, SearchQuery, SortOption, Topic,
};

fn base_query() -> SearchQuery {
    SearchQuery {
        keyword: "가족 대화".to_string(),
        channel: String::new(),
        topic: Topic::All,
        result_limit: ResultLimit::Top50,
    }
}

fn base_filters() -> SearchFilters {
    SearchFilters {
        sort: SortOption::Relevance,
        period: Period::Last7Days,
        ..SearchFilters::default()
    }
}

#[test]
fn logically_equal_requests_share_a_key() {
    let mut noisy = base_query();
    noisy.keyword = "  가족 대화 ".to_string();
    let mut filters = base_filters();
    filters.country = " kr".to_string();
    let mut upper = base_filters();
    upper.country = "KR".to_string();

    let a = RequestKey::new(&noisy, &filters, &[" key-1 ".to_string()]);
    let b = RequestKey::new(&base_query(), &upper, &["key-1".to_string()]);
    assert_eq!(a, b);
}

#[test]
fn keyword_and_channel_case_is_normalized() {
    let lower = SearchQuery {
        channel: "mindlab".to_string(),
        ..SearchQuery::keyword("cats")
    };
    let upper = SearchQuery {
        channel: "MindLab".to_string(),
        ..SearchQuery::keyword("CATS")
    };
    let filters = SearchFilters::default();
    assert_eq!(
        RequestKey::new(&lower, &filters, &[]),
        RequestKey::new(&upper, &filters, &[])
    );
}

#[test]
fn every_single_field_change_changes_the_key() {
    let query = base_query();
    let filters = base_filters();
    let base = RequestKey::new(&query, &filters, &[]);

    let query_variants = [
        SearchQuery {
            keyword: "다른 키워드".into(),
            ..query.clone()
        },
        SearchQuery {
            channel: "mindlab".into(),
            ..query.clone()
        },
        SearchQuery {
            topic: Topic::Food,
            ..query.clone()
        },
        SearchQuery {
            result_limit: ResultLimit::Top150,
            ..query.clone()
        },
    ];
    for variant in &query_variants {
        assert_ne!(RequestKey::new(variant, &filters, &[]), base, "{variant:?}");
    }

    let filter_variants = [
        SearchFilters {
            sort: SortOption::Views,
            ..filters.clone()
        },
        SearchFilters {
            period: Period::Last30Days,
            ..filters.clone()
        },
        SearchFilters {
            min_views: 1_000,
            ..filters.clone()
        },
        SearchFilters {
            country: "US".into(),
            ..filters.clone()
        },
        SearchFilters {
            max_subscribers: 100_000,
            ..filters.clone()
        },
        SearchFilters {
            subscriber_public_only: true,
            ..filters.clone()
        },
        SearchFilters {
            duration_bucket: DurationBucket::Over20Minutes,
            ..filters.clone()
        },
        SearchFilters {
            short_form_type: Topic::Game,
            ..filters.clone()
        },
        SearchFilters {
            script_type: ScriptType::Scripted,
            ..filters.clone()
        },
        SearchFilters {
            hover_metric: HoverMetric::EstimatedRevenue,
            ..filters.clone()
        },
        SearchFilters {
            min_performance: 50,
            ..filters.clone()
        },
        SearchFilters {
            core_preset: CorePreset::FastRising,
            ..filters.clone()
        },
    ];
    for variant in &filter_variants {
        assert_ne!(RequestKey::new(&query, variant, &[]), base, "{variant:?}");
    }

    assert_ne!(
        RequestKey::new(&query, &filters, &["key-1".to_string()]),
        base
    );
}

#[test]
fn credential_order_is_significant() {
    let query = base_query();
    let filters = base_filters();
    let forward = RequestKey::new(&query, &filters, &["a".to_string(), "b".to_string()]);
    let reversed = RequestKey::new(&query, &filters, &["b".to_string(), "a".to_string()]);
    assert_ne!(forward, reversed);
}

#[test]
fn separators_inside_fields_do_not_collide() {
    let filters = SearchFilters::default();
    let a = SearchQuery {
        keyword: "a|b".into(),
        channel: String::new(),
        ..SearchQuery::default()
    };
    let b = SearchQuery {
        keyword: "a".into(),
        channel: "b|".into(),
        ..SearchQuery::default()
    };
    assert_ne!(
        RequestKey::new(&a, &filters, &[]),
        RequestKey::new(&b, &filters, &[])
    );

    let joined = RequestKey::new(&a, &filters, &["x,y".to_string()]);
    let split = RequestKey::new(&a, &filters, &["x".to_string(), "y".to_string()]);
    assert_ne!(joined, split);
}
