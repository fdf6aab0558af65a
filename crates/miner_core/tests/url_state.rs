use miner_core::{share_url, QueryUrlState, ResultLimit, SearchQuery, Topic, ViewMode};
use pretty_assertions::assert_eq;

#[test]
fn empty_location_yields_defaults() {
    let parsed = QueryUrlState::parse("");
    assert_eq!(parsed, QueryUrlState::default());
    assert_eq!(parsed.query.result_limit, ResultLimit::Top250);
    assert_eq!(parsed.view_mode, ViewMode::Grid);

    assert_eq!(QueryUrlState::parse("?"), QueryUrlState::default());
}

#[test]
fn recognized_fields_are_parsed() {
    let parsed = QueryUrlState::parse("?q=%EA%B0%80%EC%A1%B1+%EB%8C%80%ED%99%94&channel=mind&view=list&topic=food&limit=50");
    assert_eq!(
        parsed,
        QueryUrlState {
            query: SearchQuery {
                keyword: "가족 대화".to_string(),
                channel: "mind".to_string(),
                topic: Topic::Food,
                result_limit: ResultLimit::Top50,
            },
            view_mode: ViewMode::List,
        }
    );
}

#[test]
fn invalid_enum_values_fall_back_to_defaults() {
    let parsed = QueryUrlState::parse("view=table&topic=cars&limit=100&unknown=1");
    assert_eq!(parsed, QueryUrlState::default());
}

#[test]
fn first_occurrence_of_a_key_wins() {
    let parsed = QueryUrlState::parse("?q=first&q=second&topic=bogus&topic=game");
    assert_eq!(parsed.query.keyword, "first");
    // The first topic is invalid, so the default is used even though a valid one follows.
    assert_eq!(parsed.query.topic, Topic::All);
}

#[test]
fn serialize_emits_only_non_defaults_in_fixed_order() {
    assert_eq!(QueryUrlState::default().to_search_string(), "");

    let state = QueryUrlState::new(
        SearchQuery {
            keyword: "  cats  ".to_string(),
            channel: "   ".to_string(),
            topic: Topic::Animal,
            result_limit: ResultLimit::Top150,
        },
        ViewMode::List,
    );
    assert_eq!(state.to_search_string(), "?q=cats&view=list&topic=animal&limit=150");
}

#[test]
fn canonical_state_survives_serialize_then_parse() {
    let state = QueryUrlState::new(
        SearchQuery {
            keyword: "가족 대화 & 갈등".to_string(),
            channel: "관계코치TV".to_string(),
            topic: Topic::Knowledge,
            result_limit: ResultLimit::Top50,
        },
        ViewMode::Grid,
    );
    let search = state.to_search_string();
    assert!(search.starts_with('?'));
    assert_eq!(QueryUrlState::parse(&search), state);
}

#[test]
fn share_url_joins_location_parts() {
    assert_eq!(
        share_url("https://miner.example", "/search", "?q=cats"),
        "https://miner.example/search?q=cats"
    );
}
