use connpass_api::{EventQuery, Order, Query, Time};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/api/v1/event/").unwrap()
}

fn values(url: &Url, key: &str) -> Vec<String> {
    url.query_pairs()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .collect()
}

fn keys(url: &Url) -> Vec<String> {
    url.query_pairs().map(|(k, _)| k.into_owned()).collect()
}

#[test]
fn event_query_defaults() {
    let url = EventQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), None);
    assert_eq!(url.as_str(), "https://example.com/api/v1/event/");
}

#[test]
fn event_query_basic_paging() {
    let url = EventQuery::default()
        .with_start(10)
        .with_count(100)
        .with_order(Order::Create)
        .add_to_url(&base_url());
    assert_eq!(values(&url, "start"), vec!["10"]);
    assert_eq!(values(&url, "count"), vec!["100"]);
    assert_eq!(values(&url, "order"), vec!["3"]);
    assert_eq!(keys(&url), vec!["start", "order", "count"]);
}

#[test]
fn event_query_explicit_zero_is_sent() {
    let url = EventQuery::default().with_count(0).add_to_url(&base_url());
    assert_eq!(values(&url, "count"), vec!["0"]);
}

#[test]
fn event_query_repeats_keywords_in_order() {
    let url = EventQuery::default()
        .with_keywords(&["test", "http"])
        .with_keywords_or(&["go", "golang"])
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("keyword=test&keyword=http"));
    assert!(query.contains("keyword_or=go&keyword_or=golang"));
    assert_eq!(values(&url, "keyword"), vec!["test", "http"]);
    assert_eq!(values(&url, "keyword_or"), vec!["go", "golang"]);
}

#[test]
fn event_query_splits_months_and_days() {
    let url = EventQuery::default()
        .with_times(&[
            Time::month(2015, 4),
            Time::month(2015, 3),
            Time::day(2015, 6, 26),
        ])
        .add_to_url(&base_url());
    assert_eq!(values(&url, "ym"), vec!["201504,201503"]);
    assert_eq!(values(&url, "ymd"), vec!["20150626"]);
}

#[test]
fn event_query_only_days() {
    let url = EventQuery::default()
        .with_time(Time::day(2024, 12, 1))
        .with_time(Time::day(2025, 1, 2))
        .add_to_url(&base_url());
    assert_eq!(values(&url, "ymd"), vec!["20241201,20250102"]);
    assert!(values(&url, "ym").is_empty());
}

#[test]
fn event_query_ignores_unset_times() {
    let url = EventQuery::default()
        .with_time(Time::month(0, 4))
        .with_time(Time::day(2015, 0, 26))
        .with_time(Time::month(2015, 5))
        .add_to_url(&base_url());
    assert_eq!(values(&url, "ym"), vec!["201505"]);
    assert!(values(&url, "ymd").is_empty());
}

#[test]
fn event_query_people_and_ids() {
    let url = EventQuery::default()
        .with_event_ids(&[42, 88])
        .with_series_id(999)
        .with_nicknames(&["hoge", "fuga"])
        .with_owner_nickname("foo")
        .add_to_url(&base_url());
    assert_eq!(values(&url, "event_id"), vec!["42", "88"]);
    assert_eq!(values(&url, "series_id"), vec!["999"]);
    assert_eq!(values(&url, "nickname"), vec!["hoge", "fuga"]);
    assert_eq!(values(&url, "owner_nickname"), vec!["foo"]);
}

#[test]
fn event_query_encodes_reserved_characters() {
    let url = EventQuery::default()
        .with_keyword("C&C++ = fun?")
        .add_to_url(&base_url());
    assert_eq!(values(&url, "keyword"), vec!["C&C++ = fun?"]);
    assert_eq!(keys(&url), vec!["keyword"]);
}

#[test]
fn event_query_round_trip() {
    let query = EventQuery::default()
        .with_event_ids(&[3, 1, 2])
        .with_keywords(&["東京", "rust", "東京"])
        .with_keywords_or(&["go", "golang"])
        .with_nicknames(&["b", "a"])
        .with_owner_nicknames(&["z", "y", "x"])
        .with_series_ids(&[10, 5]);
    let url = query.add_to_url(&base_url());

    let ints = |key: &str| -> Vec<i64> {
        values(&url, key)
            .iter()
            .map(|v| v.parse().unwrap())
            .collect()
    };
    assert_eq!(ints("event_id"), query.event_ids);
    assert_eq!(ints("series_id"), query.series_ids);
    assert_eq!(values(&url, "keyword"), query.keywords);
    assert_eq!(values(&url, "keyword_or"), query.keywords_or);
    assert_eq!(values(&url, "nickname"), query.nicknames);
    assert_eq!(values(&url, "owner_nickname"), query.owner_nicknames);
}

#[test]
fn event_query_pairs_match_url() {
    let query = EventQuery::default()
        .with_keyword("rust")
        .with_time(Time::month(2015, 4))
        .with_start(11);
    let pairs: Vec<(String, String)> = query
        .to_pairs()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    let parsed: Vec<(String, String)> = query
        .add_to_url(&base_url())
        .query_pairs()
        .into_owned()
        .collect();
    assert_eq!(pairs, parsed);
}

#[test]
fn event_query_builders_accept_owned_strings() {
    let keywords = vec!["rust".to_string(), "wasm".to_string()];
    let query = EventQuery::default().with_keywords(&keywords);
    assert_eq!(query.keywords, keywords);
}
