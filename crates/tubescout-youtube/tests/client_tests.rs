//! Integration tests for the YouTube client against a mock API.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tubescout_models::VideoId;
use tubescout_youtube::{SearchConfig, YoutubeClient, YoutubeError};

fn test_client(server: &MockServer) -> YoutubeClient {
    YoutubeClient::with_base_url("test-key", server.uri())
}

fn search_item(id: &str, title: &str) -> serde_json::Value {
    json!({
        "id": { "videoId": id },
        "snippet": { "title": title }
    })
}

fn stats_item(id: &str, views: u64) -> serde_json::Value {
    json!({
        "id": id,
        "statistics": { "viewCount": views.to_string() }
    })
}

#[tokio::test]
async fn zero_target_count_makes_no_request() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    let videos = client
        .search_topic("cats", 0, &SearchConfig::default())
        .await
        .unwrap();

    assert!(videos.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_page_token_terminates_below_target() {
    let server = MockServer::start().await;

    // One page, two items, no continuation token
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [search_item("aaa", "First"), search_item("bbb", "Second")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let videos = client
        .search_topic("cats", 50, &SearchConfig::default())
        .await
        .unwrap();

    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].video_id.as_str(), "aaa");
    assert_eq!(videos[1].video_id.as_str(), "bbb");
}

#[tokio::test]
async fn pagination_token_is_carried_to_the_next_page() {
    let server = MockServer::start().await;

    // Token-bearing mock mounted first so the second request matches it
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("pageToken", "PAGE2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [search_item("ccc", "Third")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "cats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [search_item("aaa", "First"), search_item("bbb", "Second")],
            "nextPageToken": "PAGE2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let videos = client
        .search_topic("cats", 50, &SearchConfig::default())
        .await
        .unwrap();

    let ids: Vec<&str> = videos.iter().map(|v| v.video_id.as_str()).collect();
    assert_eq!(ids, vec!["aaa", "bbb", "ccc"]);
}

#[tokio::test]
async fn target_count_stops_pagination_even_with_token() {
    let server = MockServer::start().await;

    // The page keeps offering a token; collection must stop at the target
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [search_item("aaa", "First"), search_item("bbb", "Second")],
            "nextPageToken": "MORE"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let videos = client
        .search_topic("cats", 2, &SearchConfig::default())
        .await
        .unwrap();

    assert_eq!(videos.len(), 2);
}

#[tokio::test]
async fn page_without_items_continues_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("pageToken", "PAGE2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [search_item("aaa", "Only result")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // First page carries no items field at all, only a token
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "nextPageToken": "PAGE2" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let videos = client
        .search_topic("cats", 50, &SearchConfig::default())
        .await
        .unwrap();

    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].title, "Only result");
}

#[tokio::test]
async fn malformed_items_are_skipped_without_aborting_the_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                search_item("aaa", "Good"),
                { "id": {}, "snippet": { "title": "No id" } },
                { "id": { "videoId": "bbb" } }
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let videos = client
        .search_topic("cats", 50, &SearchConfig::default())
        .await
        .unwrap();

    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].video_id.as_str(), "aaa");
}

#[tokio::test]
async fn error_status_aborts_the_aggregation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(403).set_body_string("quota exceeded"),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .search_topic("cats", 50, &SearchConfig::default())
        .await
        .unwrap_err();

    match err {
        YoutubeError::Api { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "quota exceeded");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .search_topic("cats", 50, &SearchConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(err, YoutubeError::Decode(_)));
}

#[tokio::test]
async fn empty_id_set_makes_no_request() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    let counts = client.fetch_view_counts(&[]).await.unwrap();

    assert!(counts.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn view_counts_are_fetched_in_one_batched_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("part", "statistics"))
        .and(query_param("id", "aaa,bbb,ccc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                stats_item("aaa", 45_000),
                stats_item("bbb", 2_500_000)
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let ids = [VideoId::from("aaa"), VideoId::from("bbb"), VideoId::from("ccc")];
    let counts = client.fetch_view_counts(&ids).await.unwrap();

    // "ccc" was omitted by the endpoint and stays absent; merge defaults it
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[&VideoId::from("aaa")], 45_000);
    assert_eq!(counts[&VideoId::from("bbb")], 2_500_000);
    assert!(!counts.contains_key(&VideoId::from("ccc")));
}

#[tokio::test]
async fn research_ranks_a_two_page_search() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("pageToken", "PAGE2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [search_item("ccc", "Quiet cat")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "cats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [search_item("aaa", "Popular cat"), search_item("bbb", "Viral cat")],
            "nextPageToken": "PAGE2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                stats_item("aaa", 45_000),
                stats_item("bbb", 2_500_000),
                stats_item("ccc", 900)
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let ranked = client
        .research("cats", &SearchConfig::default())
        .await
        .unwrap();

    // Three candidates, all below the top-5 cap, sorted by views
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].title, "Viral cat");
    assert_eq!(ranked[0].views, "2.5M");
    assert_eq!(ranked[0].rank, 1);
    assert_eq!(ranked[1].title, "Popular cat");
    assert_eq!(ranked[1].views, "45K");
    assert_eq!(ranked[2].title, "Quiet cat");
    assert_eq!(ranked[2].views, "900");
    assert_eq!(ranked[2].rank, 3);
}
