#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test: panics are the assertion mechanism")]

use groundsearch_client::{ClientConfig, ClientError, GroundSearchClient};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn search_body(session_id: &str) -> serde_json::Value {
    serde_json::json!({
        "sessionId": session_id,
        "summary": "<p>Cats purr.</p>",
        "sources": [
            {"title": "Cats", "url": "https://cats.example", "snippet": "Cats purr.", "index": 1}
        ]
    })
}

fn client(server: &MockServer) -> GroundSearchClient {
    GroundSearchClient::new(ClientConfig::with_base_url(server.uri())).expect("client")
}

#[tokio::test]
async fn test_search_decodes_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("q", "why do cats purr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body("abc123")))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server).search("why do cats purr").await.expect("search");

    assert_eq!(response.session_id, "abc123");
    assert_eq!(response.sources.len(), 1);
    assert_eq!(response.sources[0].index, 1);
}

#[tokio::test]
async fn test_follow_up_sends_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/follow-up"))
        .and(body_json(serde_json::json!({"sessionId": "abc123", "query": "more"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"summary": "<p>More.</p>", "sources": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server).follow_up("abc123", "more").await.expect("follow-up");
    assert_eq!(response.summary, "<p>More.</p>");
}

#[tokio::test]
async fn test_server_error_message_is_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"message": "Query parameter 'q' is required"})),
        )
        .mount(&server)
        .await;

    let err = client(&server).search("").await.expect_err("400");
    assert!(matches!(
        err,
        ClientError::Server { status: 400, ref message }
            if message == "Query parameter 'q' is required"
    ));
}

#[tokio::test]
async fn test_ask_falls_back_to_search_when_session_lost() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/follow-up"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"message": "Chat session not found"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("q", "still there?"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body("fresh1")))
        .expect(1)
        .mount(&server)
        .await;

    let answer = client(&server).ask(Some("stale"), "still there?").await.expect("ask");

    assert_eq!(answer.session_id, "fresh1");
    assert!(answer.new_session);
}

#[tokio::test]
async fn test_ask_keeps_session_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/follow-up"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"summary": "<p>ok</p>", "sources": []})),
        )
        .mount(&server)
        .await;

    let answer = client(&server).ask(Some("live"), "q").await.expect("ask");

    assert_eq!(answer.session_id, "live");
    assert!(!answer.new_session);
}

#[tokio::test]
async fn test_ask_does_not_mask_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/follow-up"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"message": "Quota exceeded"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body("never")))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server).ask(Some("live"), "q").await.expect_err("500");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_health() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
        .mount(&server)
        .await;

    assert!(client(&server).health().await.expect("health"));
}
