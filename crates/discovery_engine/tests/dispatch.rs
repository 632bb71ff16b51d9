use std::time::Duration;

use discovery_engine::{
    DispatchSettings, FailureKind, QueryDispatcher, ReqwestDispatcher, TIMEOUT_MESSAGE,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> DispatchSettings {
    DispatchSettings {
        base_url: server.uri(),
        ..DispatchSettings::default()
    }
}

#[tokio::test]
async fn success_returns_server_text() {
    discovery_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/query"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "query": "meaning of life" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "42" })))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = ReqwestDispatcher::new(settings_for(&server)).unwrap();
    let response = dispatcher.dispatch("meaning of life").await.expect("dispatch ok");
    assert_eq!(response, "42");
}

#[tokio::test]
async fn server_error_embeds_status_code() {
    discovery_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dispatcher = ReqwestDispatcher::new(settings_for(&server)).unwrap();
    let err = dispatcher.dispatch("anything").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.message, "API Error: 500 Internal Server Error");
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn slow_endpoint_times_out_with_distinct_message() {
    discovery_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(json!({ "response": "late" })),
        )
        .mount(&server)
        .await;

    let settings = DispatchSettings {
        timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let dispatcher = ReqwestDispatcher::new(settings).unwrap();
    let err = dispatcher.dispatch("slow").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
    assert_eq!(err.message, TIMEOUT_MESSAGE);
    assert!(err.message.to_lowercase().contains("timeout"));
}

#[tokio::test]
async fn bearer_token_and_extra_headers_are_sent() {
    discovery_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/ask"))
        .and(header("authorization", "Bearer secret-token"))
        .and(header("x-team", "marketing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let settings = DispatchSettings {
        query_path: "/v2/ask".to_string(),
        headers: vec![("X-Team".to_string(), "marketing".to_string())],
        bearer_token: Some("secret-token".to_string()),
        ..settings_for(&server)
    };
    let dispatcher = ReqwestDispatcher::new(settings).unwrap();
    assert_eq!(dispatcher.dispatch("q").await.unwrap(), "ok");
}

#[tokio::test]
async fn malformed_body_is_reported_as_invalid_response() {
    discovery_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let dispatcher = ReqwestDispatcher::new(settings_for(&server)).unwrap();
    let err = dispatcher.dispatch("q").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidResponse);
}
