use axum::http::StatusCode;
use axum_test::TestServer;
use max_smart_web::{AppState, config::AppConfig, server::router};
use serde_json::Value;
use std::sync::Arc;

fn test_server() -> TestServer {
    let static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/static");
    let config = AppConfig::load_from_args(["max-smart-web", "--static-dir", static_dir])
        .expect("Failed to build config");
    TestServer::new(router(Arc::new(AppState::new(config)))).expect("Failed to start test server")
}

#[tokio::test]
async fn home_page_renders_document_with_logo() {
    let server = test_server();

    let response = server.get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"src="/static/logo.svg""#));
    assert!(html.contains(">Max Smart</span>"));
    assert!(html.contains(r#"href="/chat/new""#));
}

#[tokio::test]
async fn chat_page_renders_heading_and_provider_scope() {
    let server = test_server();

    let response = server.get("/chat/q3-report").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(">Chat with Max Smart</h1>"));
    assert!(html.contains(">Talk to your AI about your data</p>"));
    assert!(html.contains(r#"data-chat-id="q3-report""#));

    let messages = html.find(r#"data-role="chat-messages""#).unwrap();
    let input = html.find(r#"data-role="chat-input""#).unwrap();
    assert!(messages < input);
}

#[tokio::test]
async fn new_chat_page_has_no_chat_id() {
    let server = test_server();

    let response = server.get("/chat/new").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(">Chat with Max Smart</h1>"));
    assert!(!html.contains("data-chat-id"));
    assert!(!html.contains("session-id"));
    assert!(html.contains(r#"name="chat_id" value="""#));
    assert!(!html.contains(r#"value="new""#));
}

#[tokio::test]
async fn chat_pages_do_not_share_context() {
    let server = test_server();

    let first = server.get("/chat/first").await.text();
    let second = server.get("/chat/second").await.text();
    assert!(first.contains(r#"data-chat-id="first""#));
    assert!(!second.contains("first"));
    assert!(second.contains(r#"data-chat-id="second""#));
}

#[tokio::test]
async fn invalid_chat_id_is_bad_request() {
    let server = test_server();

    let response = server.get("/chat/not.valid").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("That chat link is not valid."));
}

#[tokio::test]
async fn unknown_route_renders_not_found_page() {
    let server = test_server();

    let response = server.get("/nowhere").await;
    response.assert_status_not_found();
    assert!(response.text().contains("Page not found"));
}

#[tokio::test]
async fn health_reports_package() {
    let server = test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["name"], "max-smart-web");
}

#[tokio::test]
async fn serves_logo_asset() {
    let server = test_server();

    let response = server.get("/static/logo.svg").await;
    response.assert_status_ok();
    assert!(response.text().contains("<svg"));
}
