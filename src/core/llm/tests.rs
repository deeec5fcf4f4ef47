//! Chat client tests against a local fake messages endpoint.

use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::emulators;

use super::{ChatClient, ChatError, request_body, system_prompt};

/// Serve `router` on an ephemeral port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client_for(base: String) -> ChatClient {
    ChatClient::new(Config {
        api_base_url: base,
        ..Default::default()
    })
}

#[test]
fn system_prompt_mentions_machine_and_emphasis() {
    let c64 = emulators::find("c64").unwrap();
    let prompt = system_prompt(c64);
    assert!(prompt.contains("Commodore 64 computer from 1982"));
    assert!(prompt.contains("Use CAPS for emphasis."));
    assert!(prompt.contains("Do NOT use markdown or code fences."));

    let vt100 = emulators::find("vt100").unwrap();
    assert!(system_prompt(vt100).contains("Use spacing for emphasis."));
}

#[test]
fn request_body_has_single_user_message() {
    let emu = emulators::find("vt100").unwrap();
    let body = request_body(&Config::default(), emu, "hello");
    assert_eq!(body["max_tokens"], 1000);
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(body["messages"][0]["content"], "hello");
    assert!(body["system"].as_str().unwrap().contains("DEC VT100"));
}

#[tokio::test]
async fn send_returns_reply_text() {
    let router = Router::new().route(
        "/v1/messages",
        post(|headers: HeaderMap, body: axum::Json<Value>| async move {
            assert_eq!(headers["anthropic-version"], "2023-06-01");
            assert_eq!(body["messages"][0]["content"], "ping");
            axum::Json(json!({"content": [{"type": "text", "text": "Hello there"}]}))
        }),
    );
    let client = client_for(serve(router).await);
    let emu = emulators::find("vt100").unwrap();
    let reply = client.send(emu, "ping").await.unwrap();
    assert_eq!(reply, "Hello there");
}

#[tokio::test]
async fn send_maps_auth_errors_with_hint() {
    let router = Router::new().route(
        "/v1/messages",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                axum::Json(json!({"error": {"message": "Bad API key"}})),
            )
        }),
    );
    let client = client_for(serve(router).await);
    let emu = emulators::find("vt100").unwrap();
    let err = client.send(emu, "ping").await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(
        err.to_string(),
        "Bad API key Check your API key and permissions."
    );
}

#[tokio::test]
async fn send_reports_empty_response() {
    let router = Router::new().route("/v1/messages", post(|| async { "" }));
    let client = client_for(serve(router).await);
    let emu = emulators::find("vt100").unwrap();
    let err = client.send(emu, "ping").await.unwrap_err();
    assert!(matches!(err, ChatError::EmptyResponse(ref body) if body == "No response body"));
}

#[tokio::test]
async fn send_refuses_direct_api_access() {
    let client = client_for("https://api.anthropic.com".to_string());
    let emu = emulators::find("vt100").unwrap();
    let err = client.send(emu, "ping").await.unwrap_err();
    assert!(matches!(err, ChatError::DirectAccess));
    assert_eq!(
        err.to_string(),
        "Direct API access is disabled. Use the local proxy."
    );
}

#[tokio::test]
async fn send_cancellable_stops_on_cancel() {
    let router = Router::new().route(
        "/v1/messages",
        post(|| async {
            tokio::time::sleep(std::time::Duration::from_secs(30)).await;
            "late"
        }),
    );
    let client = client_for(serve(router).await);
    let emu = emulators::find("vt100").unwrap();
    let cancel = CancellationToken::new();
    cancel.cancel();
    let err = client.send_cancellable(emu, "ping", &cancel).await.unwrap_err();
    assert!(matches!(err, ChatError::Cancelled));
}
