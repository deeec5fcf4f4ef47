//! Local relay: forwards `POST /v1/messages` to the upstream API with the server-side key,
//! so the key never reaches the chat client.

mod config;
mod origin;

pub use config::{RelayConfig, RelayError};

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::header::{CONTENT_TYPE, ORIGIN};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::core::config::API_VERSION;
use origin::is_allowed_origin;

pub const MESSAGES_PATH: &str = "/v1/messages";
pub const MAX_BODY_BYTES: usize = 2_000_000;

const ALLOW_METHODS: &str = "POST, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, anthropic-version, Anthropic-Version";
const PREVIEW_CHARS: usize = 200;

#[derive(Debug, thiserror::Error)]
enum ForwardError {
    #[error("Request body too large")]
    BodyTooLarge,
    #[error("{0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("{0}")]
    Upstream(#[from] reqwest::Error),
}

struct RelayState {
    http: reqwest::Client,
    api_key: String,
    upstream_url: String,
}

pub fn router(config: &RelayConfig) -> Router {
    let state = Arc::new(RelayState {
        http: reqwest::Client::new(),
        api_key: config.api_key.clone(),
        upstream_url: config.upstream_url.clone(),
    });
    Router::new().fallback(handle).with_state(state)
}

/// Serve until Ctrl-C.
pub async fn serve(listener: TcpListener, config: &RelayConfig) -> Result<(), RelayError> {
    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        log::info!("Shutting down relay");
    }
}

fn request_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..6].to_string()
}

fn cors_headers(origin: Option<&str>) -> HeaderMap {
    let allow_origin = origin
        .filter(|o| !o.is_empty())
        .and_then(|o| HeaderValue::from_str(o).ok())
        .unwrap_or_else(|| HeaderValue::from_static("null"));
    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static("access-control-allow-origin"), allow_origin);
    headers.insert(
        HeaderName::from_static("access-control-allow-methods"),
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        HeaderName::from_static("access-control-allow-headers"),
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers
}

fn json_response(status: StatusCode, payload: Value, origin: Option<&str>) -> Response {
    let mut headers = cors_headers(origin);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    (status, headers, payload.to_string()).into_response()
}

async fn handle(State(state): State<Arc<RelayState>>, req: Request) -> Response {
    let started = Instant::now();
    let id = request_id();
    let (parts, body) = req.into_parts();

    let origin_header = parts.headers.get(ORIGIN).map(|v| v.to_str().ok());
    let allowed = match origin_header {
        None => true,
        Some(value) => value.is_some_and(|o| is_allowed_origin(Some(o))),
    };
    let origin = origin_header.flatten().map(str::to_string);
    let origin = origin.as_deref();

    if !allowed {
        log::info!("[{}] BLOCKED origin={}", id, origin.unwrap_or("none"));
        return json_response(StatusCode::FORBIDDEN, json!({"error": "Origin not allowed"}), None);
    }

    let path = parts
        .uri
        .path_and_query()
        .map_or_else(|| parts.uri.path(), |p| p.as_str());

    if parts.method == Method::OPTIONS {
        log::info!("[{}] OPTIONS {} origin={}", id, path, origin.unwrap_or("none"));
        return (StatusCode::NO_CONTENT, cors_headers(origin)).into_response();
    }

    if parts.method != Method::POST || path != MESSAGES_PATH {
        log::info!("[{}] 404 {} {}", id, parts.method, path);
        return json_response(StatusCode::NOT_FOUND, json!({"error": "Not found"}), origin);
    }

    match forward(&state, &id, body, started).await {
        Ok((status, content_type, body)) => {
            let mut headers = cors_headers(origin);
            headers.insert(CONTENT_TYPE, content_type);
            (status, headers, body).into_response()
        }
        Err(e) => {
            log::warn!("[{}] error {}", id, e);
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": e.to_string()}),
                origin,
            )
        }
    }
}

async fn forward(
    state: &RelayState,
    id: &str,
    body: Body,
    started: Instant,
) -> Result<(StatusCode, HeaderValue, String), ForwardError> {
    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|_| ForwardError::BodyTooLarge)?;
    log::info!("[{}] POST {} bytes={}", id, MESSAGES_PATH, bytes.len());

    let payload: Value = if bytes.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&bytes)?
    };
    log::info!(
        "[{}] model={} max_tokens={}",
        id,
        payload.get("model").and_then(Value::as_str).unwrap_or("unknown"),
        payload
            .get("max_tokens")
            .map(|v| v.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    );

    let upstream = state
        .http
        .post(&state.upstream_url)
        .header(CONTENT_TYPE, "application/json")
        .header("x-api-key", &state.api_key)
        .header("anthropic-version", API_VERSION)
        .body(serde_json::to_vec(&payload)?)
        .send()
        .await?;

    let status = StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| HeaderValue::from_bytes(v.as_bytes()).ok())
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));
    let text = upstream.text().await?;

    log::info!(
        "[{}] upstream status={} bytes={} duration_ms={}",
        id,
        status.as_u16(),
        text.len(),
        started.elapsed().as_millis()
    );
    log::debug!(
        "[{}] upstream body preview={}",
        id,
        text.chars().take(PREVIEW_CHARS).collect::<String>()
    );

    Ok((status, content_type, text))
}
