//! Chat and API error types.

use serde_json::Value;

/// Errors from a chat request. `Cancelled` is never shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Direct API access is disabled. Use the local proxy.")]
    DirectAccess,
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Empty response.\n{0}")]
    EmptyResponse(String),
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// The request was superseded or the caller gave up on it.
    #[error("Request cancelled")]
    Cancelled,
}

impl ChatError {
    /// HTTP status of an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ChatError::Api { status, .. } => Some(*status),
            ChatError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Human hint for statuses users can act on.
pub fn status_hint(status: u16) -> Option<&'static str> {
    match status {
        401 | 403 => Some("Check your API key and permissions."),
        429 => Some("Rate limit exceeded. Try again shortly."),
        _ => None,
    }
}

/// Build the error for a non-2xx response: API message, else raw body, else the status, plus a hint.
pub fn api_error(status: u16, raw: &str, data: Option<&Value>) -> ChatError {
    let api_message = data.and_then(|d| {
        d.pointer("/error/message")
            .and_then(Value::as_str)
            .or_else(|| d.get("message").and_then(Value::as_str))
            .filter(|m| !m.is_empty())
    });
    let detail = match api_message {
        Some(m) => m.to_string(),
        None if !raw.is_empty() => raw.to_string(),
        None => format!("HTTP {}", status),
    };
    let message = match status_hint(status) {
        Some(hint) => format!("{} {}", detail, hint),
        None => detail,
    };
    ChatError::Api { status, message }
}
