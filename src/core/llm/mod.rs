//! Chat transport: one persona-flavored message in, generated text out.

mod error;
mod reply;
mod sequence;

use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

use crate::core::config::{API_VERSION, Config};
use crate::core::emulators::Emulator;

pub use error::{ChatError, api_error};
pub use reply::{extract_reply, format_reply};
pub use sequence::{RequestSequence, Ticket};

/// System instruction that makes the model answer as the emulated machine.
pub fn system_prompt(emulator: &Emulator) -> String {
    let emphasis = if emulator.uppercase { "CAPS" } else { "spacing" };
    format!(
        "You are Claude, responding through a {name} computer from {year}.\n\
         Keep responses concise and authentic to the era.\n\
         {addition}\n\
         Do NOT use markdown or code fences. Do NOT draw boxes or ASCII frames yourself; reply as plain text only.\n\
         Use {emphasis} for emphasis.\n\
         Be helpful while maintaining the retro aesthetic.",
        name = emulator.name,
        year = emulator.year,
        addition = emulator.system_prompt_addition,
        emphasis = emphasis,
    )
}

/// JSON body for a single-turn messages request.
pub fn request_body(config: &Config, emulator: &Emulator, message: &str) -> Value {
    json!({
        "model": config.model_id,
        "max_tokens": config.max_tokens,
        "system": system_prompt(emulator),
        "messages": [{ "role": "user", "content": message }],
    })
}

/// HTTP client for the messages endpoint (normally the local relay).
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    config: Config,
}

impl ChatClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Send one message and return the raw reply text (not yet formatted for display).
    pub async fn send(&self, emulator: &Emulator, message: &str) -> Result<String, ChatError> {
        if self.config.is_direct_api() {
            return Err(ChatError::DirectAccess);
        }

        let url = self.config.messages_url();
        log::info!("POST {} emulator={}", url, emulator.id);
        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("anthropic-version", API_VERSION)
            .json(&request_body(&self.config, emulator, message))
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;
        let data: Option<Value> = if raw.is_empty() {
            None
        } else {
            serde_json::from_str(&raw).ok()
        };
        log::debug!("response status={} bytes={}", status.as_u16(), raw.len());

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &raw, data.as_ref()));
        }

        extract_reply(&raw, data.as_ref()).ok_or_else(|| {
            ChatError::EmptyResponse(if raw.is_empty() {
                "No response body".to_string()
            } else {
                raw.clone()
            })
        })
    }

    /// Like [`ChatClient::send`], but resolves to `Cancelled` as soon as `cancel` fires.
    pub async fn send_cancellable(
        &self,
        emulator: &Emulator,
        message: &str,
        cancel: &CancellationToken,
    ) -> Result<String, ChatError> {
        tokio::select! {
            _ = cancel.cancelled() => Err(ChatError::Cancelled),
            result = self.send(emulator, message) => result,
        }
    }
}

#[cfg(test)]
mod tests;
