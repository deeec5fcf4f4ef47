//! Client configuration: where to send chat requests and which model to ask for.

use std::env;

/// Local relay started with `retro-term relay`.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
/// Value sent in the `anthropic-version` header.
pub const API_VERSION: &str = "2023-06-01";

/// Host that must never be called directly; requests go through the relay.
const DIRECT_API_HOST: &str = "api.anthropic.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub model_id: String,
    pub max_tokens: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            model_id: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl Config {
    /// Full URL of the messages endpoint.
    pub fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.api_base_url.trim_end_matches('/'))
    }

    /// True when the base URL points at the upstream API instead of the relay.
    pub fn is_direct_api(&self) -> bool {
        self.api_base_url.contains(DIRECT_API_HOST)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("RETRO_MAX_TOKENS must be a positive integer (got {0:?})")]
    InvalidMaxTokens(String),
}

/// Load configuration from the environment (call `dotenv()` first to pick up `.env`).
pub fn load() -> Result<Config, ConfigError> {
    from_lookup(|key| env::var(key).ok())
}

/// Build a config from any key lookup; empty values count as unset.
pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let defaults = Config::default();

    let max_tokens = match get("RETRO_MAX_TOKENS") {
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => return Err(ConfigError::InvalidMaxTokens(raw)),
        },
        None => defaults.max_tokens,
    };

    Ok(Config {
        api_base_url: get("RETRO_API_BASE_URL").unwrap_or(defaults.api_base_url),
        model_id: get("RETRO_MODEL").unwrap_or(defaults.model_id),
        max_tokens,
    })
}
