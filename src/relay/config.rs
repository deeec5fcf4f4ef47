//! Relay configuration: API key from `./.env` (preferred) or the environment, listen address.

use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3001;
pub const UPSTREAM_URL: &str = "https://api.anthropic.com/v1/messages";

const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Missing ANTHROPIC_API_KEY. Add it to .env or your environment.")]
    MissingApiKey,
    #[error("Invalid PROXY_PORT '{0}'")]
    InvalidPort(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    pub api_key: String,
    pub upstream_url: String,
}

impl RelayConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Load from `./.env` and the process environment. `host`/`port` override both.
    pub fn load(host: Option<String>, port: Option<u16>) -> Result<Self, RelayError> {
        let file_vars = read_env_file(Path::new(".env"));
        Self::from_sources(&file_vars, |k| std::env::var(k).ok(), host, port)
    }

    pub fn from_sources<F>(
        file_vars: &HashMap<String, String>,
        lookup: F,
        host: Option<String>,
        port: Option<u16>,
    ) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = resolve_api_key(file_vars, lookup(API_KEY_VAR)).ok_or(RelayError::MissingApiKey)?;

        let host = host
            .or_else(|| lookup("PROXY_HOST").filter(|h| !h.is_empty()))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match port {
            Some(p) => p,
            None => match lookup("PROXY_PORT").filter(|p| !p.is_empty()) {
                Some(raw) => raw
                    .trim()
                    .parse::<u16>()
                    .map_err(|_| RelayError::InvalidPort(raw))?,
                None => DEFAULT_PORT,
            },
        };

        Ok(Self {
            host,
            port,
            api_key,
            upstream_url: UPSTREAM_URL.to_string(),
        })
    }
}

/// Parse a dotenv file into a map. A missing or unreadable file yields an empty map;
/// malformed lines are skipped.
pub fn read_env_file(path: &Path) -> HashMap<String, String> {
    // `from_path` would write into the process environment; only the parsed pairs are wanted here.
    #[allow(deprecated)]
    let parsed = dotenv::from_path_iter(path);
    let Ok(iter) = parsed else {
        return HashMap::new();
    };
    iter.filter_map(|item| match item {
        Ok(pair) => Some(pair),
        Err(e) => {
            log::debug!("Skipping line in {}: {}", path.display(), e);
            None
        }
    })
    .collect()
}

/// The key from the file wins over the environment; empty values count as missing.
pub fn resolve_api_key(file_vars: &HashMap<String, String>, env_value: Option<String>) -> Option<String> {
    file_vars
        .get(API_KEY_VAR)
        .filter(|v| !v.is_empty())
        .cloned()
        .or(env_value.filter(|v| !v.is_empty()))
}
