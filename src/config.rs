// src/config.rs
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing OPENAI_API_KEY. Create a .env file with: OPENAI_API_KEY=sk-your-key-here")]
    MissingCredential,

    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

// Keep the key out of logs.
impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai: OpenAiConfig,
    pub port: u16,
    /// `None` waits for the agent as long as the transport allows.
    pub agent_timeout: Option<Duration>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = get("OPENAI_API_KEY").ok_or(ConfigError::MissingCredential)?;

        let port = match get("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid { key: "PORT", value: v })?,
            None => DEFAULT_PORT,
        };

        let timeout_secs: u64 = match get("TRANSLATE_TIMEOUT_SECS") {
            Some(v) => v
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "TRANSLATE_TIMEOUT_SECS", value: v })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            openai: OpenAiConfig {
                api_key,
                base_url: get("OPENAI_BASE_URL")
                    .map(|u| u.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            },
            port,
            agent_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
        })
    }
}
