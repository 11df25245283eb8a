// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::agent::TranslationAgent;
use crate::services::openai::OpenAiAgent;
use crate::services::translator::Translator;

pub type SharedState = Arc<AppState>;

pub const SERVER_NAME: &str = concat!("PollyGlot Backend v", env!("CARGO_PKG_VERSION"));

/// Built once at startup and only read afterwards.
pub struct AppState {
    pub translator: Translator,
    pub credential_configured: bool,
}

impl AppState {
    pub fn new(agent: Arc<dyn TranslationAgent>, config: &AppConfig) -> Self {
        Self {
            translator: Translator::new(agent, config.agent_timeout),
            credential_configured: !config.openai.api_key.trim().is_empty(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let agent = Arc::new(OpenAiAgent::new(config.openai.clone()));
        Self::new(agent, config)
    }
}
