#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use async_trait::async_trait;
use pollyglot::config::AppConfig;
use pollyglot::services::agent::{AgentError, TranslationAgent};
use pollyglot::state::{AppState, SharedState};

/// Canned agent that records every call.
pub struct StubAgent {
    reply: Result<String, String>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<(String, String)>>,
}

impl StubAgent {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self::new(Ok(text.to_string()), None))
    }

    pub fn failing(detail: &str) -> Arc<Self> {
        Arc::new(Self::new(Err(detail.to_string()), None))
    }

    pub fn slow(text: &str, delay: Duration) -> Arc<Self> {
        Arc::new(Self::new(Ok(text.to_string()), Some(delay)))
    }

    fn new(reply: Result<String, String>, delay: Option<Duration>) -> Self {
        Self { reply, delay, calls: AtomicUsize::new(0), prompts: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationAgent for StubAgent {
    async fn run(&self, instructions: &str, prompt: &str) -> Result<String, AgentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push((instructions.to_string(), prompt.to_string()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.reply.clone().map_err(AgentError::Transport)
    }
}

pub fn config_with(pairs: &[(&str, &str)]) -> AppConfig {
    AppConfig::from_lookup(|key| {
        pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string())
    })
    .unwrap()
}

pub fn test_config() -> AppConfig {
    config_with(&[("OPENAI_API_KEY", "sk-test")])
}

pub fn state_with(agent: Arc<StubAgent>) -> SharedState {
    Arc::new(AppState::new(agent, &test_config()))
}
