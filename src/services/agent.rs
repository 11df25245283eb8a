// src/services/agent.rs
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Why the external translation agent did not produce text.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("request to translation agent failed: {0}")]
    Transport(String),

    #[error("translation agent returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response from translation agent: {0}")]
    Malformed(String),

    #[error("translation agent returned no text")]
    EmptyOutput,

    #[error("translation agent did not respond within {0:?}")]
    Timeout(Duration),
}

/// An opaque text-in, text-out model.
#[async_trait]
pub trait TranslationAgent: Send + Sync {
    /// Run one exchange: a fixed system instruction plus a per-request prompt.
    async fn run(&self, instructions: &str, prompt: &str) -> Result<String, AgentError>;
}
