// src/services/openai.rs
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::agent::{AgentError, TranslationAgent};
use crate::config::OpenAiConfig;

/// Chat-completions backed agent.
#[derive(Debug, Clone)]
pub struct OpenAiAgent {
    client: Client,
    config: OpenAiConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiAgent {
    pub fn new(config: OpenAiConfig) -> Self {
        Self { client: Client::new(), config }
    }
}

#[async_trait]
impl TranslationAgent for OpenAiAgent {
    async fn run(&self, instructions: &str, prompt: &str) -> Result<String, AgentError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage { role: "system", content: instructions },
                ChatMessage { role: "user", content: prompt },
            ],
        };

        debug!(model = %self.config.model, "calling chat completions");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AgentError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, "chat completions request failed");
            return Err(AgentError::Status { status: status.as_u16(), body });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| AgentError::Malformed(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(AgentError::EmptyOutput)
    }
}
