// src/services/translator.rs
use std::sync::Arc;
use std::time::Duration;

use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use super::agent::{AgentError, TranslationAgent};
use crate::message::TranslationRequest;

pub const AGENT_NAME: &str = "PollyGlot Translator";

pub const INSTRUCTIONS: &str = "You are a professional translator for the PollyGlot app. \
When given text and a target language, provide accurate translations. \
Only return the translated text, no explanations or additional text. \
Be precise and natural in your translations.";

pub fn build_prompt(request: &TranslationRequest) -> String {
    format!("Translate this text to {}: \"{}\"", request.target_language, request.text)
}

/// Wraps the agent with the fixed instruction and the configured wait bound.
/// Holds no mutable state, so every call goes to the agent.
#[derive(Clone)]
pub struct Translator {
    agent: Arc<dyn TranslationAgent>,
    timeout: Option<Duration>,
}

impl Translator {
    pub fn new(agent: Arc<dyn TranslationAgent>, timeout: Option<Duration>) -> Self {
        Self { agent, timeout }
    }

    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, AgentError> {
        let span = info_span!("translate", request_id = %Uuid::new_v4(), agent = AGENT_NAME);

        async {
            info!(
                target_language = %request.target_language,
                chars = request.text.chars().count(),
                "translating"
            );

            let prompt = build_prompt(request);
            let call = self.agent.run(INSTRUCTIONS, &prompt);

            let result = match self.timeout {
                Some(limit) => tokio::time::timeout(limit, call)
                    .await
                    .unwrap_or(Err(AgentError::Timeout(limit))),
                None => call.await,
            };

            match result {
                Ok(text) => {
                    let text = text.trim().to_string();
                    info!(chars = text.chars().count(), "translation completed");
                    Ok(text)
                }
                Err(e) => {
                    error!(error = %e, "translation failed");
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }
}
