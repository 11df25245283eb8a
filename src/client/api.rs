// src/client/api.rs
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::message::{Failure, HealthStatus, Translation, TranslationRequest, TranslationResponse};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Server unreachable, or a reply we could not make sense of.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Non-2xx reply carrying a readable error body.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// 2xx reply with `success: false`.
    #[error("{0}")]
    Rejected(String),
}

/// What the controller needs from the server.
#[async_trait]
pub trait TranslateApi: Send + Sync {
    async fn translate(&self, request: &TranslationRequest) -> Result<Translation, ClientError>;
    async fn health(&self) -> Result<HealthStatus, ClientError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http: Client::new(), base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl TranslateApi for ApiClient {
    async fn translate(&self, request: &TranslationRequest) -> Result<Translation, ClientError> {
        let url = format!("{}/api/translate", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        let status = response.status();
        debug!(%status, "translate response");

        if !status.is_success() {
            return match response.json::<Failure>().await {
                Ok(failure) => Err(ClientError::Server { status: status.as_u16(), message: failure.error }),
                Err(_) => Err(ClientError::Connection(format!("HTTP {}", status.as_u16()))),
            };
        }

        match response.json::<TranslationResponse>().await {
            Ok(TranslationResponse::Success(translation)) if translation.success => Ok(translation),
            Ok(TranslationResponse::Success(_)) => Err(ClientError::Rejected("Translation failed".into())),
            Ok(TranslationResponse::Failure(failure)) => Err(ClientError::Rejected(failure.error)),
            Err(e) => Err(ClientError::Connection(e.to_string())),
        }
    }

    async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = format!("{}/api/health", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        response.json().await.map_err(|e| ClientError::Connection(e.to_string()))
    }
}
