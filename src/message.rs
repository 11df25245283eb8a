// src/message.rs
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Longest text, in characters, accepted for a single translation.
pub const MAX_TEXT_CHARS: usize = 1000;

pub const MISSING_FIELDS: &str = "Missing required fields: text and targetLanguage";
pub const TEXT_TOO_LONG: &str = "Text too long. Maximum 1000 characters allowed.";

/// Raw `/api/translate` body. Both fields are optional here so that a missing
/// field becomes our own 400 instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateBody {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub text: String,
    pub target_language: String,
}

impl TryFrom<TranslateBody> for TranslationRequest {
    type Error = String;

    fn try_from(body: TranslateBody) -> Result<Self, Self::Error> {
        let text = body.text.filter(|t| !t.is_empty());
        let target_language = body.target_language.filter(|l| !l.is_empty());

        let (Some(text), Some(target_language)) = (text, target_language) else {
            return Err(MISSING_FIELDS.to_string());
        };

        if text.chars().count() > MAX_TEXT_CHARS {
            return Err(TEXT_TOO_LONG.to_string());
        }

        Ok(Self { text, target_language })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub success: bool,
    pub original: String,
    pub translated: String,
    pub target_language: String,
    pub timestamp: String,
}

impl Translation {
    pub fn new(request: TranslationRequest, translated: String) -> Self {
        Self {
            success: true,
            original: request.text,
            translated,
            target_language: request.target_language,
            timestamp: iso_timestamp(Utc::now()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub success: bool,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Failure {
    pub fn new(error: impl Into<String>, details: Option<String>) -> Self {
        Self { success: false, error: error.into(), details }
    }
}

/// Body of any `/api/translate` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationResponse {
    Success(Translation),
    Failure(Failure),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub credential_configured: bool,
    #[serde(default, rename = "openai_connected")]
    pub openai_connected: bool,
    #[serde(default)]
    pub server: String,
}

impl HealthStatus {
    pub fn healthy(credential_configured: bool, server: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: iso_timestamp(Utc::now()),
            credential_configured,
            openai_connected: credential_configured,
            server: server.into(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2024-05-01T09:30:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
