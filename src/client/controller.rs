// src/client/controller.rs
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::{info, warn};

use super::api::{ClientError, TranslateApi};
use super::clipboard::Clipboard;
use crate::message::{MAX_TEXT_CHARS, Translation, TranslationRequest};

/// How long a status banner stays up.
pub const BANNER_TTL: Duration = Duration::from_secs(5);

/// Counter turns to a warning past this many characters.
pub const COUNTER_WARN_AT: usize = 800;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter some text to translate!")]
    EmptyText,

    #[error("Please select a target language!")]
    NoLanguage,

    #[error("Text too long! Maximum 1000 characters.")]
    TooLong { chars: usize },

    #[error("A translation is already in progress.")]
    Busy,
}

/// Checks done before anything is sent. Returns the request with trimmed text.
pub fn validate_submission(text: &str, language: Option<&str>) -> Result<TranslationRequest, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyText);
    }

    let language = language.map(str::trim).filter(|l| !l.is_empty()).ok_or(ValidationError::NoLanguage)?;

    let chars = text.chars().count();
    if chars > MAX_TEXT_CHARS {
        return Err(ValidationError::TooLong { chars });
    }

    Ok(TranslationRequest {
        text: text.to_string(),
        target_language: language.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCounter {
    pub count: usize,
    pub limit: usize,
    pub warn: bool,
}

impl CharCounter {
    pub fn for_text(text: &str) -> Self {
        let count = text.chars().count();
        Self { count, limit: MAX_TEXT_CHARS, warn: count > COUNTER_WARN_AT }
    }
}

impl std::fmt::Display for CharCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} characters", self.count, self.limit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    pub kind: BannerKind,
    pub shown_at: Instant,
}

impl Banner {
    fn new(message: impl Into<String>, kind: BannerKind) -> Self {
        Self { message: message.into(), kind, shown_at: Instant::now() }
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < BANNER_TTL
    }
}

/// A successful translation ready to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationView {
    pub original: String,
    pub translated: String,
    pub language_label: String,
    pub translated_at: String,
}

impl From<Translation> for TranslationView {
    fn from(t: Translation) -> Self {
        let translated_at = DateTime::parse_from_rfc3339(&t.timestamp)
            .map(|at| at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or(t.timestamp);

        Self {
            original: t.original,
            translated: t.translated,
            language_label: t.target_language,
            translated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Loading,
    Success(TranslationView),
    Error(String),
}

/// Drives one translator screen. Rendering surfaces read `state()`,
/// `banner()` and the submit-control accessors; they never mutate directly.
pub struct Controller<A> {
    api: A,
    state: UiState,
    banner: Option<Banner>,
}

impl<A: TranslateApi> Controller<A> {
    pub fn new(api: A) -> Self {
        Self { api, state: UiState::Idle, banner: None }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn submit_enabled(&self) -> bool {
        self.state != UiState::Loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submit_enabled() { "Translate" } else { "Translating..." }
    }

    /// The current banner, unless it has already expired.
    pub fn banner(&self) -> Option<&Banner> {
        self.banner_at(Instant::now())
    }

    pub fn banner_at(&self, now: Instant) -> Option<&Banner> {
        self.banner.as_ref().filter(|b| b.is_visible_at(now))
    }

    /// Text for the copy button: the translation only.
    pub fn clipboard_text(&self) -> Option<&str> {
        match &self.state {
            UiState::Success(view) => Some(&view.translated),
            _ => None,
        }
    }

    /// Copy button. Puts the translation on `clipboard` and reports the
    /// outcome in a banner. Returns `false` when there is nothing to copy.
    pub fn copy_result(&mut self, clipboard: &mut impl Clipboard) -> bool {
        let Some(text) = self.clipboard_text().map(str::to_owned) else {
            return false;
        };

        match clipboard.set_text(&text) {
            Ok(()) => {
                self.show("Copied!", BannerKind::Success);
                true
            }
            Err(e) => {
                warn!(error = %e, "clipboard write failed");
                self.show("Failed to copy text", BannerKind::Error);
                false
            }
        }
    }

    /// Back to `Idle` once the outcome has been rendered.
    pub fn reset(&mut self) {
        if self.state != UiState::Loading {
            self.state = UiState::Idle;
        }
    }

    /// Validate and enter `Loading`. On failure the state is left alone and
    /// an error banner explains why.
    pub fn begin(&mut self, text: &str, language: Option<&str>) -> Result<TranslationRequest, ValidationError> {
        let checked = if self.state == UiState::Loading {
            Err(ValidationError::Busy)
        } else {
            validate_submission(text, language)
        };

        match checked {
            Ok(request) => {
                self.state = UiState::Loading;
                Ok(request)
            }
            Err(e) => {
                self.show(e.to_string(), BannerKind::Error);
                Err(e)
            }
        }
    }

    /// Leave `Loading` with whatever the server said.
    pub fn finish(&mut self, outcome: Result<Translation, ClientError>) {
        match outcome {
            Ok(translation) => {
                self.state = UiState::Success(translation.into());
                self.show("Translation completed successfully!", BannerKind::Success);
            }
            Err(e) => {
                warn!(error = %e, "translation failed");
                let message = format!("Translation failed: {e}");
                self.show(message.clone(), BannerKind::Error);
                self.state = UiState::Error(message);
            }
        }
    }

    /// Full submit: validate, call the server, record the outcome.
    pub async fn submit(&mut self, text: &str, language: Option<&str>) -> Result<&UiState, ValidationError> {
        let request = self.begin(text, language)?;
        let outcome = self.api.translate(&request).await;
        self.finish(outcome);
        Ok(&self.state)
    }

    /// Startup ping. Only sets a banner; never blocks translating.
    pub async fn check_health(&mut self) -> bool {
        match self.api.health().await {
            Ok(health) if health.is_healthy() => {
                info!("backend connection successful");
                self.show("Connected to translation service!", BannerKind::Success);
                true
            }
            outcome => {
                if let Err(e) = outcome {
                    warn!(error = %e, "backend connection failed");
                }
                self.show("Backend connection failed. Please check if server is running.", BannerKind::Error);
                false
            }
        }
    }

    fn show(&mut self, message: impl Into<String>, kind: BannerKind) {
        self.banner = Some(Banner::new(message, kind));
    }
}
