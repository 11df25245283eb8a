//! Client-side half of the exchange: input validation, the UI state machine
//! and the HTTP client that talks to the translation server.

pub mod api;
pub mod clipboard;
pub mod controller;

pub use api::{ApiClient, ClientError, TranslateApi};
pub use clipboard::{Clipboard, SystemClipboard};
pub use controller::{
    Banner, BannerKind, CharCounter, Controller, TranslationView, UiState, ValidationError, validate_submission,
};
