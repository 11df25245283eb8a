// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::Failure;
use crate::services::agent::AgentError;

pub const TRANSLATION_FAILED: &str = "Translation failed. Please try again.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Translation failed. Please try again.")]
    Translation(#[from] AgentError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Failure::new(msg, None)),
            AppError::Translation(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Failure::new(TRANSLATION_FAILED, Some(e.to_string())),
            ),
        };
        (status, Json(body)).into_response()
    }
}
