use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::warn;

use crate::{
    error::AppError,
    message::{TranslateBody, Translation, TranslationRequest},
    state::SharedState,
};

pub async fn translate_handler(
    State(state): State<SharedState>,
    payload: Result<Json<TranslateBody>, JsonRejection>,
) -> Result<Json<Translation>, AppError> {
    let Json(body) = payload.map_err(|rejection| {
        warn!(%rejection, "unreadable translate body");
        AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let request = TranslationRequest::try_from(body).map_err(|msg| {
        warn!(reason = %msg, "translate request rejected");
        AppError::BadRequest(msg)
    })?;

    let translated = state.translator.translate(&request).await?;

    Ok(Json(Translation::new(request, translated)))
}
