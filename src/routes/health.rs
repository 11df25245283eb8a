use axum::{Json, extract::State};

use crate::{
    message::HealthStatus,
    state::{SERVER_NAME, SharedState},
};

/// Liveness plus credential presence. Never contacts the agent.
pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthStatus> {
    Json(HealthStatus::healthy(state.credential_configured, SERVER_NAME))
}
