use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::AppState;

#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let latency_ms =
        u64::try_from(state.candidate_service.latency().as_millis()).unwrap_or(u64::MAX);
    let body = json!({
        "status": "ok",
        "simulated_latency_ms": latency_ms,
    });
    (StatusCode::OK, Json(body))
}
