/*
 * Responsibility
 * - GET /health (liveness)
 * - Deliberately in front of every guard
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
