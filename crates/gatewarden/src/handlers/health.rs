//! health check endpoint handler

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// health check response body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// content-Type for health check responses per RFC 8040
const HEALTH_CONTENT_TYPE: &str = "application/health+json; charset=utf-8";

/// gET /health - Health check endpoint
///
/// the core holds no external resources beyond the in-memory session
/// cache, so liveness is the whole story: returns 200 OK with
/// `{"status": "pass"}`.
pub async fn health() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HEALTH_CONTENT_TYPE)],
        Json(HealthResponse { status: "pass" }),
    )
        .into_response()
}
