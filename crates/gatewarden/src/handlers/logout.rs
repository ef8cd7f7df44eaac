//! logout endpoint handler

use axum::{extract::State, http::HeaderMap, http::StatusCode};
use tracing::debug;

use super::session_auth::extract_token;
use crate::AppState;

/// pOST /logout - drop the caller's session from the cache
///
/// the cookie itself is cleared by the front-end layer; this endpoint
/// removes the cached validation so the token cannot be served from the
/// cache afterwards. Always returns 204 - logging out an unknown or
/// already-expired session is not an error.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    if let Some(token) = extract_token(&headers) {
        state.sessions.invalidate(token).await;
        debug!("session invalidated on logout");
    }
    StatusCode::NO_CONTENT
}
