//! session authentication for http endpoints
//!
//! this module resolves the caller's session token into a [`Principal`]
//! and enforces permissions on protected routes.
//!
//! ## Authentication flow
//!
//! 1. Extract the token from `Authorization: Bearer <token>` or the
//!    `session` cookie
//! 2. Resolve it through the session cache (remote validation on miss)
//! 3. Reject with 401 if there is no token or validation fails
//! 4. Handlers call [`SessionContext::require`] to enforce a permission,
//!    rejecting with 403 when the principal lacks it

use axum::{
    Json,
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION, header::COOKIE, request::Parts},
    response::{IntoResponse, Response},
};
use gatewarden_authz::AuthzEngine;
use gatewarden_types::Principal;

use crate::AppState;

/// name of the cookie carrying the session token.
const SESSION_COOKIE: &str = "session";

/// context for an authenticated request.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// the resolved principal.
    pub principal: Principal,
    /// the raw session token (for upstream proxying and invalidation).
    pub token: String,
}

impl SessionContext {
    /// enforce a required permission for this request.
    ///
    /// returns a 403 rejection naming the missing permission when the
    /// principal does not hold it.
    pub fn require(&self, authz: &AuthzEngine, permission: &str) -> Result<(), Forbidden> {
        if authz.can(Some(&self.principal), permission) {
            Ok(())
        } else {
            Err(Forbidden {
                permission: permission.to_string(),
            })
        }
    }
}

/// rejection for requests that could not be authenticated.
#[derive(Debug)]
pub enum SessionRejection {
    /// no token in the Authorization header or session cookie.
    MissingToken,
    /// the token did not resolve to a valid session.
    InvalidSession,
}

impl SessionRejection {
    fn message(&self) -> &'static str {
        match self {
            Self::MissingToken => "missing session token",
            Self::InvalidSession => "invalid or expired session",
        }
    }
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "error": self.message() })),
        )
            .into_response()
    }
}

/// rejection for authenticated requests lacking a required permission.
#[derive(Debug)]
pub struct Forbidden {
    permission: String,
}

impl IntoResponse for Forbidden {
    fn into_response(self) -> Response {
        (
            StatusCode::FORBIDDEN,
            Json(serde_json::json!({
                "error": format!("Missing permission: {}", self.permission),
            })),
        )
            .into_response()
    }
}

/// parse a Bearer token from the Authorization header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

/// find the session cookie in the Cookie header
fn session_cookie(headers: &HeaderMap) -> Option<&str> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then_some(value)
    })
}

/// extract the session token from a request, header first, cookie second.
pub(crate) fn extract_token(headers: &HeaderMap) -> Option<&str> {
    bearer_token(headers).or_else(|| session_cookie(headers))
}

impl FromRequestParts<AppState> for SessionContext {
    type Rejection = SessionRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers)
            .ok_or(SessionRejection::MissingToken)?
            .to_string();

        let principal = state
            .sessions
            .resolve(&token)
            .await
            .ok_or(SessionRejection::InvalidSession)?;

        Ok(SessionContext { principal, token })
    }
}
