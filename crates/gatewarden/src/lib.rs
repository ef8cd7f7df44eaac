//! gatewarden library - http surface and application setup.
//!
//! this crate wires the authorization core into an axum application:
//! - [`handlers`]: session extraction, permission guard, health and session endpoints
//! - [`cli`]: command-line interface implementation

#![warn(missing_docs)]

/// command-line interface implementation.
pub mod cli;
/// session extraction, permission guard, and http endpoints.
pub mod handlers;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use gatewarden_authz::AuthzEngine;
use gatewarden_session::SessionCache;
use gatewarden_types::Config;

/// shared state for all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// session validation cache.
    pub sessions: Arc<SessionCache>,
    /// permission evaluation engine.
    pub authz: AuthzEngine,
    /// server configuration.
    pub config: Config,
}

/// create the axum application with all routes.
pub fn create_app(sessions: Arc<SessionCache>, authz: AuthzEngine, config: Config) -> Router {
    let state = AppState {
        sessions,
        authz,
        config,
    };

    Router::new()
        .route("/health", get(handlers::health))
        .route("/whoami", get(handlers::whoami))
        .route("/logout", post(handlers::logout))
        .with_state(state)
}
