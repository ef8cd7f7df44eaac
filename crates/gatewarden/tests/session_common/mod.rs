//! shared test utilities for session endpoint tests

#![allow(dead_code)] // Test utilities may not all be used in every test file

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::http::StatusCode;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use gatewarden::create_app;
use gatewarden_authz::AuthzEngine;
use gatewarden_session::{Error, SessionCache, Validation, ValidationTransport};
use gatewarden_types::Config;

/// transport double that counts calls and can be switched to failing.
pub struct MockTransport {
    calls: AtomicUsize,
    healthy: AtomicBool,
    permissions: Vec<String>,
}

impl MockTransport {
    /// create a healthy transport asserting the given permissions.
    pub fn new(permissions: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            healthy: AtomicBool::new(true),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        })
    }

    /// number of validate calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// switch the transport between succeeding and failing.
    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }
}

#[async_trait]
impl ValidationTransport for MockTransport {
    async fn validate(&self, _token: &str) -> Result<Validation, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.healthy.load(Ordering::SeqCst) {
            Ok(Validation {
                permissions: self.permissions.clone(),
            })
        } else {
            Err(Error::Status(StatusCode::UNAUTHORIZED))
        }
    }
}

/// build a session token whose payload carries the given identity claims.
pub fn token_for(sub: &str, username: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        serde_json::json!({ "sub": sub, "username": username, "role": "operator" }).to_string(),
    );
    format!("{header}.{payload}.signature")
}

/// build the application around a mock transport with default config.
pub fn test_app(transport: Arc<MockTransport>) -> Router {
    let config = Config::default();
    let sessions = Arc::new(SessionCache::new(transport, config.auth.cache_ttl()));
    create_app(sessions, AuthzEngine::default(), config)
}
