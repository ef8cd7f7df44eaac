//! integration tests for session resolution and the permission guard
//!
//! drives the `/whoami` and `/logout` endpoints through the full stack
//! (extractor -> cache -> mock transport) and exercises the permission
//! guard on a protected route built the way application routes are.

mod session_common;

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    routing::get,
};
use gatewarden::AppState;
use gatewarden::handlers::{Forbidden, SessionContext};
use gatewarden_authz::AuthzEngine;
use gatewarden_session::SessionCache;
use gatewarden_types::Config;
use session_common::{MockTransport, test_app, token_for};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&body).expect("body should be json")
}

fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("failed to build request")
}

#[tokio::test]
async fn test_whoami_with_bearer_token() {
    let transport = MockTransport::new(&["read:users", "manage:gates"]);
    let app = test_app(transport.clone());
    let token = token_for("42", "alice");

    let response = app
        .oneshot(get_request("/whoami", Some(&token)))
        .await
        .expect("request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let principal = body_json(response).await;
    assert_eq!(principal["id"], "42");
    assert_eq!(principal["username"], "alice");
    assert_eq!(principal["role"], "operator");
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_whoami_with_session_cookie() {
    let transport = MockTransport::new(&[]);
    let app = test_app(transport.clone());
    let token = token_for("42", "alice");

    let request = Request::builder()
        .method("GET")
        .uri("/whoami")
        .header("Cookie", format!("theme=dark; session={token}"))
        .body(Body::empty())
        .expect("failed to build request");

    let response = app.oneshot(request).await.expect("request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let principal = body_json(response).await;
    assert_eq!(principal["username"], "alice");
}

#[tokio::test]
async fn test_whoami_without_token_is_unauthorized() {
    let app = test_app(MockTransport::new(&[]));

    let response = app
        .oneshot(get_request("/whoami", None))
        .await
        .expect("request failed");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_whoami_with_rejected_token_is_unauthorized() {
    let transport = MockTransport::new(&[]);
    transport.set_healthy(false);
    let app = test_app(transport.clone());
    let token = token_for("42", "alice");

    let response = app
        .oneshot(get_request("/whoami", Some(&token)))
        .await
        .expect("request failed");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_repeated_requests_hit_the_cache() {
    let transport = MockTransport::new(&[]);
    let app = test_app(transport.clone());
    let token = token_for("42", "alice");

    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(get_request("/whoami", Some(&token)))
            .await
            .expect("request failed");
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(
        transport.calls(),
        1,
        "only the first request should reach the auth service"
    );
}

#[tokio::test]
async fn test_logout_invalidates_cached_session() {
    let transport = MockTransport::new(&[]);
    let app = test_app(transport.clone());
    let token = token_for("42", "alice");

    // prime the cache
    let response = app
        .clone()
        .oneshot(get_request("/whoami", Some(&token)))
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(transport.calls(), 1);

    // logout drops the entry
    let request = Request::builder()
        .method("POST")
        .uri("/logout")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .expect("failed to build request");
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // the next request must revalidate
    let response = app
        .oneshot(get_request("/whoami", Some(&token)))
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn test_logout_without_token_is_accepted() {
    let app = test_app(MockTransport::new(&[]));

    let request = Request::builder()
        .method("POST")
        .uri("/logout")
        .body(Body::empty())
        .expect("failed to build request");
    let response = app.oneshot(request).await.expect("request failed");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

/// a protected route built the way application routes use the guard
async fn list_users(
    State(state): State<AppState>,
    ctx: SessionContext,
) -> Result<Json<serde_json::Value>, Forbidden> {
    ctx.require(&state.authz, "read:users")?;
    Ok(Json(serde_json::json!({ "users": [] })))
}

fn guarded_app(transport: Arc<MockTransport>) -> Router {
    let config = Config::default();
    let state = AppState {
        sessions: Arc::new(SessionCache::new(transport, config.auth.cache_ttl())),
        authz: AuthzEngine::default(),
        config,
    };
    Router::new()
        .route("/admin/users", get(list_users))
        .with_state(state)
}

#[tokio::test]
async fn test_guard_allows_with_permission() {
    // manage:users subsumes read:users
    let app = guarded_app(MockTransport::new(&["manage:users"]));
    let token = token_for("42", "alice");

    let response = app
        .oneshot(get_request("/admin/users", Some(&token)))
        .await
        .expect("request failed");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_guard_denies_without_permission() {
    let app = guarded_app(MockTransport::new(&["read:reports"]));
    let token = token_for("42", "alice");

    let response = app
        .oneshot(get_request("/admin/users", Some(&token)))
        .await
        .expect("request failed");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing permission: read:users");
}

#[tokio::test]
async fn test_guard_admin_override() {
    let app = guarded_app(MockTransport::new(&["admin"]));
    let token = token_for("1", "root");

    let response = app
        .oneshot(get_request("/admin/users", Some(&token)))
        .await
        .expect("request failed");

    assert_eq!(response.status(), StatusCode::OK);
}
