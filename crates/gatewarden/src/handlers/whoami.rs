//! session introspection endpoint handler

use axum::Json;
use gatewarden_types::Principal;

use super::SessionContext;

/// gET /whoami - return the authenticated principal
///
/// resolves the caller's session (cache hit or remote validation) and
/// echoes the principal back as json. 401 when unauthenticated.
pub async fn whoami(ctx: SessionContext) -> Json<Principal> {
    Json(ctx.principal)
}
