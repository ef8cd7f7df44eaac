//! error types for gatewarden-session.

use gatewarden_types::ClaimsError;
use thiserror::Error;

/// errors that can occur while validating a session.
///
/// callers of [`SessionCache::resolve`] never see these - any validation
/// error resolves to "not authenticated". They surface in logs and in
/// direct transport use.
///
/// [`SessionCache::resolve`]: crate::SessionCache::resolve
#[derive(Debug, Error)]
pub enum Error {
    /// the validation request could not be completed (connect, timeout, body).
    #[error("validation request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// the authentication service answered with a non-success status.
    #[error("auth service returned status {0}")]
    Status(reqwest::StatusCode),

    /// the token payload could not be decoded into claims.
    #[error("failed to decode session claims: {0}")]
    Claims(#[from] ClaimsError),
}
