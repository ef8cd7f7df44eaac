//! the remote-validation transport seam.

use async_trait::async_trait;

use crate::error::Error;

/// outcome of a successful remote validation call.
///
/// identity claims are decoded from the token itself, not from the
/// response; the transport only carries what the server asserts
/// out-of-band - the permission list for this session.
#[derive(Debug, Clone, Default)]
pub struct Validation {
    /// permissions asserted by the authentication service.
    pub permissions: Vec<String>,
}

/// a transport that can ask the authentication service whether a session
/// token is valid.
///
/// the production implementation is [`HttpValidator`]; tests substitute
/// call-counting doubles. Any failure - network error, non-success status,
/// malformed response - is an [`Error`]; the cache treats them all as
/// "not authenticated".
///
/// [`HttpValidator`]: crate::HttpValidator
#[async_trait]
pub trait ValidationTransport: Send + Sync {
    /// validate a session token with the authentication service.
    async fn validate(&self, token: &str) -> Result<Validation, Error>;
}
