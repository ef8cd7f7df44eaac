//! session token claims and payload decoding.
//!
//! the session token is a self-contained three-segment credential
//! (`header.payload.signature`). The payload is base64url-encoded json and
//! can be decoded without a network call. Signature verification is the
//! authentication service's job - this crate only reads identity claims
//! after the upstream has vouched for the token.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// errors from decoding a session token payload.
#[derive(Debug, Error)]
pub enum ClaimsError {
    /// the token does not have exactly three dot-separated segments.
    #[error("token is not a three-segment credential")]
    MalformedToken,

    /// the payload segment is not valid base64url.
    #[error("invalid payload encoding: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// the payload decoded but is not valid claims json.
    #[error("invalid payload JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// identity claims carried in the session token payload.
///
/// every field is defaulted so that tokens from inconsistent upstream
/// shapes still decode; the accessors below apply the documented fallback
/// chains so callers always get non-empty identity fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionClaims {
    /// subject - primary identifier for the user.
    #[serde(default)]
    pub sub: String,

    /// secondary user identifier, used when `sub` is absent.
    #[serde(default)]
    pub user_id: String,

    /// preferred username.
    #[serde(default)]
    pub username: String,

    /// role name asserted by the token.
    #[serde(default)]
    pub role: String,

    /// expiry as a unix timestamp, if present.
    #[serde(default)]
    pub exp: Option<i64>,

    /// issued-at as a unix timestamp, if present.
    #[serde(default)]
    pub iat: Option<i64>,
}

impl SessionClaims {
    /// get the subject identifier.
    ///
    /// priority: `sub` > `user_id` > `"0"`.
    pub fn subject_id(&self) -> &str {
        if !self.sub.is_empty() {
            &self.sub
        } else if !self.user_id.is_empty() {
            &self.user_id
        } else {
            "0"
        }
    }

    /// get the username.
    ///
    /// priority: `username` > `sub` > `"unknown"`.
    pub fn username(&self) -> &str {
        if !self.username.is_empty() {
            &self.username
        } else if !self.sub.is_empty() {
            &self.sub
        } else {
            "unknown"
        }
    }

    /// get the role, falling back to `"user"`.
    pub fn role(&self) -> &str {
        if !self.role.is_empty() { &self.role } else { "user" }
    }

    /// token expiry as a utc timestamp, if the `exp` claim is present and valid.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    }
}

/// decode the claims from a session token payload.
///
/// splits the token into its three segments and base64url-decodes the
/// middle one. The signature segment is not inspected.
pub fn decode_claims(token: &str) -> Result<SessionClaims, ClaimsError> {
    let mut segments = token.split('.');
    let payload = match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(_header), Some(payload), Some(_signature), None) => payload,
        _ => return Err(ClaimsError::MalformedToken),
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}
