//! the session validation cache.
//!
//! resolves opaque session tokens into principals, memoizing successful
//! validations for a fixed ttl. Expiry is lazy - an entry is removed when
//! it is next looked up and found stale, not by a background sweep - so the
//! cache does no work for tokens nobody presents.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use gatewarden_types::{PermissionSet, Principal, decode_claims};
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::error::Error;
use crate::transport::ValidationTransport;

/// a validated session held by the cache.
///
/// owned exclusively by the cache and never exposed; callers get clones of
/// the principal.
struct CacheEntry {
    principal: Principal,
    expires_at: Instant,
}

/// lifecycle state of a token's cache entry at lookup time.
enum EntryState {
    /// a live entry - the principal is trusted without a transport call.
    Valid(Principal),
    /// an entry exists but its ttl has elapsed; re-validation required.
    Expired,
    /// no entry for this token.
    Absent,
}

/// ttl-bounded cache of validated sessions.
///
/// shared by all request handlers. Concurrent resolves for the same
/// uncached token may each call the transport (duplicate work is accepted,
/// there is no single-flight de-duplication); the entry map stays
/// consistent and the last write wins.
pub struct SessionCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
    transport: Arc<dyn ValidationTransport>,
}

impl SessionCache {
    /// create a cache that validates through the given transport.
    pub fn new(transport: Arc<dyn ValidationTransport>, ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            transport,
        }
    }

    /// resolve a session token into a principal.
    ///
    /// returns the cached principal when a live entry exists; otherwise
    /// validates remotely, decodes identity claims from the token itself,
    /// merges the server-asserted permission list, and caches the result
    /// for the configured ttl. Any validation failure resolves to `None`
    /// and evicts whatever was cached for the token - ambiguity about why
    /// validation failed never grants access.
    pub async fn resolve(&self, token: &str) -> Option<Principal> {
        match self.entry_state(token).await {
            EntryState::Valid(principal) => return Some(principal),
            EntryState::Expired => {
                debug!("session cache: entry expired, revalidating");
            }
            EntryState::Absent => {}
        }

        match self.validate(token).await {
            Ok(principal) => {
                let entry = CacheEntry {
                    principal: principal.clone(),
                    expires_at: Instant::now() + self.ttl,
                };
                let mut entries = self.entries.write().await;
                entries.insert(token.to_string(), entry);
                Some(principal)
            }
            Err(err) => {
                warn!("session validation failed: {err}");
                let mut entries = self.entries.write().await;
                entries.remove(token);
                None
            }
        }
    }

    /// remove a token's entry outside the resolve path.
    ///
    /// used by the logout / cookie-clear pathway; the next resolve for the
    /// token must go back to the authentication service.
    pub async fn invalidate(&self, token: &str) {
        let mut entries = self.entries.write().await;
        if entries.remove(token).is_some() {
            debug!("session cache: entry invalidated");
        }
    }

    /// look up a token's entry and classify its lifecycle state.
    async fn entry_state(&self, token: &str) -> EntryState {
        let entries = self.entries.read().await;
        match entries.get(token) {
            Some(entry) if Instant::now() < entry.expires_at => {
                EntryState::Valid(entry.principal.clone())
            }
            Some(_) => EntryState::Expired,
            None => EntryState::Absent,
        }
    }

    /// validate remotely and assemble a fresh principal.
    ///
    /// identity comes from the token's own claims; the permission list
    /// comes from the transport response.
    async fn validate(&self, token: &str) -> Result<Principal, Error> {
        let validation = self.transport.validate(token).await?;
        let claims = decode_claims(token)?;

        Ok(
            Principal::new(claims.subject_id(), claims.username(), claims.role())
                .with_permissions(PermissionSet::from(validation.permissions)),
        )
    }
}
