//! principal type representing an authenticated identity.

use serde::{Deserialize, Serialize};

use crate::permission::PermissionSet;

/// an authenticated identity plus its resolved permission set.
///
/// principals are constructed fresh on every session resolution and never
/// mutated in place - a new validation produces a new principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// subject identifier from the session token.
    pub id: String,

    /// username for display and audit logging.
    pub username: String,

    /// role name asserted by the token (e.g. "user", "operator").
    pub role: String,

    /// permissions asserted by the authentication service for this session.
    pub permissions: PermissionSet,
}

impl Principal {
    /// create a principal with an empty permission set.
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            role: role.into(),
            permissions: PermissionSet::new(),
        }
    }

    /// attach a permission set, consuming self.
    pub fn with_permissions(mut self, permissions: PermissionSet) -> Self {
        self.permissions = permissions;
        self
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.username, self.id)
    }
}
