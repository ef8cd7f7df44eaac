//! the permission evaluation engine.

use std::sync::Arc;

use gatewarden_types::{ADMIN, Principal, split_scoped};

use crate::rank::RankTable;

/// thread-safe permission evaluation engine.
///
/// wraps the rank table in arc for cheap cloning and concurrent access.
/// evaluation takes `&self`, has no side effects, and is a pure function
/// of its inputs, making it safe to call from any number of async handlers.
pub struct AuthzEngine {
    ranks: Arc<RankTable>,
}

impl AuthzEngine {
    /// create an engine with the given rank table.
    pub fn new(ranks: RankTable) -> Self {
        Self {
            ranks: Arc::new(ranks),
        }
    }

    /// get the rank table used by this engine.
    pub fn ranks(&self) -> &RankTable {
        &self.ranks
    }

    /// decide whether a principal may perform `required`.
    ///
    /// deny-by-default: an absent principal or an empty permission set is
    /// never authorized. A held `admin` permission grants everything.
    /// Otherwise the requirement is granted if any held permission matches
    /// it verbatim, or subsumes it hierarchically: same resource (or the
    /// `*` wildcard) and an equal-or-higher-ranked action.
    ///
    /// held permissions that do not split into two non-empty
    /// `action:resource` parts participate in exact matching only.
    pub fn can(&self, principal: Option<&Principal>, required: &str) -> bool {
        let Some(user) = principal else {
            return false;
        };

        if user.permissions.contains(ADMIN) {
            return true;
        }

        for held in user.permissions.iter() {
            if held == required {
                return true;
            }

            if let (Some((action_held, resource_held)), Some((action_req, resource_req))) =
                (split_scoped(held), split_scoped(required))
                && (resource_held == "*" || resource_held == resource_req)
                && self.ranks.rank(action_held) >= self.ranks.rank(action_req)
            {
                return true;
            }
        }

        false
    }
}

impl Default for AuthzEngine {
    fn default() -> Self {
        Self::new(RankTable::default())
    }
}

impl Clone for AuthzEngine {
    fn clone(&self) -> Self {
        Self {
            ranks: Arc::clone(&self.ranks),
        }
    }
}
