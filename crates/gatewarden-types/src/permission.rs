//! permission strings and permission sets.
//!
//! a permission is either the blanket [`ADMIN`] literal or an
//! `action:resource` pair like `read:users` or `manage:*`. Permissions are
//! plain strings compared by value; the evaluator parses them on demand.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// the blanket permission that grants every action on every resource.
pub const ADMIN: &str = "admin";

/// split an `action:resource` permission into its two parts.
///
/// splits on the first `:` and requires both parts to be non-empty, so
/// `"read:"`, `":users"` and `"foo"` all return `None`. Anything that does
/// not split participates in exact matching only.
pub fn split_scoped(raw: &str) -> Option<(&str, &str)> {
    let (action, resource) = raw.split_once(':')?;
    if action.is_empty() || resource.is_empty() {
        return None;
    }
    Some((action, resource))
}

/// an unordered set of permission strings held by one principal.
///
/// backed by a btreeset so iteration order is deterministic - the evaluator
/// does not depend on order, but test fixtures do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<String>);

impl PermissionSet {
    /// create an empty permission set.
    pub fn new() -> Self {
        Self::default()
    }

    /// parse a comma-separated header value into a permission set.
    ///
    /// entries are trimmed and empty entries are dropped, so an empty or
    /// whitespace-only value yields an empty set.
    pub fn from_header(value: &str) -> Self {
        value
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// check whether the set contains a permission verbatim.
    pub fn contains(&self, permission: &str) -> bool {
        self.0.contains(permission)
    }

    /// add a permission to the set.
    pub fn insert(&mut self, permission: impl Into<String>) {
        self.0.insert(permission.into());
    }

    /// iterate over the permissions in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// number of distinct permissions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// true if the set holds no permissions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for PermissionSet {
    fn from(permissions: Vec<String>) -> Self {
        permissions.into_iter().collect()
    }
}

impl FromIterator<String> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}
