//! the action-rank table.

use std::collections::BTreeMap;

/// the fixed action vocabulary and its ranks.
///
/// holding a higher-ranked action on a resource implies holding every
/// lower-ranked action on that same resource.
const DEFAULT_RANKS: &[(&str, u8)] = &[
    ("read", 1),
    ("create", 2),
    ("update", 3),
    ("delete", 4),
    ("manage", 5),
    ("admin", 10),
];

/// immutable mapping from action verbs to their rank.
///
/// the table is a value injected into the evaluator rather than
/// process-global state; [`RankTable::default`] is the fixed vocabulary
/// above. Actions not in the table rank 0, weaker than everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable {
    ranks: BTreeMap<String, u8>,
}

impl RankTable {
    /// build a table from explicit `(action, rank)` pairs.
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u8)>,
        S: Into<String>,
    {
        Self {
            ranks: pairs.into_iter().map(|(a, r)| (a.into(), r)).collect(),
        }
    }

    /// rank of an action verb; unknown actions rank 0.
    pub fn rank(&self, action: &str) -> u8 {
        self.ranks.get(action).copied().unwrap_or(0)
    }
}

impl Default for RankTable {
    fn default() -> Self {
        Self::new(DEFAULT_RANKS.iter().copied())
    }
}
