// Rust guideline compliant 2026-10-19

//! Set-difference reconciliation between followers and following maps.

use crate::models::{AccountRecord, ExportMap};
use serde::Serialize;
use std::cmp::Ordering;

/// Which difference to compute between two maps `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Accounts present in `b` but missing from `a`.
    InBNotInA,
    /// Accounts present in `a` but missing from `b`.
    InANotInB,
}

/// Outcome of a reconciliation query.
///
/// `Unavailable` means at least one side has no data, which is distinct
/// from a perfect overlap producing an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "accounts", rename_all = "snake_case")]
pub enum Reconciliation {
    /// One of the maps is empty.
    Unavailable,
    /// Accounts sorted by username.
    Accounts(Vec<AccountRecord>),
}

impl Reconciliation {
    /// Returns the accounts, or `None` when data is unavailable.
    pub fn accounts(&self) -> Option<&[AccountRecord]> {
        match self {
            Self::Unavailable => None,
            Self::Accounts(accounts) => Some(accounts),
        }
    }

    /// Returns true if the query could not run for lack of data.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

/// Computes the ordered difference between two account maps.
///
/// # Arguments
///
/// * `a` - First map
/// * `b` - Second map
/// * `direction` - Which side's surplus to return
///
/// # Returns
///
/// [`Reconciliation::Unavailable`] if either map is empty, otherwise the
/// surplus accounts sorted with [`collate`].
pub fn diff(a: &ExportMap, b: &ExportMap, direction: Direction) -> Reconciliation {
    if a.is_empty() || b.is_empty() {
        return Reconciliation::Unavailable;
    }

    let (source, other) = match direction {
        Direction::InBNotInA => (b, a),
        Direction::InANotInB => (a, b),
    };

    let mut accounts: Vec<AccountRecord> = source
        .iter()
        .filter(|(key, _)| !other.contains_key(*key))
        .map(|(_, record)| record.clone())
        .collect();
    accounts.sort_by(|x, y| collate(&x.username, &y.username));

    Reconciliation::Accounts(accounts)
}

/// Accounts the user follows that do not follow back.
pub fn not_following_back(followers: &ExportMap, following: &ExportMap) -> Reconciliation {
    diff(followers, following, Direction::InBNotInA)
}

/// Followers the user does not follow back.
pub fn not_followed_back(followers: &ExportMap, following: &ExportMap) -> Reconciliation {
    diff(followers, following, Direction::InANotInB)
}

/// Username ordering: case-insensitive first, raw text as tie-break.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
