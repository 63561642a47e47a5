// Rust guideline compliant 2026-10-19

//! Core data models for Folsync.

use crate::normalize::{normalize_account_key, to_profile_url};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canonical lowercase identifier used for account equality.
pub type AccountKey = String;

/// Canonical map of one imported export, keyed by account.
pub type ExportMap = HashMap<AccountKey, AccountRecord>;

/// A single account with its profile URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Normalized username.
    pub username: AccountKey,
    /// Profile URL for the account.
    #[serde(rename = "url")]
    pub profile_url: String,
}

impl AccountRecord {
    /// Creates a record from any accepted identifier shape, deriving the
    /// direct profile URL.
    ///
    /// # Arguments
    ///
    /// * `username` - Username or handle
    ///
    /// # Returns
    ///
    /// `None` if the username normalizes to an empty key.
    pub fn from_username(username: &str) -> Option<Self> {
        let username = normalize_account_key(username);
        if username.is_empty() {
            return None;
        }
        let profile_url = to_profile_url(&username);
        Some(Self {
            username,
            profile_url,
        })
    }
}

/// Raw record supplied by a dataset provider.
///
/// Both fields are optional so a malformed record can be skipped on its own
/// instead of failing the whole load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// Account name as written in the dataset.
    #[serde(default)]
    pub account: Option<String>,
    /// Profile link as written in the dataset.
    #[serde(default)]
    pub link: Option<String>,
}

impl DatasetRecord {
    /// Creates a record with both fields present.
    pub fn new(account: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            account: Some(account.into()),
            link: Some(link.into()),
        }
    }
}

/// Normalized entry owned by a [`crate::DatasetIndex`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetEntry {
    /// Canonical account key.
    pub account: AccountKey,
    /// Direct profile URL derived from the dataset link.
    pub link_url: String,
}

impl From<&DatasetEntry> for AccountRecord {
    fn from(entry: &DatasetEntry) -> Self {
        Self {
            username: entry.account.clone(),
            profile_url: entry.link_url.clone(),
        }
    }
}

/// Classification of one input line against the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// The line as it was supplied.
    pub raw: String,
    /// Whether the dataset contained the account.
    pub matched: bool,
    /// Display record for the line.
    pub record: AccountRecord,
}

/// Batch classification output with aggregate counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    /// Per-line results in input order.
    pub results: Vec<MatchResult>,
    /// Number of matched lines.
    pub matched: usize,
    /// Number of unmatched lines.
    pub unmatched: usize,
}

/// Which side of the follower data an export belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Accounts following the user.
    Followers,
    /// Accounts the user follows.
    Following,
}
