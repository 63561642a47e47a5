// Rust guideline compliant 2026-10-19

//! Multi-key lookup index over the reference dataset.
//!
//! Each dataset entry is reachable through three keys: the bare account
//! key, the normalized link and the `instagram.com/<account>` form. All three
//! share one [`Arc`], so the index reports its size in entries, not keys.

use crate::models::{AccountRecord, DatasetEntry, DatasetRecord};
use crate::normalize::{
    looks_like_url_or_instagram, normalize_account_key, normalize_link_key, to_display_link,
    to_profile_url, DISPLAY_LINK_PREFIX,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Immutable lookup index built from dataset records.
///
/// The index is never patched in place; a reload builds a new one and the
/// owner swaps the pointer.
#[derive(Debug, Clone, Default)]
pub struct DatasetIndex {
    keys: HashMap<String, Arc<DatasetEntry>>,
    entries: usize,
}

impl DatasetIndex {
    /// Builds an index from raw dataset records.
    ///
    /// Records missing an account or a link are skipped.
    ///
    /// # Arguments
    ///
    /// * `records` - Raw records from a dataset provider
    ///
    /// # Returns
    ///
    /// A fully built index.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = DatasetRecord>,
    {
        let mut keys = HashMap::new();
        let mut skipped = 0usize;

        for (position, record) in records.into_iter().enumerate() {
            let (Some(account), Some(link)) = (
                non_blank(record.account.as_deref()),
                non_blank(record.link.as_deref()),
            ) else {
                skipped += 1;
                tracing::debug!(position, "skipping dataset record without account or link");
                continue;
            };

            let account = normalize_account_key(account);
            if account.is_empty() {
                skipped += 1;
                continue;
            }
            let link_key = normalize_link_key(link);
            let entry = Arc::new(DatasetEntry {
                link_url: to_profile_url(link),
                account: account.clone(),
            });

            let display_key = format!("{}{}", DISPLAY_LINK_PREFIX, account);
            keys.insert(account, Arc::clone(&entry));
            keys.insert(link_key, Arc::clone(&entry));
            keys.insert(display_key, entry);
        }

        let entries = keys
            .values()
            .map(|entry| Arc::as_ptr(entry) as usize)
            .collect::<HashSet<_>>()
            .len();

        tracing::info!(entries, keys = keys.len(), skipped, "dataset index built");
        Self { keys, entries }
    }

    /// Returns the number of distinct entries reachable through the index.
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Returns true if the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Returns the number of registered lookup keys.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Resolves a raw identifier to the shared dataset entry.
    ///
    /// Two candidate keys are tried: the link or account key depending on
    /// the identifier's shape, then its display link form.
    pub fn lookup_entry(&self, raw: &str) -> Option<&Arc<DatasetEntry>> {
        let primary = if looks_like_url_or_instagram(raw) {
            normalize_link_key(raw)
        } else {
            normalize_account_key(raw)
        };

        self.keys
            .get(&primary)
            .or_else(|| self.keys.get(&to_display_link(raw)))
    }

    /// Resolves a raw identifier to an [`AccountRecord`].
    ///
    /// # Examples
    ///
    /// ```
    /// use folsync_core::{DatasetIndex, DatasetRecord};
    ///
    /// let index = DatasetIndex::build([DatasetRecord::new("jane", "https://instagram.com/jane/")]);
    /// let record = index.lookup("@Jane").unwrap();
    /// assert_eq!(record.profile_url, "https://www.instagram.com/jane/");
    /// ```
    pub fn lookup(&self, raw: &str) -> Option<AccountRecord> {
        self.lookup_entry(raw).map(|entry| AccountRecord::from(entry.as_ref()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_incomplete_records() {
        let index = DatasetIndex::build([
            DatasetRecord::new("jane", "https://instagram.com/jane/"),
            DatasetRecord {
                account: Some("bob".to_string()),
                link: None,
            },
            DatasetRecord {
                account: Some("  ".to_string()),
                link: Some("https://instagram.com/x/".to_string()),
            },
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.key_count(), 2);
        assert!(index.lookup("bob").is_none());
    }

    #[test]
    fn test_empty_index() {
        let index = DatasetIndex::build(Vec::new());
        assert!(index.is_empty());
        assert!(index.lookup("jane").is_none());
    }
}
