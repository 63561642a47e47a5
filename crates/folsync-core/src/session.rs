// Rust guideline compliant 2026-10-19

//! Session state: the dataset index and both follower maps.
//!
//! Each field is replaced as a whole. Readers holding an `Arc` keep seeing
//! the structure they cloned even while a replacement is installed.

use crate::dataset::DatasetIndex;
use crate::export::parse_export_file;
use crate::matcher::match_all;
use crate::models::{DatasetRecord, ExportMap, MatchReport, Side};
use crate::reconcile::{not_followed_back, not_following_back, Reconciliation};
use crate::{Error, Result};
use std::path::Path;
use std::sync::Arc;

/// Replaceable state shared by the reconciliation features.
#[derive(Debug, Clone, Default)]
pub struct Session {
    dataset: Option<Arc<DatasetIndex>>,
    followers: Arc<ExportMap>,
    following: Arc<ExportMap>,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a new dataset index and installs it, returning its size.
    pub fn load_dataset<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = DatasetRecord>,
    {
        let index = DatasetIndex::build(records);
        let size = index.len();
        self.replace_dataset(Arc::new(index));
        size
    }

    /// Installs a prebuilt dataset index.
    pub fn replace_dataset(&mut self, index: Arc<DatasetIndex>) {
        self.dataset = Some(index);
    }

    /// Returns the current dataset index, if one is loaded.
    pub fn dataset(&self) -> Option<Arc<DatasetIndex>> {
        self.dataset.clone()
    }

    /// Returns the map for one side.
    pub fn export_map(&self, side: Side) -> Arc<ExportMap> {
        match side {
            Side::Followers => Arc::clone(&self.followers),
            Side::Following => Arc::clone(&self.following),
        }
    }

    /// Replaces the map for one side.
    pub fn replace_export(&mut self, side: Side, map: ExportMap) {
        let map = Arc::new(map);
        match side {
            Side::Followers => self.followers = map,
            Side::Following => self.following = map,
        }
    }

    /// Parses an export and installs it for one side.
    ///
    /// On failure the previous map for that side is kept.
    ///
    /// # Arguments
    ///
    /// * `side` - Which side the export belongs to
    /// * `filename` - File name, used to select the parser
    /// * `text` - File contents
    ///
    /// # Returns
    ///
    /// The number of accounts imported.
    ///
    /// # Errors
    ///
    /// Returns an error if a JSON export cannot be parsed.
    pub fn import(&mut self, side: Side, filename: &str, text: &str) -> Result<usize> {
        let map = parse_export_file(filename, text).inspect_err(|err| {
            tracing::warn!(?side, filename, error = %err, "export import failed, keeping previous map");
        })?;
        let count = map.len();
        self.replace_export(side, map);
        Ok(count)
    }

    /// Reads an export file from disk and imports it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn import_file(&mut self, side: Side, path: &Path) -> Result<usize> {
        let text = std::fs::read_to_string(path).inspect_err(|err| {
            tracing::warn!(?side, path = %path.display(), error = %err, "export read failed");
        })?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.import(side, &filename, &text)
    }

    /// Resets one side to an empty map.
    pub fn clear_side(&mut self, side: Side) {
        self.replace_export(side, ExportMap::new());
    }

    /// Resets both follower maps.
    pub fn clear(&mut self) {
        self.clear_side(Side::Followers);
        self.clear_side(Side::Following);
    }

    /// Accounts the user follows that do not follow back.
    pub fn not_following_back(&self) -> Reconciliation {
        not_following_back(&self.followers, &self.following)
    }

    /// Followers the user does not follow back.
    pub fn not_followed_back(&self) -> Reconciliation {
        not_followed_back(&self.followers, &self.following)
    }

    /// Matches pasted lines against the loaded dataset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DatasetUnavailable`] if no dataset is loaded.
    pub fn match_lines<'a, I>(&self, lines: I) -> Result<MatchReport>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let index = self.dataset.as_ref().ok_or(Error::DatasetUnavailable)?;
        Ok(match_all(lines, index))
    }
}
