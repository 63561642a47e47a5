// Rust guideline compliant 2026-10-19

//! Dataset providers.
//!
//! A provider yields raw [`DatasetRecord`]s; building the index is left to
//! the caller so a reload can happen outside any lock.

use folsync_core::normalize::to_profile_url;
use folsync_core::{DatasetRecord, Error as CoreError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Source of reference dataset records.
pub trait DatasetProvider: Send + Sync {
    /// Loads every record from the source.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or has the wrong shape.
    fn load(&self) -> Result<Vec<DatasetRecord>>;
}

/// Provider reading a JSON array from disk.
#[derive(Debug, Clone)]
pub struct FileDatasetProvider {
    path: PathBuf,
}

impl FileDatasetProvider {
    /// Creates a provider for the given JSON file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the dataset file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

impl DatasetProvider for FileDatasetProvider {
    fn load(&self) -> Result<Vec<DatasetRecord>> {
        let text = std::fs::read_to_string(&self.path).map_err(CoreError::from)?;
        let records = parse_dataset_json(&text)?;
        tracing::info!(
            path = %self.path.display(),
            records = records.len(),
            "dataset file read"
        );
        Ok(records)
    }
}

/// Provider serving a fixed list of records.
#[derive(Debug, Clone, Default)]
pub struct StaticDatasetProvider {
    records: Vec<DatasetRecord>,
}

impl StaticDatasetProvider {
    /// Creates a provider over the given records.
    pub fn new(records: Vec<DatasetRecord>) -> Self {
        Self { records }
    }
}

impl DatasetProvider for StaticDatasetProvider {
    fn load(&self) -> Result<Vec<DatasetRecord>> {
        Ok(self.records.clone())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDatasetItem {
    Name(String),
    Record(DatasetRecord),
    Other(serde_json::Value),
}

/// Parses dataset JSON text into records.
///
/// The top level must be an array. Elements may be `{account, link}`
/// objects or bare strings; a bare string becomes a record whose link is the
/// derived profile URL. Anything else becomes an empty record, which the
/// index skips.
///
/// # Errors
///
/// Returns an error if the text is not JSON or the top level is not an array.
pub fn parse_dataset_json(text: &str) -> Result<Vec<DatasetRecord>> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(CoreError::from)?;
    let serde_json::Value::Array(items) = value else {
        return Err(CoreError::Dataset("dataset must be a JSON array".to_string()).into());
    };

    let records = items
        .into_iter()
        .map(|item| match serde_json::from_value(item) {
            Ok(RawDatasetItem::Name(name)) => {
                let link = to_profile_url(&name);
                DatasetRecord::new(name, link)
            }
            Ok(RawDatasetItem::Record(record)) => record,
            Ok(RawDatasetItem::Other(_)) | Err(_) => DatasetRecord::default(),
        })
        .collect();
    Ok(records)
}
