// Rust guideline compliant 2026-10-19

//! Error types for the Folsync core library.

use thiserror::Error;

/// Result type alias for Folsync operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Folsync operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset source has an unusable shape.
    #[error("Invalid dataset: {0}")]
    Dataset(String),

    /// No dataset has been loaded yet.
    #[error("Dataset not loaded")]
    DatasetUnavailable,

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A CSS selector failed to compile.
    #[error("Invalid selector: {0}")]
    Selector(String),
}
