// Rust guideline compliant 2026-10-19

//! Shared application services for Folsync.
//!
//! This crate provides reusable, non-CLI-specific helpers for dataset
//! loading, the search contract, configuration context, and a standardized
//! error envelope.

pub mod context;
pub mod error;
pub mod provider;
pub mod response;
pub mod search;

pub use context::{load_index, AppContext};
pub use error::{AppError, ErrorCode, Result};
pub use provider::{parse_dataset_json, DatasetProvider, FileDatasetProvider, StaticDatasetProvider};
pub use response::ErrorEnvelope;
pub use search::{
    match_status, search, SearchRequest, SearchResponse, SearchResult, SearchStatus, StatusReport,
};
