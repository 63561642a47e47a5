// Rust guideline compliant 2026-10-19

//! Folsync Core Library
//!
//! This crate provides the identity normalization and reconciliation engine:
//! - Identifier normalization (usernames, handles, profile URLs)
//! - Multi-key dataset index
//! - Followers / following export parsing (JSON and HTML)
//! - Set-difference reconciliation between exports
//! - Batch matching of pasted identifiers
//! - Link cleaning, session state, configuration and errors

pub mod clean;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod matcher;
pub mod models;
pub mod normalize;
pub mod reconcile;
pub mod session;

pub use config::{Config, OutputFormat};
pub use dataset::DatasetIndex;
pub use error::{Error, Result};
pub use export::{parse_export_file, parse_export_html, parse_export_json, ExportFormat};
pub use matcher::{match_all, match_one};
pub use models::{
    AccountKey, AccountRecord, DatasetEntry, DatasetRecord, ExportMap, MatchReport, MatchResult,
    Side,
};
pub use reconcile::{diff, not_followed_back, not_following_back, Direction, Reconciliation};
pub use session::Session;
