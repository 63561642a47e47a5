// Rust guideline compliant 2026-10-19

//! Search request/response contract shared by the HTTP variant and the CLI.

use folsync_core::DatasetIndex;
use serde::{Deserialize, Serialize};

/// Body of a search request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Raw input lines, in order.
    #[serde(default)]
    pub lines: Vec<String>,
}

/// Match state of one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStatus {
    /// The line resolves to a dataset record.
    #[serde(rename = "match")]
    Match,
    /// The line does not resolve.
    #[serde(rename = "not match")]
    NotMatch,
}

/// Result for one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The line exactly as supplied.
    pub input: String,
    /// Whether it matched.
    pub status: SearchStatus,
}

/// Body of a search response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// One result per request line, in request order.
    pub results: Vec<SearchResult>,
}

/// Dataset load state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    /// Whether a non-empty dataset is loaded.
    pub loaded: bool,
    /// Number of distinct dataset entries.
    pub count: usize,
}

impl StatusReport {
    /// Describes the given index.
    #[must_use]
    pub fn from_index(index: &DatasetIndex) -> Self {
        Self {
            loaded: !index.is_empty(),
            count: index.len(),
        }
    }
}

/// Classifies every line against the index.
///
/// Unlike [`folsync_core::match_all`], blank lines are not dropped: every
/// input is echoed back so callers can align results with their request.
pub fn match_status<'a, I>(lines: I, index: &DatasetIndex) -> Vec<SearchResult>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(|line| {
            let trimmed = line.trim();
            let status = if !trimmed.is_empty() && index.lookup_entry(trimmed).is_some() {
                SearchStatus::Match
            } else {
                SearchStatus::NotMatch
            };
            SearchResult {
                input: line.to_string(),
                status,
            }
        })
        .collect()
}

/// Answers a search request.
#[must_use]
pub fn search(request: &SearchRequest, index: &DatasetIndex) -> SearchResponse {
    let results = match_status(request.lines.iter().map(String::as_str), index);
    tracing::debug!(lines = results.len(), "search handled");
    SearchResponse { results }
}
