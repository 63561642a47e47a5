// Rust guideline compliant 2026-10-19

//! Export parsing for followers / following data dumps.
//!
//! Two encodings of the same export are supported: a JSON tree of unknown
//! shape and an HTML page. Both produce an [`ExportMap`] keyed by account.

use crate::models::{AccountKey, AccountRecord, ExportMap};
use crate::normalize::{extract_username_from_identifier, to_profile_url};
use crate::{Error, Result};
use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::Path;

/// Field holding the list of account entries in a JSON export record.
pub const STRING_LIST_FIELD: &str = "string_list_data";

/// Fields that may carry the identifier, in priority order.
pub const IDENTIFIER_FIELDS: [&str; 3] = ["value", "string", "name"];

/// Field carrying the precise profile URL of an entry.
pub const HREF_FIELD: &str = "href";

/// Export file encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// JSON export.
    Json,
    /// HTML export.
    Html,
}

impl ExportFormat {
    /// Selects the format from a file name: `.json` is JSON, anything else
    /// is treated as HTML.
    pub fn from_filename(filename: &str) -> Self {
        let is_json = Path::new(filename)
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::Json
        } else {
            Self::Html
        }
    }
}

/// Parses an export file's contents, dispatching on its extension.
///
/// # Arguments
///
/// * `filename` - Name of the uploaded file
/// * `text` - File contents
///
/// # Returns
///
/// The canonical account map of the export.
///
/// # Errors
///
/// Returns an error if a `.json` file is not valid JSON.
pub fn parse_export_file(filename: &str, text: &str) -> Result<ExportMap> {
    let format = ExportFormat::from_filename(filename);
    let map = match format {
        ExportFormat::Json => parse_export_json_str(text)?,
        ExportFormat::Html => parse_export_html(text)?,
    };
    tracing::info!(filename, ?format, accounts = map.len(), "export parsed");
    Ok(map)
}

/// Parses JSON export text.
///
/// Nesting depth is unbounded; the parser grows its stack on demand.
///
/// # Errors
///
/// Returns an error if the text is not valid JSON.
pub fn parse_export_json_str(text: &str) -> Result<ExportMap> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(parse_export_json(&value))
}

/// An identifier found in an export, with its optional profile URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Username, handle or profile URL.
    pub identifier: &'a str,
    /// Precise profile URL supplied next to the identifier.
    pub href: Option<&'a str>,
}

/// Builds an [`ExportMap`] from a parsed JSON export of any shape.
pub fn parse_export_json(value: &Value) -> ExportMap {
    let mut builder = ExportMapBuilder::default();
    for candidate in collect_json_candidates(value) {
        builder.insert(candidate);
    }
    builder.finish()
}

/// Walks a JSON tree and collects every candidate identifier in document
/// order.
///
/// Arrays are walked element-wise, strings are candidates, and objects
/// contribute their `string_list_data` entries before each of their values
/// is walked in turn. The walk uses an explicit stack, so nesting depth is
/// bounded only by memory.
pub fn collect_json_candidates(value: &Value) -> Vec<Candidate<'_>> {
    let mut candidates = Vec::new();
    let mut stack = vec![value];

    while let Some(node) = stack.pop() {
        match node {
            Value::String(text) => candidates.push(Candidate {
                identifier: text,
                href: None,
            }),
            Value::Array(items) => stack.extend(items.iter().rev()),
            Value::Object(fields) => {
                if let Some(Value::Array(entries)) = fields.get(STRING_LIST_FIELD) {
                    candidates.extend(entries.iter().filter_map(string_list_candidate));
                }
                stack.extend(fields.values().rev());
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => {}
        }
    }

    candidates
}

fn string_list_candidate(entry: &Value) -> Option<Candidate<'_>> {
    let identifier = IDENTIFIER_FIELDS
        .iter()
        .find_map(|field| non_empty_str(entry.get(*field)))?;
    Some(Candidate {
        identifier,
        href: non_empty_str(entry.get(HREF_FIELD)),
    })
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
}

/// One way of pulling candidate identifiers out of an HTML export.
#[derive(Clone, Copy)]
pub struct HtmlStrategy {
    /// Strategy name, used in logs.
    pub name: &'static str,
    extract: fn(&Html) -> Result<Vec<String>>,
}

/// HTML extraction strategies, tried in order; the first one that yields at
/// least one account wins.
pub const HTML_STRATEGIES: [HtmlStrategy; 2] = [
    HtmlStrategy {
        name: "anchor",
        extract: anchor_identifiers,
    },
    HtmlStrategy {
        name: "heading",
        extract: heading_identifiers,
    },
];

/// Parses an HTML export.
///
/// # Errors
///
/// Returns an error only if a built-in selector fails to compile.
pub fn parse_export_html(text: &str) -> Result<ExportMap> {
    let document = Html::parse_document(text);

    for strategy in &HTML_STRATEGIES {
        let mut builder = ExportMapBuilder::default();
        for identifier in (strategy.extract)(&document)? {
            builder.insert(Candidate {
                identifier: &identifier,
                href: None,
            });
        }
        let map = builder.finish();
        if !map.is_empty() {
            tracing::debug!(strategy = strategy.name, accounts = map.len(), "html strategy matched");
            return Ok(map);
        }
    }

    Ok(ExportMap::new())
}

fn anchor_identifiers(document: &Html) -> Result<Vec<String>> {
    let selector = selector("a[href]")?;
    Ok(document
        .select(&selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| href.to_lowercase().contains("instagram.com"))
        .map(str::to_string)
        .collect())
}

fn heading_identifiers(document: &Html) -> Result<Vec<String>> {
    let selector = selector("h2")?;
    Ok(document
        .select(&selector)
        .map(|heading| heading.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect())
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Selector(format!("{}: {:?}", css, e)))
}

/// Accumulates candidates into an [`ExportMap`].
///
/// A record carrying a precise `href` is never replaced by a later
/// rediscovery of the same account without one.
#[derive(Debug, Default)]
struct ExportMapBuilder {
    map: ExportMap,
    precise: HashSet<AccountKey>,
}

impl ExportMapBuilder {
    fn insert(&mut self, candidate: Candidate<'_>) {
        let username = extract_username_from_identifier(candidate.identifier);
        if username.is_empty() {
            return;
        }

        let href = candidate.href.map(str::trim).filter(|h| !h.is_empty());
        if self.precise.contains(&username) {
            return;
        }
        if href.is_none() && self.map.contains_key(&username) {
            return;
        }

        let profile_url = match href {
            Some(href) => {
                self.precise.insert(username.clone());
                href.to_string()
            }
            None => to_profile_url(&username),
        };
        self.map.insert(
            username.clone(),
            AccountRecord {
                username,
                profile_url,
            },
        );
    }

    fn finish(self) -> ExportMap {
        self.map
    }
}
