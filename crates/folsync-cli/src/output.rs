// Rust guideline compliant 2026-10-19

//! Output formatting module for the Folsync CLI.
//!
//! This module provides functionality for formatting match reports,
//! reconciliation results, cleaned links and dataset status
//! in various output formats (JSON, table, plain text).

use crate::commands::normalize::IdentifierForms;
use crate::terminal::paint;
use folsync_app::StatusReport;
use folsync_core::{MatchReport, Reconciliation};
use serde_json::json;
use std::path::Path;
use tabled::{builder::Builder, settings::Style};
use termcolor::Color;

const UNAVAILABLE_MESSAGE: &str = "Data unavailable: load both followers and following exports.";

/// Output formatter trait.
///
/// Defines the interface for formatting Folsync results in different output formats.
pub trait OutputFormatter {
    /// Formats a batch match report.
    ///
    /// # Arguments
    /// * `report` - The report to format
    ///
    /// # Returns
    /// A formatted string representation of the report
    fn format_matches(&self, report: &MatchReport) -> String;

    /// Formats a reconciliation outcome under a heading.
    ///
    /// # Arguments
    /// * `title` - Name of the query
    /// * `outcome` - Accounts or the unavailable signal
    ///
    /// # Returns
    /// A formatted string representation of the outcome
    fn format_accounts(&self, title: &str, outcome: &Reconciliation) -> String;

    /// Formats cleaned link lines.
    fn format_links(&self, links: &[String]) -> String;

    /// Formats the canonical forms of identifiers.
    fn format_identifiers(&self, forms: &[IdentifierForms]) -> String;

    /// Formats dataset status.
    fn format_status(&self, dataset_path: &Path, report: &StatusReport) -> String;

    /// Formats an error message for display.
    ///
    /// # Arguments
    /// * `error` - The error message to format
    ///
    /// # Returns
    /// A formatted error string
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Formats results as valid JSON for machine consumption.
pub struct JsonFormatter;

impl JsonFormatter {
    fn render(value: &serde_json::Value) -> String {
        serde_json::to_string_pretty(value)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_matches(&self, report: &MatchReport) -> String {
        Self::render(&json!(report))
    }

    fn format_accounts(&self, title: &str, outcome: &Reconciliation) -> String {
        Self::render(&json!({
            "query": title,
            "outcome": outcome,
            "total": outcome.accounts().map(<[_]>::len),
        }))
    }

    fn format_links(&self, links: &[String]) -> String {
        Self::render(&json!({
            "links": links,
            "total": links.len(),
        }))
    }

    fn format_identifiers(&self, forms: &[IdentifierForms]) -> String {
        Self::render(&json!(forms))
    }

    fn format_status(&self, dataset_path: &Path, report: &StatusReport) -> String {
        Self::render(&json!({
            "dataset_path": dataset_path,
            "loaded": report.loaded,
            "count": report.count,
        }))
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats results as human-readable tables with colored match badges.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    ///
    /// # Returns
    /// A new TableFormatter instance
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn badge(&self, matched: bool) -> String {
        let (text, color) = if matched {
            ("MATCH", Color::Green)
        } else {
            ("NO MATCH", Color::Red)
        };
        if self.use_color {
            paint(text, color, true)
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_matches(&self, report: &MatchReport) -> String {
        if report.results.is_empty() {
            return "No input lines.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Input", "Status", "Username", "Profile"]);
        for result in &report.results {
            builder.push_record(vec![
                result.raw.clone(),
                self.badge(result.matched),
                result.record.username.clone(),
                result.record.profile_url.clone(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        format!(
            "{}\nMatched: {}  Unmatched: {}",
            table, report.matched, report.unmatched
        )
    }

    fn format_accounts(&self, title: &str, outcome: &Reconciliation) -> String {
        let Some(accounts) = outcome.accounts() else {
            return format!("{}\n{}", title, UNAVAILABLE_MESSAGE);
        };
        if accounts.is_empty() {
            return format!("{}\nNo accounts found.", title);
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Username", "Profile"]);
        for account in accounts {
            builder.push_record(vec![account.username.as_str(), account.profile_url.as_str()]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        format!("{} ({})\n{}", title, accounts.len(), table)
    }

    fn format_links(&self, links: &[String]) -> String {
        if links.is_empty() {
            return "No links found.".to_string();
        }
        let mut output = links.join("\n");
        output.push_str(&format!("\n\nTotal: {}", links.len()));
        output
    }

    fn format_identifiers(&self, forms: &[IdentifierForms]) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Input", "Account key", "Username", "Handle", "Profile"]);
        for form in forms {
            builder.push_record(vec![
                form.input.as_str(),
                form.account_key.as_str(),
                form.username.as_str(),
                form.handle.as_str(),
                form.profile_url.as_str(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_status(&self, dataset_path: &Path, report: &StatusReport) -> String {
        let state = match (report.loaded, self.use_color) {
            (true, true) => paint("loaded", Color::Green, true),
            (false, true) => paint("not loaded", Color::Yellow, true),
            (true, false) => "loaded".to_string(),
            (false, false) => "not loaded".to_string(),
        };
        format!(
            "Dataset: {}\nState:   {}\nEntries: {}",
            dataset_path.display(),
            state,
            report.count
        )
    }

    fn format_error(&self, error: &str) -> String {
        if self.use_color {
            format!("{}{}", paint("Error: ", Color::Red, true), error)
        } else {
            format!("Error: {}", error)
        }
    }
}

/// Plain text output formatter.
///
/// Formats results as simple plain text without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_matches(&self, report: &MatchReport) -> String {
        let mut output = String::new();
        for result in &report.results {
            let status = if result.matched { "match" } else { "not match" };
            output.push_str(&format!("{}\t{}\n", status, result.raw));
        }
        output
    }

    fn format_accounts(&self, _title: &str, outcome: &Reconciliation) -> String {
        match outcome.accounts() {
            None => UNAVAILABLE_MESSAGE.to_string(),
            Some(accounts) => {
                let mut output = String::new();
                for account in accounts {
                    output.push_str(&format!("{} {}\n", account.username, account.profile_url));
                }
                output
            }
        }
    }

    fn format_links(&self, links: &[String]) -> String {
        let mut output = String::new();
        for link in links {
            output.push_str(link);
            output.push('\n');
        }
        output
    }

    fn format_identifiers(&self, forms: &[IdentifierForms]) -> String {
        let mut output = String::new();
        for form in forms {
            output.push_str(&format!("{}\n", form.account_key));
        }
        output
    }

    fn format_status(&self, _dataset_path: &Path, report: &StatusReport) -> String {
        format!("{} {}", report.loaded, report.count)
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(
    format: folsync_core::OutputFormat,
    use_color: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        folsync_core::OutputFormat::Json => Box::new(JsonFormatter),
        folsync_core::OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
        folsync_core::OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
