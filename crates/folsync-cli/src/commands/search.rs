// Rust guideline compliant 2026-10-19

//! Implementation of the `folsync search` command.
//!
//! Matches pasted identifiers against the reference dataset.

use crate::commands::read_input;
use crate::output::OutputFormatter;
use anyhow::{Context, Result};
use folsync_app::{AppContext, FileDatasetProvider};
use folsync_core::normalize::lines_from_text;
use folsync_core::{MatchReport, Session};
use std::path::{Path, PathBuf};

/// Which lines to keep in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MatchFilter {
    /// Every line.
    #[default]
    All,
    /// Only matched lines.
    Matched,
    /// Only unmatched lines.
    Unmatched,
}

/// Builds a match report for the given text.
///
/// # Arguments
///
/// * `session` - Session with a dataset installed
/// * `text` - Pasted identifiers, one per line
/// * `filter` - Which results to keep
///
/// # Errors
///
/// Returns an error if the session has no dataset.
pub fn build_report(session: &Session, text: &str, filter: MatchFilter) -> Result<MatchReport> {
    let mut report = session.match_lines(lines_from_text(text))?;
    match filter {
        MatchFilter::All => {}
        MatchFilter::Matched => report.results.retain(|r| r.matched),
        MatchFilter::Unmatched => report.results.retain(|r| !r.matched),
    }
    Ok(report)
}

/// Executes the search command.
///
/// # Arguments
///
/// * `context` - Loaded application context
/// * `input` - Input file; stdin when absent or `-`
/// * `dataset` - Dataset file overriding the configured one
/// * `filter` - Which results to print
/// * `formatter` - Output formatter
///
/// # Errors
///
/// Returns an error if:
/// - The dataset cannot be read or parsed
/// - The input cannot be read
pub fn execute(
    context: &AppContext,
    input: Option<PathBuf>,
    dataset: Option<PathBuf>,
    filter: MatchFilter,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let session = open_session(context, dataset.as_deref())?;
    let text = read_input(input.as_deref())?;
    let report = build_report(&session, &text, filter)?;
    println!("{}", formatter.format_matches(&report));
    Ok(())
}

fn open_session(context: &AppContext, dataset: Option<&Path>) -> Result<Session> {
    let Some(path) = dataset else {
        return context.open_session().with_context(|| {
            format!("Failed to load dataset {}", context.dataset_path().display())
        });
    };
    let provider = FileDatasetProvider::new(path);
    let index = folsync_app::load_index(&provider)
        .with_context(|| format!("Failed to load dataset {}", path.display()))?;
    let mut session = Session::new();
    session.replace_dataset(index);
    Ok(session)
}
