// Rust guideline compliant 2026-10-19

//! Implementation of the `folsync sync` command.
//!
//! Imports a followers export and a following export and reports who does
//! not follow back.

use crate::output::OutputFormatter;
use crate::terminal::print_warning;
use anyhow::{Context, Result};
use folsync_core::{Reconciliation, Session, Side};
use std::path::Path;

/// Which reconciliation queries to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SyncView {
    /// Accounts you follow that do not follow you back.
    #[default]
    NotFollowingBack,
    /// Followers you do not follow back.
    NotFollowedBack,
    /// Both lists.
    Both,
}

/// Imports both exports into a fresh session.
///
/// A side whose export fails to parse stays empty, so its queries report
/// unavailable data instead of aborting.
pub fn import_exports(followers: &Path, following: &Path) -> Session {
    let mut session = Session::new();
    for (side, path) in [(Side::Followers, followers), (Side::Following, following)] {
        if let Err(err) = session
            .import_file(side, path)
            .with_context(|| format!("Failed to import {}", path.display()))
        {
            print_warning(&format!("{:#}", err));
        }
    }
    session
}

/// Runs the selected queries.
pub fn reconcile(session: &Session, view: SyncView) -> Vec<(&'static str, Reconciliation)> {
    let mut outcomes = Vec::new();
    if matches!(view, SyncView::NotFollowingBack | SyncView::Both) {
        outcomes.push(("Not following back", session.not_following_back()));
    }
    if matches!(view, SyncView::NotFollowedBack | SyncView::Both) {
        outcomes.push(("Not followed back", session.not_followed_back()));
    }
    outcomes
}

/// Executes the sync command.
///
/// # Arguments
///
/// * `followers` - Followers export (JSON or HTML)
/// * `following` - Following export (JSON or HTML)
/// * `view` - Which lists to print
/// * `formatter` - Output formatter
///
/// # Errors
///
/// Returns an error if neither export could be imported.
pub fn execute(
    followers: &Path,
    following: &Path,
    view: SyncView,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let session = import_exports(followers, following);
    if session.export_map(Side::Followers).is_empty()
        && session.export_map(Side::Following).is_empty()
    {
        anyhow::bail!("No accounts could be read from either export");
    }

    let outcomes = reconcile(&session, view);
    for (title, outcome) in &outcomes {
        println!("{}", formatter.format_accounts(title, outcome));
    }
    Ok(())
}
