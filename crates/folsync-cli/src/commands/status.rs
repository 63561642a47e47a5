// Rust guideline compliant 2026-10-19

//! Implementation of the `folsync status` command.

use crate::output::OutputFormatter;
use crate::terminal::print_warning;
use anyhow::Result;
use folsync_app::{AppContext, StatusReport};

/// Loads the configured dataset and reports its state.
///
/// A dataset that cannot be loaded is reported as not loaded, not as a
/// failure.
pub fn dataset_status(context: &AppContext) -> StatusReport {
    match context.load_index() {
        Ok(index) => StatusReport::from_index(&index),
        Err(err) => {
            print_warning(&err.to_string());
            StatusReport::default()
        }
    }
}

/// Executes the status command.
pub fn execute(context: &AppContext, formatter: &dyn OutputFormatter) -> Result<()> {
    let report = dataset_status(context);
    println!(
        "{}",
        formatter.format_status(&context.dataset_path(), &report)
    );
    Ok(())
}
