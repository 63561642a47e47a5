// Rust guideline compliant 2026-10-19

//! Implementation of the `folsync clean` command.

use crate::commands::read_input;
use crate::output::OutputFormatter;
use anyhow::Result;
use folsync_core::clean::{clean_links, keep_links};
use std::path::PathBuf;

/// Executes the clean command.
///
/// # Arguments
///
/// * `input` - Input file; stdin when absent or `-`
/// * `keep_only` - Keep existing `instagram.com/<user>` lines instead of
///   extracting links from free text
/// * `formatter` - Output formatter
///
/// # Errors
///
/// Returns an error if the input cannot be read.
pub fn execute(
    input: Option<PathBuf>,
    keep_only: bool,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let text = read_input(input.as_deref())?;
    let links = if keep_only {
        keep_links(&text)
    } else {
        clean_links(&text)
    };
    println!("{}", formatter.format_links(&links));
    Ok(())
}
