// Rust guideline compliant 2026-10-19

//! Command implementations for the Folsync CLI.

pub mod clean;
pub mod normalize;
pub mod search;
pub mod serve;
pub mod status;
pub mod sync;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Reads command input from a file, or from stdin when the path is absent
/// or `-`.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
