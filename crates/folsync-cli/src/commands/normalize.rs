// Rust guideline compliant 2026-10-19

//! Implementation of the `folsync normalize` command.
//!
//! Shows every canonical form derived from each identifier.

use crate::output::OutputFormatter;
use anyhow::Result;
use folsync_core::normalize::{
    extract_username_from_identifier, looks_like_url_or_instagram, normalize_account_key,
    normalize_link_key, to_display_handle, to_profile_url,
};
use serde::Serialize;

/// Canonical forms of one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentifierForms {
    /// The identifier as supplied.
    pub input: String,
    /// Key used for account equality.
    pub account_key: String,
    /// Link key, present when the input looks like a URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_key: Option<String>,
    /// Username extracted from the identifier.
    pub username: String,
    /// `@`-prefixed display handle.
    pub handle: String,
    /// Direct profile URL.
    pub profile_url: String,
}

impl IdentifierForms {
    /// Derives every form of `input`.
    pub fn derive(input: &str) -> Self {
        let username = extract_username_from_identifier(input);
        let link_key = looks_like_url_or_instagram(input).then(|| normalize_link_key(input));
        let profile_url = to_profile_url(&username);
        Self {
            input: input.to_string(),
            account_key: normalize_account_key(input),
            link_key,
            handle: to_display_handle(&username),
            profile_url,
            username,
        }
    }
}

/// Executes the normalize command.
///
/// # Arguments
///
/// * `identifiers` - Identifiers to normalize
/// * `formatter` - Output formatter
///
/// # Errors
///
/// Returns an error if no identifiers are given.
pub fn execute(identifiers: Vec<String>, formatter: &dyn OutputFormatter) -> Result<()> {
    if identifiers.is_empty() {
        anyhow::bail!("Provide at least one identifier");
    }
    let forms: Vec<_> = identifiers
        .iter()
        .map(|identifier| IdentifierForms::derive(identifier))
        .collect();
    println!("{}", formatter.format_identifiers(&forms));
    Ok(())
}
