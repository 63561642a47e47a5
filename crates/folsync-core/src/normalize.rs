// Rust guideline compliant 2026-10-19

//! Identifier normalization.
//!
//! Every comparison in Folsync goes through these functions, so two
//! identifiers that differ only by scheme, `www.`, trailing slash, leading
//! `@` or letter case always produce the same key.

use crate::models::AccountKey;

/// URL path segments that never name an account.
pub const RESERVED_PATH_TOKENS: [&str; 6] = ["explore", "p", "reel", "reels", "tv", "accounts"];

/// Root of every direct profile URL.
pub const PROFILE_URL_ROOT: &str = "https://www.instagram.com/";

/// Prefix of the short display link form.
pub const DISPLAY_LINK_PREFIX: &str = "instagram.com/";

const PLATFORM_HOST: &str = "instagram.com";

/// Trims, lowercases and collapses whitespace runs to a single space.
pub fn normalize_text(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Like [`normalize_text`], mapping a missing value to the empty string.
pub fn normalize_text_opt(value: Option<&str>) -> String {
    value.map(normalize_text).unwrap_or_default()
}

/// Normalizes a username or handle into an [`AccountKey`].
///
/// Leading `@` marks are stripped along with any whitespace they expose, so
/// the result is a fixed point: normalizing it again returns it unchanged.
///
/// # Examples
///
/// ```
/// use folsync_core::normalize::normalize_account_key;
///
/// assert_eq!(normalize_account_key("  @Foo "), "foo");
/// ```
pub fn normalize_account_key(value: &str) -> AccountKey {
    normalize_text(value)
        .trim_start_matches(|c: char| c == '@' || c.is_whitespace())
        .to_string()
}

/// Normalizes a profile link into its scheme-less, `www`-less form without
/// trailing slashes.
pub fn normalize_link_key(value: &str) -> String {
    let text = normalize_text(value);
    let rest = text
        .strip_prefix("http://")
        .or_else(|| text.strip_prefix("https://"))
        .unwrap_or(&text);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    rest.trim_end_matches('/').to_string()
}

/// Returns true if the value should be treated as a link rather than a bare
/// username.
pub fn looks_like_url_or_instagram(value: &str) -> bool {
    let lowered = value.to_lowercase();
    lowered.contains(PLATFORM_HOST)
        || lowered.starts_with("http://")
        || lowered.starts_with("https://")
}

/// Returns true if the segment is a reserved path token.
pub fn is_reserved_token(segment: &str) -> bool {
    RESERVED_PATH_TOKENS
        .iter()
        .any(|token| token.eq_ignore_ascii_case(segment))
}

/// Extracts the account key from a username, handle or profile URL.
///
/// Returns an empty key when a URL path contains a reserved token such as
/// `/p/` or `/reel/`.
pub fn extract_username_from_identifier(value: &str) -> AccountKey {
    if !looks_like_url_or_instagram(value) {
        return normalize_account_key(value);
    }

    let trimmed = value.trim();
    let without_query = trimmed.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = without_query
        .trim_end_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    // Post and reel links put the reserved token before an ID: /p/<id>/.
    if segments.iter().any(|segment| is_reserved_token(segment)) {
        return AccountKey::new();
    }
    segments
        .last()
        .map(|segment| normalize_account_key(segment))
        .unwrap_or_default()
}

fn resolve_username(identifier: &str) -> AccountKey {
    if looks_like_url_or_instagram(identifier) {
        extract_username_from_identifier(identifier)
    } else {
        normalize_account_key(identifier)
    }
}

/// Renders `@username`, or a bare `@` for an empty username.
pub fn to_display_handle(username: &str) -> String {
    format!("@{}", normalize_account_key(username))
}

/// Renders `instagram.com/<username>` for any accepted identifier.
pub fn to_display_link(identifier: &str) -> String {
    format!("{}{}", DISPLAY_LINK_PREFIX, resolve_username(identifier))
}

/// Renders the direct profile URL `https://www.instagram.com/<username>/`.
///
/// An identifier with no usable username yields the bare domain root.
pub fn to_profile_url(identifier: &str) -> String {
    let username = resolve_username(identifier);
    if username.is_empty() {
        PROFILE_URL_ROOT.to_string()
    } else {
        format!("{}{}/", PROFILE_URL_ROOT, username)
    }
}

/// Splits pasted text into trimmed, non-empty lines.
pub fn lines_from_text(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
