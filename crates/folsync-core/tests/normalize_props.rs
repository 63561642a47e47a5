// Rust guideline compliant 2026-10-19

//! Property-based tests for identifier normalization.
//!
//! These tests validate that every canonical form is stable under repeated
//! normalization and insensitive to the decorations users paste around
//! usernames.

use folsync_core::normalize::{
    extract_username_from_identifier, normalize_account_key, normalize_link_key,
    normalize_text, to_display_handle, to_display_link, to_profile_url, RESERVED_PATH_TOKENS,
};
use proptest::prelude::*;

/// Generates plausible usernames.
fn arb_username() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9_][a-z0-9._]{0,29}").unwrap()
}

/// Generates arbitrary pasted text, including whitespace and `@` runs.
fn arb_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t@A-Za-z0-9._/:?#-]{0,60}").unwrap()
}

/// Generates a profile URL decorated with optional scheme, `www`, slash and query.
fn arb_profile_url() -> impl Strategy<Value = (String, String)> {
    (
        arb_username(),
        prop::sample::select(vec!["", "http://", "https://"]),
        any::<bool>(),
        any::<bool>(),
        prop::option::of(prop::string::string_regex("[a-z]{1,5}=[a-z0-9]{1,8}").unwrap()),
    )
        .prop_filter("reserved tokens are not usernames", |(name, ..)| {
            !RESERVED_PATH_TOKENS.contains(&name.as_str())
        })
        .prop_map(|(name, scheme, www, slash, query)| {
            let mut url = format!(
                "{}{}instagram.com/{}",
                scheme,
                if www { "www." } else { "" },
                name
            );
            if slash {
                url.push('/');
            }
            if let Some(query) = query {
                url.push('?');
                url.push_str(&query);
            }
            (name, url)
        })
}

proptest! {
    /// Normalizing an account key twice yields the same key.
    #[test]
    fn test_account_key_idempotent(text in arb_text()) {
        let once = normalize_account_key(&text);
        prop_assert_eq!(normalize_account_key(&once), once);
    }

    /// Normalizing a profile link key twice yields the same key.
    #[test]
    fn test_link_key_idempotent((_, url) in arb_profile_url()) {
        let once = normalize_link_key(&url);
        prop_assert_eq!(normalize_link_key(&once), once);
    }

    /// Normalized text never carries leading, trailing or doubled spaces.
    #[test]
    fn test_normalize_text_whitespace(text in arb_text()) {
        let normalized = normalize_text(&text);
        prop_assert_eq!(normalized.trim(), normalized.as_str());
        prop_assert!(!normalized.contains("  "));
        prop_assert!(!normalized.contains('\t'));
    }

    /// Handles, padding and case never change the account key.
    #[test]
    fn test_account_key_decorations(name in arb_username()) {
        let expected = normalize_account_key(&name);
        prop_assert_eq!(normalize_account_key(&format!("@{}", name)), expected.clone());
        prop_assert_eq!(normalize_account_key(&format!("  {}  ", name.to_uppercase())), expected);
    }

    /// Every decorated profile URL extracts to the bare username.
    #[test]
    fn test_extract_from_decorated_url((name, url) in arb_profile_url()) {
        prop_assert_eq!(extract_username_from_identifier(&url), name.clone());
        prop_assert_eq!(to_display_link(&url), format!("instagram.com/{}", name));
    }

    /// Profile URLs always end with a slash and start at the domain root.
    #[test]
    fn test_profile_url_shape(text in arb_text()) {
        let url = to_profile_url(&text);
        prop_assert!(url.starts_with("https://www.instagram.com/"));
        prop_assert!(url.ends_with('/'));
    }

    /// Display handles always start with a single `@`.
    #[test]
    fn test_display_handle_prefix(text in arb_text()) {
        let handle = to_display_handle(&text);
        prop_assert!(handle.starts_with('@'));
        prop_assert!(!handle[1..].starts_with('@'));
    }
}

#[test]
fn test_reserved_tokens_yield_empty_username() {
    for token in RESERVED_PATH_TOKENS {
        let url = format!("https://instagram.com/{}/", token.to_uppercase());
        assert_eq!(extract_username_from_identifier(&url), "", "token {}", token);
    }
}

#[test]
fn test_equivalent_account_forms() {
    assert_eq!(normalize_account_key("@Foo"), "foo");
    assert_eq!(normalize_account_key("foo"), "foo");
    assert_eq!(normalize_account_key("  FOO "), "foo");
}
