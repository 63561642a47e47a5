// Rust guideline compliant 2026-10-19

//! Link cleaning for free-form pasted text.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::normalize::{lines_from_text, DISPLAY_LINK_PREFIX};

/// Path segments dropped by the link cleaner.
pub const BLOCKED_SEGMENTS: [&str; 8] = [
    "p", "reel", "reels", "tv", "stories", "explore", "accounts", "about",
];

fn profile_link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:https?://)?(?:www\.)?instagram\.com/([A-Za-z0-9._]+)/?")
            .expect("profile link pattern is valid")
    })
}

fn display_link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^instagram\.com/\S+$").expect("display link pattern is valid")
    })
}

/// Extracts `instagram.com/<user>` lines from arbitrary text.
///
/// Every profile link found anywhere in the text contributes one line,
/// deduplicated case-insensitively in first-seen order. When the text holds
/// no profile link at all, each non-empty line is taken as a username
/// instead.
///
/// # Examples
///
/// ```
/// use folsync_core::clean::clean_links;
///
/// let text = "see https://www.instagram.com/Jane/?hl=en and instagram.com/p/abc";
/// assert_eq!(clean_links(text), vec!["instagram.com/Jane"]);
/// ```
pub fn clean_links(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut links = DedupedLinks::default();
    for captures in profile_link_pattern().captures_iter(text) {
        let Some(username) = captures.get(1).map(|m| m.as_str()) else {
            continue;
        };
        if BLOCKED_SEGMENTS
            .iter()
            .any(|blocked| blocked.eq_ignore_ascii_case(username))
        {
            continue;
        }
        links.push(username);
    }

    if links.is_empty() {
        for line in lines_from_text(text) {
            let username = line.strip_prefix('@').unwrap_or(line);
            if !username.is_empty() {
                links.push(username);
            }
        }
    }

    links.finish()
}

/// Keeps only lines that already are `instagram.com/<something>` links.
pub fn keep_links(text: &str) -> Vec<String> {
    lines_from_text(text)
        .into_iter()
        .filter(|line| display_link_pattern().is_match(line))
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Default)]
struct DedupedLinks {
    seen: HashSet<String>,
    lines: Vec<String>,
}

impl DedupedLinks {
    fn push(&mut self, username: &str) {
        let line = format!("{}{}", DISPLAY_LINK_PREFIX, username);
        if self.seen.insert(line.to_lowercase()) {
            self.lines.push(line);
        }
    }

    fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn finish(self) -> Vec<String> {
        self.lines
    }
}
