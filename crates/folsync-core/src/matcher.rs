// Rust guideline compliant 2026-10-19

//! Batch classification of pasted identifiers against the dataset.

use crate::dataset::DatasetIndex;
use crate::models::{AccountRecord, MatchReport, MatchResult};
use crate::normalize::{extract_username_from_identifier, normalize_account_key, to_profile_url};

/// Classifies a single raw identifier.
///
/// A hit takes the dataset's account and link; a miss derives both from the
/// identifier itself.
pub fn match_one(raw: &str, index: &DatasetIndex) -> MatchResult {
    match index.lookup(raw) {
        Some(record) => MatchResult {
            raw: raw.to_string(),
            matched: true,
            record,
        },
        None => {
            let mut username = extract_username_from_identifier(raw);
            if username.is_empty() {
                username = normalize_account_key(raw);
            }
            MatchResult {
                raw: raw.to_string(),
                matched: false,
                record: AccountRecord {
                    profile_url: to_profile_url(&username),
                    username,
                },
            }
        }
    }
}

/// Classifies every non-empty line, keeping input order.
///
/// # Arguments
///
/// * `lines` - Raw input lines; blank lines are ignored
/// * `index` - Dataset index to match against
///
/// # Returns
///
/// Per-line results with matched and unmatched counts.
pub fn match_all<'a, I>(lines: I, index: &DatasetIndex) -> MatchReport
where
    I: IntoIterator<Item = &'a str>,
{
    let mut report = MatchReport::default();

    for line in lines.into_iter().map(str::trim).filter(|l| !l.is_empty()) {
        let result = match_one(line, index);
        if result.matched {
            report.matched += 1;
        } else {
            report.unmatched += 1;
        }
        report.results.push(result);
    }

    tracing::debug!(
        matched = report.matched,
        unmatched = report.unmatched,
        "batch match complete"
    );
    report
}
