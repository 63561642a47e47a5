// Rust guideline compliant 2026-10-19

//! Integration tests for the dataset index.

use folsync_core::{DatasetIndex, DatasetRecord};
use std::sync::Arc;

fn jane_index() -> DatasetIndex {
    DatasetIndex::build([DatasetRecord::new("jane", "https://instagram.com/jane/")])
}

#[test]
fn test_every_input_shape_resolves_to_same_record() {
    let index = jane_index();

    let by_handle = index.lookup_entry("@Jane").expect("handle should resolve");
    let by_display = index
        .lookup_entry("instagram.com/jane")
        .expect("display link should resolve");
    let by_url = index
        .lookup_entry("https://www.instagram.com/jane/")
        .expect("full URL should resolve");

    assert!(Arc::ptr_eq(by_handle, by_display));
    assert!(Arc::ptr_eq(by_handle, by_url));
    assert_eq!(index.len(), 1);
    // The link key and the display key coincide for this record.
    assert_eq!(index.key_count(), 2);
}

#[test]
fn test_lookup_returns_canonical_record() {
    let index = jane_index();
    let record = index.lookup("  JANE ").expect("padded name should resolve");
    assert_eq!(record.username, "jane");
    assert_eq!(record.profile_url, "https://www.instagram.com/jane/");
}

#[test]
fn test_lookup_with_query_string_uses_display_key() {
    let index = jane_index();
    let record = index.lookup("https://instagram.com/jane?igsh=xyz");
    assert_eq!(record.map(|r| r.username), Some("jane".to_string()));
}

#[test]
fn test_account_and_link_may_differ() {
    let index = DatasetIndex::build([DatasetRecord::new(
        "@Studio.Main",
        "http://www.instagram.com/studio_alt",
    )]);

    let by_account = index.lookup("studio.main").expect("account key should resolve");
    let by_link = index.lookup("instagram.com/studio_alt/").expect("link should resolve");
    assert_eq!(by_account, by_link);
    assert_eq!(by_account.profile_url, "https://www.instagram.com/studio_alt/");
}

#[test]
fn test_size_counts_entries_not_keys() {
    let index = DatasetIndex::build([
        DatasetRecord::new("a", "https://instagram.com/a_shop"),
        DatasetRecord::new("b", "https://instagram.com/b_shop"),
        DatasetRecord::new("c", "https://instagram.com/c_shop"),
    ]);
    assert_eq!(index.len(), 3);
    assert_eq!(index.key_count(), 9);
}

#[test]
fn test_duplicate_accounts_collapse_to_latest() {
    let index = DatasetIndex::build([
        DatasetRecord::new("dup", "https://instagram.com/dup"),
        DatasetRecord::new("DUP", "https://instagram.com/dup/"),
    ]);
    assert_eq!(index.len(), 1);
}

#[test]
fn test_malformed_records_are_skipped_individually() {
    let records: Vec<DatasetRecord> = serde_json::from_str(
        r#"[{"account": "ok", "link": "instagram.com/ok"}, {"account": "nolink"}, {}, {"link": "x"}]"#,
    )
    .expect("records should deserialize");
    let index = DatasetIndex::build(records);
    assert_eq!(index.len(), 1);
    assert!(index.lookup("ok").is_some());
    assert!(index.lookup("nolink").is_none());
}

#[test]
fn test_miss_returns_none() {
    let index = jane_index();
    assert!(index.lookup("nobody").is_none());
    assert!(index.lookup("https://instagram.com/p/").is_none());
}
