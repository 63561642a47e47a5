// Rust guideline compliant 2026-10-19

//! Integration tests for export parsing.

use folsync_core::export::{parse_export_json_str, HTML_STRATEGIES};
use folsync_core::{parse_export_file, parse_export_html, parse_export_json, Error};
use serde_json::{json, Value};

#[test]
fn test_following_json_with_href() {
    let value = json!({
        "relationships_following": [
            {"string_list_data": [{"value": "x", "href": "https://instagram.com/x/"}]}
        ]
    });
    let map = parse_export_json(&value);

    assert_eq!(map.len(), 1);
    let record = &map["x"];
    assert_eq!(record.username, "x");
    assert_eq!(record.profile_url, "https://instagram.com/x/");
}

#[test]
fn test_followers_json_top_level_array() {
    let text = r#"[
        {"title": "", "media_list_data": [], "string_list_data": [
            {"href": "https://www.instagram.com/Alice", "value": "Alice", "timestamp": 1700000000}
        ]},
        {"title": "", "media_list_data": [], "string_list_data": [
            {"href": "https://www.instagram.com/bob", "value": "bob", "timestamp": 1700000001}
        ]}
    ]"#;
    let map = parse_export_json_str(text).expect("valid JSON should parse");

    assert_eq!(map.len(), 2);
    assert_eq!(map["alice"].username, "alice");
    assert_eq!(map["alice"].profile_url, "https://www.instagram.com/Alice");
    assert!(map.contains_key("bob"));
}

#[test]
fn test_json_fallback_fields_and_bare_strings() {
    let value = json!({
        "nested": {"deeper": [{"string_list_data": [{"string": "@Carol"}, {"name": "dave"}]}]},
        "plain": ["erin", "", "https://instagram.com/reel/abc"]
    });
    let map = parse_export_json(&value);

    assert!(map.contains_key("carol"));
    assert!(map.contains_key("dave"));
    assert!(map.contains_key("erin"));
    assert_eq!(map.len(), 3);
    assert_eq!(map["erin"].profile_url, "https://www.instagram.com/erin/");
}

#[test]
fn test_json_object_shaped_string_list_is_walked_generically() {
    let value = json!({"string_list_data": {"value": "ignored-shape"}, "n": 3, "b": true, "z": null});
    let map = parse_export_json(&value);
    assert_eq!(map.len(), 1);
    assert!(map.contains_key("ignored-shape"));
}

#[test]
fn test_json_deep_nesting_does_not_overflow() {
    let mut value = json!("deep.user");
    for _ in 0..1_000 {
        value = Value::Array(vec![value]);
    }
    let map = parse_export_json(&value);
    assert!(map.contains_key("deep.user"));
}

#[test]
fn test_json_file_deeper_than_parser_default() {
    let depth = 200;
    let text = format!("{}\"deep.user\"{}", "[".repeat(depth), "]".repeat(depth));
    let map = parse_export_file("followers.json", &text).expect("deep export should parse");
    assert_eq!(map.len(), 1);
    assert!(map.contains_key("deep.user"));

    let nested = format!(
        "{}{{\"value\": \"nested.user\"}}{}",
        "{\"string_list_data\": [".repeat(depth),
        "]}".repeat(depth)
    );
    let map = parse_export_json_str(&nested).expect("deep objects should parse");
    assert!(map.contains_key("nested.user"));
}

#[test]
fn test_truncated_deep_json_still_fails() {
    let text = format!("{}\"deep.user\"", "[".repeat(300));
    let err = parse_export_file("followers.json", &text).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_invalid_json_fails_import() {
    let err = parse_export_file("followers.json", "{not json").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_html_anchor_strategy() {
    let html = r#"<html><body>
        <a href="https://instagram.com/p/123">post</a>
        <a href="https://instagram.com/bob/">bob</a>
        <a href="https://www.instagram.com/Carol?hl=en#x">carol</a>
        <a href="https://example.com/dave">not instagram</a>
        <h2>ignored_heading</h2>
    </body></html>"#;
    let map = parse_export_html(html).expect("html should parse");

    assert_eq!(map.len(), 2);
    assert!(map.contains_key("bob"));
    assert!(map.contains_key("carol"));
    assert!(!map.contains_key("ignored_heading"));
    assert_eq!(map["bob"].profile_url, "https://www.instagram.com/bob/");
}

#[test]
fn test_html_reserved_anchor_contributes_nothing() {
    let map = parse_export_html(r#"<a href="https://instagram.com/p/123">x</a>"#)
        .expect("html should parse");
    // The only anchor is rejected, so the heading strategy runs and finds nothing.
    assert!(map.is_empty());
}

#[test]
fn test_html_heading_fallback() {
    let html = r#"<div><h2> @Erin </h2><h2>frank</h2><h2>   </h2><h3>gina</h3></div>"#;
    let map = parse_export_html(html).expect("html should parse");

    assert_eq!(map.len(), 2);
    assert!(map.contains_key("erin"));
    assert!(map.contains_key("frank"));
}

#[test]
fn test_html_strategy_order() {
    let names: Vec<_> = HTML_STRATEGIES.iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["anchor", "heading"]);
}

#[test]
fn test_file_dispatch_by_extension() {
    let json_map = parse_export_file("following.JSON", r#"["alpha"]"#).expect("json dispatch");
    assert!(json_map.contains_key("alpha"));

    let html_map = parse_export_file("followers_1.html", "<h2>beta</h2>").expect("html dispatch");
    assert!(html_map.contains_key("beta"));

    // Unknown extensions are treated as HTML, so JSON text yields nothing.
    let other = parse_export_file("export.txt", r#"["alpha"]"#).expect("html dispatch");
    assert!(other.is_empty());
}
