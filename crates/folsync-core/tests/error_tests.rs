// Rust guideline compliant 2026-10-19

//! Unit tests for error types and messages.

use folsync_core::Error;

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = Error::Io(io_err);
    let msg = error.to_string();
    assert!(
        msg.contains("IO error"),
        "IO error should contain 'IO error' prefix"
    );
    assert!(msg.contains("file not found"));
}

#[test]
fn test_json_error_formatting() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json")
        .expect_err("Should fail to parse invalid JSON");
    let error = Error::Json(json_err);
    assert!(error.to_string().starts_with("JSON error"));
}

#[test]
fn test_dataset_error_formatting() {
    let error = Error::Dataset("expected a JSON array".to_string());
    assert_eq!(error.to_string(), "Invalid dataset: expected a JSON array");
}

#[test]
fn test_dataset_unavailable_formatting() {
    assert_eq!(Error::DatasetUnavailable.to_string(), "Dataset not loaded");
}

#[test]
fn test_invalid_config_formatting() {
    let error = Error::InvalidConfig("port must be greater than 0".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid config: port must be greater than 0"
    );
}

#[test]
fn test_selector_formatting() {
    let error = Error::Selector("a[: bad".to_string());
    assert!(error.to_string().contains("a[: bad"));
}

#[test]
fn test_from_conversions() {
    let io: Error = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
    assert!(matches!(io, Error::Io(_)));

    let json: Error = serde_json::from_str::<serde_json::Value>("{")
        .expect_err("Should fail to parse")
        .into();
    assert!(matches!(json, Error::Json(_)));
}
