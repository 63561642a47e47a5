// Rust guideline compliant 2026-10-19

//! Integration tests for application services.

use folsync_app::{
    load_index, match_status, search, AppContext, AppError, DatasetProvider, ErrorCode,
    ErrorEnvelope, FileDatasetProvider, SearchRequest, SearchStatus, StaticDatasetProvider,
    StatusReport,
};
use folsync_core::{Config, DatasetRecord, Error as CoreError};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_dataset(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("dataset.json");
    std::fs::write(&path, body).expect("Failed to write dataset");
    path
}

#[test]
fn test_file_provider_loads_records() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_dataset(
        &temp_dir,
        r#"[{"account": "jane", "link": "https://instagram.com/jane/"}, "bob"]"#,
    );

    let provider = FileDatasetProvider::new(&path);
    assert_eq!(provider.path(), path.as_path());
    let index = load_index(&provider).expect("dataset should load");
    assert_eq!(index.len(), 2);
    assert!(index.lookup("instagram.com/bob").is_some());
}

#[test]
fn test_file_provider_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let provider = FileDatasetProvider::new(temp_dir.path().join("absent.json"));
    let err = provider.load().unwrap_err();
    assert_eq!(err.code(), ErrorCode::IoError);
}

#[test]
fn test_file_provider_rejects_object() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_dataset(&temp_dir, r#"{"account": "jane"}"#);
    let err = FileDatasetProvider::new(path).load().unwrap_err();
    assert_eq!(err.code(), ErrorCode::DatasetError);
}

#[test]
fn test_file_provider_invalid_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_dataset(&temp_dir, "[{");
    let err = FileDatasetProvider::new(path).load().unwrap_err();
    assert_eq!(err.code(), ErrorCode::JsonError);
    assert!(err.details().is_some());
}

#[test]
fn test_search_echoes_every_line() {
    let provider = StaticDatasetProvider::new(vec![DatasetRecord::new(
        "jane",
        "https://instagram.com/jane/",
    )]);
    let index = load_index(&provider).expect("static provider never fails");

    let request = SearchRequest {
        lines: vec![
            " @Jane ".to_string(),
            "".to_string(),
            "https://www.instagram.com/jane?hl=en".to_string(),
            "nobody".to_string(),
        ],
    };
    let response = search(&request, &index);

    let statuses: Vec<_> = response.results.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![
            SearchStatus::Match,
            SearchStatus::NotMatch,
            SearchStatus::Match,
            SearchStatus::NotMatch
        ]
    );
    assert_eq!(response.results[0].input, " @Jane ");
}

#[test]
fn test_search_wire_format() {
    let index = load_index(&StaticDatasetProvider::new(vec![DatasetRecord::new(
        "jane",
        "instagram.com/jane",
    )]))
    .expect("static provider never fails");
    let results = match_status(["jane", "bob"], &index);

    let json = serde_json::to_value(&results).expect("results serialize");
    assert_eq!(
        json,
        serde_json::json!([
            {"input": "jane", "status": "match"},
            {"input": "bob", "status": "not match"}
        ])
    );

    let request: SearchRequest = serde_json::from_str("{}").expect("lines default to empty");
    assert!(request.lines.is_empty());
}

#[test]
fn test_status_report() {
    let empty = load_index(&StaticDatasetProvider::default()).expect("static provider never fails");
    assert_eq!(
        StatusReport::from_index(&empty),
        StatusReport {
            loaded: false,
            count: 0
        }
    );

    let index = load_index(&StaticDatasetProvider::new(vec![
        DatasetRecord::new("a", "instagram.com/a"),
        DatasetRecord::new("b", "instagram.com/b"),
    ]))
    .expect("static provider never fails");
    let report = StatusReport::from_index(&index);
    assert!(report.loaded);
    assert_eq!(report.count, 2);
}

#[test]
fn test_context_resolves_relative_dataset_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_dataset(&temp_dir, r#"["jane"]"#);

    let config = Config {
        dataset_path: PathBuf::from("dataset.json"),
        ..Config::default()
    };
    let context = AppContext::with_config(temp_dir.path().to_path_buf(), config);

    assert_eq!(context.dataset_path(), temp_dir.path().join("dataset.json"));
    let session = context.open_session().expect("session should open");
    let report = session.match_lines(["@jane"]).expect("dataset is loaded");
    assert_eq!(report.matched, 1);
}

#[test]
fn test_error_codes_and_envelopes() {
    let unavailable = AppError::from(CoreError::DatasetUnavailable);
    assert_eq!(unavailable.code(), ErrorCode::DataUnavailable);

    let config = AppError::from(CoreError::InvalidConfig("bad".to_string()));
    assert_eq!(config.code(), ErrorCode::ConfigError);

    let input = AppError::InvalidInput("lines must be an array".to_string());
    let envelope = serde_json::to_value(ErrorEnvelope::from_error(&input)).expect("serialize");
    assert_eq!(envelope["code"], "invalid_input");
    assert_eq!(envelope["message"], "Invalid input: lines must be an array");
    assert!(envelope.get("details").is_none());
}
