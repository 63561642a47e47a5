// Rust guideline compliant 2026-10-19

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use folsync_core::export::parse_export_json_str;
use folsync_core::{match_all, not_following_back, DatasetIndex, DatasetRecord, ExportMap};

fn build_records(count: usize) -> Vec<DatasetRecord> {
    (0..count)
        .map(|i| {
            DatasetRecord::new(
                format!("user.{}", i),
                format!("https://www.instagram.com/user.{}/", i),
            )
        })
        .collect()
}

fn build_export_json(count: usize) -> String {
    let entries: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "title": "",
                "string_list_data": [{
                    "href": format!("https://www.instagram.com/user.{}", i),
                    "value": format!("user.{}", i),
                    "timestamp": 1_700_000_000 + i,
                }]
            })
        })
        .collect();
    serde_json::Value::Array(entries).to_string()
}

fn bench_index_build(c: &mut Criterion) {
    let records = build_records(10_000);
    c.bench_function("index_build_10000", |b| {
        b.iter(|| black_box(DatasetIndex::build(records.iter().cloned())))
    });
}

fn bench_match_all(c: &mut Criterion) {
    let index = DatasetIndex::build(build_records(10_000));
    let lines: Vec<String> = (0..1_000)
        .map(|i| match i % 3 {
            0 => format!("@User.{}", i),
            1 => format!("https://instagram.com/user.{}?hl=en", i),
            _ => format!("missing.{}", i),
        })
        .collect();
    c.bench_function("match_all_1000", |b| {
        b.iter(|| black_box(match_all(lines.iter().map(String::as_str), &index)))
    });
}

fn bench_parse_export(c: &mut Criterion) {
    let text = build_export_json(5_000);
    c.bench_function("parse_export_json_5000", |b| {
        b.iter(|| black_box(parse_export_json_str(&text)))
    });
}

fn bench_reconcile(c: &mut Criterion) {
    let followers: ExportMap = parse_export_json_str(&build_export_json(5_000))
        .expect("Failed to parse benchmark export");
    let following: ExportMap = parse_export_json_str(&build_export_json(6_000))
        .expect("Failed to parse benchmark export");
    c.bench_function("not_following_back_5000", |b| {
        b.iter(|| black_box(not_following_back(&followers, &following)))
    });
}

criterion_group!(
    benches,
    bench_index_build,
    bench_match_all,
    bench_parse_export,
    bench_reconcile
);
criterion_main!(benches);
