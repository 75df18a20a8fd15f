//! Integration tests for table-export
//!
//! These tests exercise the full export pipeline against real temporary
//! files and pin down the formatting helpers' fixed output contracts.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use table_export::enums::EnumTable;
use table_export::export::{
    Column, Record, csv_data_uri, csv_payload, export_csv, parse_columns,
};
use table_export::utils::{
    bytes_to_size, format_date, format_date_time, parse_size, url_join,
};

/// Helper function to create a temporary directory for testing
fn create_test_directory() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Parse a JSON array literal into export records
fn records_from_json(json: &str) -> Vec<Record> {
    serde_json::from_str(json).expect("Failed to parse test records")
}

#[test]
fn test_export_writes_bom_prefixed_payload() {
    let dir = create_test_directory();
    let out = dir.path().join("files.csv");

    let columns = vec![Column::new("Name", "name"), Column::new("Size", "size")];
    let records = records_from_json(
        r#"[
            {"name": "report.pdf", "size": 1024},
            {"name": "notes.txt", "size": 96}
        ]"#,
    );

    let written = export_csv(&columns, &records, &out).expect("export should succeed");
    assert!(written);

    let bytes = fs::read(&out).expect("Failed to read exported file");
    assert_eq!(&bytes[..3], b"\xef\xbb\xbf");
    assert_eq!(
        String::from_utf8_lossy(&bytes[3..]),
        "Name,Size\nreport.pdf,1024\nnotes.txt,96"
    );
}

#[test]
fn test_export_pipeline_from_column_spec() {
    let dir = create_test_directory();
    let out = dir.path().join("out.csv");

    let columns = parse_columns("N=n");
    let records = records_from_json(r#"[{"n": "a"}, {"n": "b"}]"#);

    export_csv(&columns, &records, &out).expect("export should succeed");

    let content = fs::read_to_string(&out).expect("Failed to read exported file");
    assert_eq!(content.strip_prefix('\u{feff}'), Some("N\na\nb"));
}

#[test]
fn test_export_with_empty_columns_is_silent_noop() {
    let dir = create_test_directory();
    let out = dir.path().join("untouched.csv");

    let records = records_from_json(r#"[{"n": "a"}]"#);
    let written = export_csv(&parse_columns(""), &records, &out).expect("no-op should not error");

    assert!(!written);
    assert!(!out.exists());
}

#[test]
fn test_export_header_only_for_empty_records() {
    let dir = create_test_directory();
    let out = dir.path().join("empty.csv");

    let columns = vec![Column::new("Name", "name")];
    export_csv(&columns, &[], &out).expect("export should succeed");

    let content = fs::read_to_string(&out).expect("Failed to read exported file");
    assert_eq!(content.strip_prefix('\u{feff}'), Some("Name"));
}

#[test]
fn test_export_replaces_existing_file() {
    let dir = create_test_directory();
    let out = dir.path().join("twice.csv");

    let columns = vec![Column::new("N", "n")];
    export_csv(&columns, &records_from_json(r#"[{"n": "first"}]"#), &out)
        .expect("first export should succeed");
    export_csv(&columns, &records_from_json(r#"[{"n": "second"}]"#), &out)
        .expect("second export should succeed");

    let content = fs::read_to_string(&out).expect("Failed to read exported file");
    assert_eq!(content.strip_prefix('\u{feff}'), Some("N\nsecond"));
}

#[test]
fn test_export_to_missing_directory_errors() {
    let dir = create_test_directory();
    let out = dir.path().join("no_such_dir").join("out.csv");

    let columns = vec![Column::new("N", "n")];
    let result = export_csv(&columns, &[], &out);

    assert!(result.is_err());
}

#[test]
fn test_payload_preserves_record_order_and_missing_fields() {
    let columns = parse_columns("Name=name,Owner=owner");
    let records = records_from_json(
        r#"[
            {"name": "a.txt", "owner": "ana"},
            {"name": "b.txt"},
            {"name": "c.txt", "owner": null}
        ]"#,
    );

    assert_eq!(
        csv_payload(&columns, &records),
        "Name,Owner\na.txt,ana\nb.txt,\nc.txt,"
    );
}

#[test]
fn test_data_uri_is_percent_encoded_with_bom() {
    let columns = parse_columns("N=n");
    let records = records_from_json(r#"[{"n": "a b"}]"#);

    let uri = csv_data_uri(&columns, &records);

    assert!(uri.starts_with("data:text/csv;charset=utf-8,%EF%BB%BF"));
    assert!(uri.contains("a%20b"));
    assert!(!uri.contains('\n'));
}

#[test]
fn test_byte_size_contract() {
    assert_eq!(bytes_to_size(0), "0 B");
    assert_eq!(bytes_to_size(1024), "1.00 KB");
    assert_eq!(bytes_to_size(1536), "1.50 KB");
    assert_eq!(bytes_to_size(5 * 1024 * 1024), "5.00 MB");
}

#[test]
fn test_parse_size_accepts_formatter_magnitudes() {
    assert_eq!(parse_size("1KiB").expect("valid size"), 1024);
    assert_eq!(parse_size("1.5MB").expect("valid size"), 1_500_000);
}

#[test]
fn test_url_join_contract() {
    assert_eq!(url_join(["http://a.com", "b", "c"]), "http://a.com/b/c");

    let url = url_join(["a", "b?x=1", "c?y=2"]);
    assert_eq!(url.matches('?').count(), 1);
    assert_eq!(url, "a/b?x=1/c&y=2");
}

#[test]
fn test_date_format_contract() {
    assert_eq!(format_date("2024-03-09 14:30:00"), "2024.03.09");
    assert_eq!(format_date_time("2024-03-09 14:30:05"), "2024-03-09 14:30:05");
    assert_eq!(format_date("definitely not a date"), "Invalid Date");
}

#[test]
fn test_enum_table_contract() {
    let table = EnumTable::new([("A", 1, "Alpha"), ("B", 2, "Beta")]).expect("unique definitions");

    assert_eq!(table.value("A"), Some(1));
    assert_eq!(table.desc("A"), "Alpha");
    assert_eq!(table.desc_from_value(1), "Alpha");
    assert_eq!(table.desc("missing"), "");
    assert!(EnumTable::new([("A", 1, "Alpha"), ("B", 1, "Beta")]).is_err());
}

#[test]
fn test_exported_file_opens_without_bom_in_payload_body() {
    // The BOM must appear exactly once, at the start, never repeated per row.
    let dir = create_test_directory();
    let out = dir.path().join("bom.csv");

    let columns = parse_columns("N=n");
    let records = records_from_json(r#"[{"n": "x"}, {"n": "y"}]"#);
    export_csv(&columns, &records, &out).expect("export should succeed");

    let content = fs::read_to_string(&out).expect("Failed to read exported file");
    assert_eq!(content.matches('\u{feff}').count(), 1);
    assert!(Path::new(&out).exists());
}
