//! CSV serialization and delivery.
//!
//! This module turns a column list plus JSON records into a CSV payload and
//! delivers it either as a file on disk or as an inline `data:` URI. The
//! payload format is fixed: titles joined by commas, one newline-separated
//! row per record, values inserted verbatim with no quoting or escaping, no
//! trailing newline. Files and data URIs carry a UTF-8 byte-order mark so
//! spreadsheet applications detect the encoding.

use std::fs;
use std::path::Path;

use anyhow::{Result, anyhow};
use serde_json::Value;

/// A JSON object exported as one CSV row.
pub type Record = serde_json::Map<String, Value>;

/// Prefix of the inline payload produced by [`csv_data_uri`].
pub const DATA_URI_PREFIX: &str = "data:text/csv;charset=utf-8,";

/// UTF-8 byte-order mark, written ahead of the payload.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// One CSV column: a display title and the record key it reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header label written in the first row.
    pub title: String,

    /// Record field this column reads its values from.
    pub key: String,
}

impl Column {
    /// Create a column from a title and a record key.
    pub fn new(title: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            key: key.into(),
        }
    }
}

/// Parse a comma-separated column spec into a column list.
///
/// Each element is either `Title=key` or a bare `key` (used as both title
/// and key). Blank elements are skipped, so a wholly empty spec yields an
/// empty list, which downstream export treats as "nothing to do".
///
/// # Examples
///
/// ```
/// # use table_export::export::{Column, parse_columns};
/// let columns = parse_columns("Name=name,size");
/// assert_eq!(columns[0], Column::new("Name", "name"));
/// assert_eq!(columns[1], Column::new("size", "size"));
/// ```
#[must_use]
pub fn parse_columns(spec: &str) -> Vec<Column> {
    spec.split(',')
        .map(str::trim)
        .filter(|element| !element.is_empty())
        .map(|element| match element.split_once('=') {
            Some((title, key)) => Column::new(title.trim(), key.trim()),
            None => Column::new(element, element),
        })
        .collect()
}

/// Render a single record field as CSV text.
///
/// Strings are inserted as-is, numbers and booleans in display form, and
/// `null` as an empty field. Nested arrays and objects render as compact
/// JSON. No CSV quoting is applied at any point.
fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        nested => nested.to_string(),
    }
}

/// Serialize records into the CSV payload.
///
/// The first line is the column titles joined by commas; each record then
/// becomes one line of comma-separated values in column order, with a
/// missing key rendering as an empty field. Lines are separated by `\n`
/// with no trailing newline.
///
/// Field values are inserted verbatim: embedded commas, quotes, or
/// newlines are NOT escaped, matching the consumers this format was built
/// for. Callers that need RFC 4180 quoting must pre-process their values.
#[must_use]
pub fn csv_payload(columns: &[Column], records: &[Record]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);

    lines.push(
        columns
            .iter()
            .map(|column| column.title.as_str())
            .collect::<Vec<_>>()
            .join(","),
    );

    for record in records {
        let row = columns
            .iter()
            .map(|column| record.get(&column.key).map_or_else(String::new, render_value))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }

    lines.join("\n")
}

/// Encode the CSV payload as an inline `data:` URI.
///
/// The payload is prefixed with a U+FEFF byte-order mark and percent-encoded
/// after `data:text/csv;charset=utf-8,`, ready to be used as a download href.
#[must_use]
pub fn csv_data_uri(columns: &[Column], records: &[Record]) -> String {
    let payload = format!("\u{feff}{}", csv_payload(columns, records));

    format!("{DATA_URI_PREFIX}{}", urlencoding::encode(&payload))
}

/// Write the CSV payload to `path`, prefixed with the UTF-8 byte-order mark.
///
/// With an empty column list there is nothing to export: the call is a
/// silent no-op that returns `Ok(false)` without touching the filesystem.
/// An empty record list still writes the header row. Returns `Ok(true)`
/// when the file was written.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn export_csv(columns: &[Column], records: &[Record], path: &Path) -> Result<bool> {
    if columns.is_empty() {
        return Ok(false);
    }

    let payload = csv_payload(columns, records);
    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + payload.len());
    bytes.extend_from_slice(UTF8_BOM);
    bytes.extend_from_slice(payload.as_bytes());

    fs::write(path, bytes)
        .map_err(|e| anyhow!("Failed to write export file {}: {e}", path.display()))?;

    Ok(true)
}
