//! Structured JSON output for scripting and piping.
//!
//! This module provides serializable data structures that represent the
//! result of each subcommand. When the `--json` flag is passed, these
//! structures are serialized to stdout as a single JSON object, replacing
//! all human-readable output.

use std::path::Path;

use humansize::{DECIMAL, format_size};
use serde::Serialize;

use crate::utils::{bytes_to_size, format_date, format_date_time, from_now};

/// JSON output emitted by the `export` subcommand.
#[derive(Serialize, Debug)]
pub struct ExportOutput {
    /// What happened: `"file"`, `"data_uri"`, or `"skipped"`.
    pub mode: String,

    /// Number of records exported.
    pub rows: usize,

    /// Number of columns in the export.
    pub columns: usize,

    /// Path of the written file. Present only in `"file"` mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Size of the written file in bytes. Present only in `"file"` mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,

    /// Human-readable formatted file size (e.g. `"1.23 kB"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_formatted: Option<String>,

    /// The encoded payload. Present only in `"data_uri"` mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_uri: Option<String>,
}

impl ExportOutput {
    /// Build the output for a completed file export.
    #[must_use]
    pub fn from_file(path: &Path, rows: usize, columns: usize, bytes: u64) -> Self {
        Self {
            mode: "file".to_string(),
            rows,
            columns,
            path: Some(path.display().to_string()),
            bytes: Some(bytes),
            bytes_formatted: Some(format_size(bytes, DECIMAL)),
            data_uri: None,
        }
    }

    /// Build the output for a data-URI export.
    #[must_use]
    pub fn from_data_uri(uri: String, rows: usize, columns: usize) -> Self {
        Self {
            mode: "data_uri".to_string(),
            rows,
            columns,
            path: None,
            bytes: None,
            bytes_formatted: None,
            data_uri: Some(uri),
        }
    }

    /// Build the output for a skipped export (empty column list).
    #[must_use]
    pub fn skipped(rows: usize) -> Self {
        Self {
            mode: "skipped".to_string(),
            rows,
            columns: 0,
            path: None,
            bytes: None,
            bytes_formatted: None,
            data_uri: None,
        }
    }
}

/// JSON output emitted by the `size` subcommand, one entry per input value.
#[derive(Serialize, Debug)]
pub struct SizeOutput {
    /// The value as given on the command line.
    pub input: String,

    /// Resolved byte count.
    pub bytes: u64,

    /// Human-readable formatted size (e.g. `"1.50 KB"`).
    pub formatted: String,
}

impl SizeOutput {
    /// Build the output for one resolved size value.
    #[must_use]
    pub fn from_bytes(input: &str, bytes: u64) -> Self {
        Self {
            input: input.to_string(),
            bytes,
            formatted: bytes_to_size(bytes),
        }
    }
}

/// JSON output emitted by the `url` subcommand.
#[derive(Serialize, Debug)]
pub struct UrlOutput {
    /// Number of segments that were joined.
    pub segments: usize,

    /// The joined URL.
    pub url: String,
}

impl UrlOutput {
    /// Build the output for a joined URL.
    #[must_use]
    pub fn from_url(segments: usize, url: String) -> Self {
        Self { segments, url }
    }
}

/// JSON output emitted by the `date` subcommand.
///
/// All three renderings are included so scripts can pick without re-running.
#[derive(Serialize, Debug)]
pub struct DateOutput {
    /// The timestamp as given on the command line.
    pub input: String,

    /// `YYYY.MM.DD` rendering, or `"Invalid Date"`.
    pub date: String,

    /// `YYYY-MM-DD HH:mm:ss` rendering, or `"Invalid Date"`.
    pub date_time: String,

    /// Relative rendering ("3 hours ago"), or `"Invalid Date"`.
    pub relative: String,
}

impl DateOutput {
    /// Build all three renderings of a timestamp.
    #[must_use]
    pub fn from_timestamp(timestamp: &str) -> Self {
        Self {
            input: timestamp.to_string(),
            date: format_date(timestamp),
            date_time: format_date_time(timestamp),
            relative: from_now(timestamp),
        }
    }
}
