//! Resolved export options.
//!
//! This module defines the options that control a single export run after
//! CLI arguments and config-file values have been merged.

use std::path::PathBuf;

/// Configuration for one export run.
///
/// Built by merging CLI arguments with [`FileConfig`](super::FileConfig)
/// values; by the time this struct exists all layering has been applied.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Destination path for the export file
    pub out: PathBuf,

    /// Whether to overwrite an existing file without prompting
    pub force: bool,

    /// Whether to print a data URI instead of writing a file
    pub data_uri: bool,
}
