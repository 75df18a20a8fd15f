//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and their validation
//! using the [clap](https://docs.rs/clap/) library. It provides structured access
//! to user input and handles argument conflicts and defaults.
//!
//! Helper methods on the argument structs accept a [`FileConfig`] reference so
//! that config-file values act as defaults that CLI arguments can override
//! (layered config).

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use table_export::config::{ExportOptions, FileConfig, expand_tilde};

/// Arguments for the `export` subcommand.
#[derive(Parser)]
pub struct ExportArgs {
    /// JSON file containing an array of records to export
    ///
    /// Each element must be a JSON object; one object becomes one CSV row.
    /// When omitted, records are read from standard input instead.
    pub input: Option<PathBuf>,

    /// Columns to export, as comma-separated `Title=key` pairs
    ///
    /// The title becomes the CSV header label and the key selects the record
    /// field, e.g. `--columns "Name=name,Size=size"`. A bare `key` uses the
    /// key as its own title. An empty column list exports nothing.
    #[arg(short = 'c', long)]
    pub columns: String,

    /// Output file path
    ///
    /// Defaults to the input file's name with a `.csv` extension (or
    /// `export.csv` when reading stdin), placed in the configured
    /// `output_dir` or the current directory.
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,

    /// Print a data: URI instead of writing a file
    ///
    /// The payload is percent-encoded after `data:text/csv;charset=utf-8,`
    /// and can be used directly as a download href.
    #[arg(long)]
    pub data_uri: bool,

    /// Overwrite an existing output file without prompting
    #[arg(short = 'f', long)]
    pub force: bool,
}

/// Arguments for the `size` subcommand.
#[derive(Parser)]
pub struct SizeArgs {
    /// Byte counts or human-readable sizes to format
    ///
    /// Plain numbers are taken as bytes; strings like `1.5MB` or `2GiB`
    /// are parsed as sizes. Each value prints on its own line.
    #[arg(num_args = 1.., required = true)]
    pub values: Vec<String>,
}

/// Arguments for the `url` subcommand.
#[derive(Parser)]
pub struct UrlArgs {
    /// URL path segments to join
    ///
    /// Segments are joined with `/`, repeated slashes are collapsed, scheme
    /// prefixes are preserved, and only the first query separator stays `?`.
    #[arg(num_args = 1.., required = true)]
    pub segments: Vec<String>,
}

/// Arguments for the `date` subcommand.
#[derive(Parser)]
pub struct DateArgs {
    /// Timestamp to format (RFC 3339, `YYYY-MM-DD HH:MM:SS`, or `YYYY-MM-DD`)
    pub timestamp: String,

    /// Render the full date-time (`YYYY-MM-DD HH:mm:ss`) instead of the date
    #[arg(short = 't', long, conflicts_with = "relative")]
    pub time: bool,

    /// Render a relative phrase ("3 hours ago") instead of the date
    #[arg(short = 'r', long)]
    pub relative: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Export JSON records to a CSV file or data URI
    Export(ExportArgs),

    /// Format byte counts as human-readable sizes
    Size(SizeArgs),

    /// Join URL path segments into a single URL
    Url(UrlArgs),

    /// Format a timestamp as a date, date-time, or relative phrase
    Date(DateArgs),

    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
///
/// This struct defines the complete command-line interface for the
/// table-export tool, combining the subcommands with the global output-mode
/// flag and providing the main entry point for command parsing.
#[derive(Parser)]
#[command(name = "table-export")]
#[command(about = "Export JSON records to CSV and format sizes, dates, and URLs for display")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output results as a single JSON object for scripting/piping
    ///
    /// When enabled, all human-readable output (colors, emojis, prompts)
    /// is suppressed and a single JSON document is printed to stdout.
    #[arg(long, global = true)]
    pub json: bool,
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }
}

impl ExportArgs {
    /// Resolve the effective export options from CLI args and config file.
    ///
    /// Boolean flags are true when set on either layer; the output path
    /// resolution is described on [`ExportArgs::resolve_output`].
    #[must_use]
    pub fn options(&self, config: &FileConfig) -> ExportOptions {
        ExportOptions {
            out: self.resolve_output(config),
            force: self.force || config.export.force.unwrap_or(false),
            data_uri: self.data_uri || config.export.data_uri.unwrap_or(false),
        }
    }

    /// Resolve the output file path.
    ///
    /// Priority: explicit `--out` (tilde-expanded) > configured `output_dir`
    /// joined with the default file name > default file name in the current
    /// directory. The default name is the input file's stem with a `.csv`
    /// extension, or `export.csv` when reading stdin.
    fn resolve_output(&self, config: &FileConfig) -> PathBuf {
        if let Some(out) = &self.out {
            return expand_tilde(out);
        }

        let file_name = self.input.as_deref().and_then(Path::file_stem).map_or_else(
            || "export.csv".to_string(),
            |stem| format!("{}.csv", stem.to_string_lossy()),
        );

        config.output_dir.as_deref().map_or_else(
            || PathBuf::from(&file_name),
            |dir| expand_tilde(dir).join(&file_name),
        )
    }
}
