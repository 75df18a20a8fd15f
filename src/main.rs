//! # table-export
//!
//! A small CLI tool for exporting JSON records to CSV and formatting byte
//! sizes, dates, and URL paths for display.
//!
//! The tool reads an array of JSON objects (from a file or stdin), selects
//! columns via `Title=key` pairs, and writes a BOM-prefixed CSV file, or
//! prints the same payload as an inline `data:` URI. The companion
//! subcommands expose the formatting helpers directly for shell use.
//!
//! ## Usage
//!
//! ```bash
//! # Export two columns from a JSON file
//! table-export export files.json --columns "Name=name,Size=size"
//!
//! # Format sizes and dates
//! table-export size 1536 2.5MB
//! table-export date "2024-03-09 14:30:00" --relative
//!
//! # Join URL segments
//! table-export url http://a.com b c "?page=2"
//! ```

mod cli;

use std::fs;
use std::io;
use std::path::Path;
use std::process::exit;

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand, DateArgs, ExportArgs, SizeArgs, UrlArgs};
use colored::Colorize;
use humansize::{DECIMAL, format_size};
use inquire::Confirm;
use table_export::config::FileConfig;
use table_export::export::{self, Record, parse_columns};
use table_export::output::{DateOutput, ExportOutput, SizeOutput, UrlOutput};
use table_export::utils::{format_date, format_date_time, from_now, parse_size, url_join};

/// Entry point for the table-export application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and
/// printing any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// # Errors
///
/// Returns errors from argument validation, reading input records,
/// file-system operations, or JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();
    let json_mode = args.json();

    match &args.command {
        Commands::Config { command } => handle_config_command(command),
        Commands::Export(export_args) => {
            let config = load_config(json_mode);
            cmd_export(export_args, &config, json_mode)
        }
        Commands::Size(size_args) => cmd_size(size_args, json_mode),
        Commands::Url(url_args) => cmd_url(url_args, json_mode),
        Commands::Date(date_args) => cmd_date(date_args, json_mode),
    }
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# table-export configuration
# All values shown are their defaults. Uncomment and change as needed.

# Directory where export files are written when --out is not given
# (defaults to the current directory when not set)
# output_dir = "~/exports"

[export]
# Overwrite existing export files without prompting
# force = false

# Print a data: URI instead of writing a file
# data_uri = false
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }

    let output_dir = config.output_dir.as_ref().map_or_else(
        || "(current directory)  (default)".to_string(),
        |p| format!("\"{}\"", p.display()),
    );

    format!(
        "\
output_dir = {output_dir}

[export]
force      = {force}
data_uri   = {data_uri}",
        force = show_bool(config.export.force, false),
        data_uri = show_bool(config.export.data_uri, false),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}

// ── Subcommands ──────────────────────────────────────────────────────

/// Read export records from a JSON file or, when no path is given, stdin.
///
/// The input must be a JSON array of objects; anything else is an error.
fn read_records(input: Option<&Path>) -> Result<Vec<Record>> {
    let content = match input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read input file {}: {e}", path.display()))?,
        None => io::read_to_string(io::stdin())
            .map_err(|e| anyhow!("Failed to read records from stdin: {e}"))?,
    };

    serde_json::from_str(&content).map_err(|e| anyhow!("Input is not a JSON array of records: {e}"))
}

/// Run the `export` subcommand: read records, serialize, and deliver.
fn cmd_export(args: &ExportArgs, config: &FileConfig, json_mode: bool) -> Result<()> {
    let columns = parse_columns(&args.columns);
    let records = read_records(args.input.as_deref())?;
    let options = args.options(config);

    if columns.is_empty() {
        if json_mode {
            println!(
                "{}",
                serde_json::to_string_pretty(&ExportOutput::skipped(records.len()))?
            );
        } else {
            println!("{}", "✨ No columns given - nothing to export".yellow());
        }
        return Ok(());
    }

    if options.data_uri {
        let uri = export::csv_data_uri(&columns, &records);
        if json_mode {
            println!(
                "{}",
                serde_json::to_string_pretty(&ExportOutput::from_data_uri(
                    uri,
                    records.len(),
                    columns.len()
                ))?
            );
        } else {
            println!("{uri}");
        }
        return Ok(());
    }

    if options.out.exists() && !options.force {
        if json_mode {
            bail!(
                "Output file {} already exists; pass --force to overwrite",
                options.out.display()
            );
        }

        let overwrite = Confirm::new(&format!(
            "Overwrite existing file {}?",
            options.out.display()
        ))
        .with_default(false)
        .prompt()?;

        if !overwrite {
            println!("{}", "✨ Export cancelled - nothing written".yellow());
            return Ok(());
        }
    }

    export::export_csv(&columns, &records, &options.out)?;
    let bytes = fs::metadata(&options.out).map_or(0, |meta| meta.len());

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&ExportOutput::from_file(
                &options.out,
                records.len(),
                columns.len(),
                bytes
            ))?
        );
    } else {
        println!(
            "{} {}",
            "📄 Exported".green().bold(),
            format!(
                "{} rows to {} ({})",
                records.len(),
                options.out.display(),
                format_size(bytes, DECIMAL)
            )
            .bright_white()
        );
    }

    Ok(())
}

/// Run the `size` subcommand: format each value as a human-readable size.
fn cmd_size(args: &SizeArgs, json_mode: bool) -> Result<()> {
    let mut outputs = Vec::with_capacity(args.values.len());
    for value in &args.values {
        let bytes = resolve_bytes(value)?;
        outputs.push(SizeOutput::from_bytes(value, bytes));
    }

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
    } else {
        for output in &outputs {
            if outputs.len() > 1 {
                println!("{:>14}  {}", output.input, output.formatted);
            } else {
                println!("{}", output.formatted);
            }
        }
    }

    Ok(())
}

/// Interpret a CLI size value as raw bytes or a human-readable size string.
fn resolve_bytes(value: &str) -> Result<u64> {
    match value.parse::<u64>() {
        Ok(bytes) => Ok(bytes),
        Err(_) => parse_size(value),
    }
}

/// Run the `url` subcommand: join the segments and print the result.
fn cmd_url(args: &UrlArgs, json_mode: bool) -> Result<()> {
    let url = url_join(&args.segments);

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&UrlOutput::from_url(args.segments.len(), url))?
        );
    } else {
        println!("{url}");
    }

    Ok(())
}

/// Run the `date` subcommand: render the requested form of the timestamp.
fn cmd_date(args: &DateArgs, json_mode: bool) -> Result<()> {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&DateOutput::from_timestamp(&args.timestamp))?
        );
    } else {
        let rendered = if args.relative {
            from_now(&args.timestamp)
        } else if args.time {
            format_date_time(&args.timestamp)
        } else {
            format_date(&args.timestamp)
        };
        println!("{rendered}");
    }

    Ok(())
}
