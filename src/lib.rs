//! # table-export
//!
//! A small library (and CLI tool) for exporting JSON records to CSV and
//! formatting values for display: human-readable byte sizes, absolute and
//! relative dates, joined URL paths, and named value tables.
//!
//! The CSV format is deliberately simple and fixed (comma-joined titles,
//! one row per record, values inserted verbatim, UTF-8 BOM prefix) so the
//! files open cleanly in the spreadsheet applications the exports feed.
//!
//! ## Example
//!
//! ```no_run
//! use table_export::export::{Column, export_csv};
//! use table_export::utils::bytes_to_size;
//!
//! let columns = vec![Column::new("Name", "name"), Column::new("Size", "size")];
//! export_csv(&columns, &[], std::path::Path::new("files.csv"))?;
//!
//! assert_eq!(bytes_to_size(1536), "1.50 KB");
//! # anyhow::Ok(())
//! ```

pub mod config;
pub mod enums;
pub mod export;
pub mod output;
pub mod utils;

pub use config::ExportOptions;
pub use enums::{EnumEntry, EnumTable};
pub use export::{Column, Record};
