//! Configuration structures and file support.
//!
//! This module groups the persistent TOML file configuration and the
//! resolved option structs the rest of the application consumes. Config
//! file values act as defaults; CLI arguments override them.

pub mod export;
pub mod file;

pub use export::ExportOptions;
pub use file::{FileConfig, expand_tilde};
