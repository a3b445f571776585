//! # mdnum-export
//!
//! Catalog export for titled notes. Reads the naming convention the
//! renamer establishes (`NN-Title.md`) and reports it; never renames.
//!
//! - [`catalog`] — title and link derivation, [`build_catalog`]
//! - [`formatter`] — JSON, Table, and Markdown console output
//! - [`xlsx`] — two-column spreadsheet with a header row

pub mod catalog;
pub mod formatter;
pub mod xlsx;

pub use catalog::{build_catalog, Catalog, CatalogRow, DEFAULT_BASE_URL};
pub use formatter::{format_catalog, OutputFormat};
pub use xlsx::{write_xlsx, DEFAULT_OUTPUT};
