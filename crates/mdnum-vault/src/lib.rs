//! # mdnum-vault
//!
//! Filesystem side of mdnum. Every function takes the notes directory
//! explicitly; nothing reads the process working directory.
//!
//! - [`scan`] — list a directory and collect rename candidates
//! - [`rename`] — apply a rename plan without overwriting anything
//! - [`config`] — `mdnum.toml` loading

pub mod config;
pub mod rename;
pub mod scan;

pub use config::Config;
pub use rename::{execute, rename_in, BatchOptions, Mode, RenameReport, Unreadable};
pub use scan::{discover, snapshot, DirSnapshot};
