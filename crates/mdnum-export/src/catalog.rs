//! Catalog of titled notes: display title plus hosted link.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use mdnum_core::error::Result;
use mdnum_core::naming::{has_letters, is_candidate, stem, Candidate};

/// Base URL notes are linked under when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://github.com/same4869/HarmonyNext-/blob/main/";

static PREFIX_AND_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+-").expect("static regex"));

/// One catalog line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub title: String,
    pub link: String,
    pub file_name: String,
}

/// All titled notes of a directory, in numeric-prefix order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub rows: Vec<CatalogRow>,
    pub total: usize,
}

/// Whether `name` is a numbered note whose title contains a letter.
///
/// Stricter than the renamer, which treats any non-numeric stem as titled:
/// `02-2024.md` is left alone by `Append` but has no row here.
#[must_use]
pub fn is_catalog_entry(name: &str) -> bool {
    is_candidate(name) && has_letters(stem(name))
}

/// `124-HarmonyOS-Next.md` -> `HarmonyOS-Next`.
#[must_use]
pub fn title_without_prefix(name: &str) -> String {
    stem(&PREFIX_AND_DASH.replace(name, "")).to_string()
}

/// Join `base_url` and a percent-encoded `file_name`.
#[must_use]
pub fn link_for(base_url: &str, file_name: &str) -> String {
    let encoded = urlencoding::encode(file_name);
    if base_url.ends_with('/') {
        format!("{base_url}{encoded}")
    } else {
        format!("{base_url}/{encoded}")
    }
}

impl Catalog {
    /// Build rows from candidates already in processing order.
    #[must_use]
    pub fn from_candidates(candidates: &[Candidate], base_url: &str) -> Self {
        let rows: Vec<CatalogRow> = candidates
            .iter()
            .filter(|c| is_catalog_entry(&c.file_name))
            .map(|c| CatalogRow {
                title: title_without_prefix(&c.file_name),
                link: link_for(base_url, &c.file_name),
                file_name: c.file_name.clone(),
            })
            .collect();
        Self {
            total: rows.len(),
            rows,
        }
    }
}

/// Scan `dir` and build its catalog.
///
/// # Errors
///
/// Returns [`mdnum_core::MdnumError::Io`] if the directory cannot be read.
pub fn build_catalog(dir: &Path, base_url: &str) -> Result<Catalog> {
    let candidates = mdnum_vault::discover(dir)?;
    let catalog = Catalog::from_candidates(&candidates, base_url);
    for row in &catalog.rows {
        debug!(title = %row.title, "added catalog row");
    }
    Ok(catalog)
}
