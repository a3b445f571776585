//! Per-directory configuration (`mdnum.toml`).
//!
//! ```toml
//! policy = "append"
//! start = 1
//! width = 2
//! max_title_chars = 120
//! base_url = "https://github.com/<owner>/<repo>/blob/main/"
//! output = "md_links.xlsx"
//! ```
//!
//! Every key is optional. Command-line flags win over the file, the file
//! wins over built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use mdnum_core::error::{MdnumError, Result};
use mdnum_core::policy::{Policy, RenameOptions};

/// Name of the config file looked up in the target directory.
pub const CONFIG_FILE_NAME: &str = "mdnum.toml";

/// Contents of `mdnum.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub policy: Option<Policy>,
    pub start: Option<u64>,
    pub width: Option<usize>,
    pub max_title_chars: Option<usize>,
    pub skip_unreadable: Option<bool>,
    pub base_url: Option<String>,
    pub output: Option<String>,
}

impl Config {
    /// Rename options with unset keys filled from defaults.
    #[must_use]
    pub fn rename_options(&self) -> RenameOptions {
        let defaults = RenameOptions::default();
        RenameOptions {
            policy: self.policy.unwrap_or(defaults.policy),
            start: self.start.unwrap_or(defaults.start),
            width: self.width.unwrap_or(defaults.width),
            max_title_chars: self.max_title_chars.or(defaults.max_title_chars),
        }
    }

    /// Parse config text.
    ///
    /// # Errors
    ///
    /// Returns [`MdnumError::Config`] on invalid TOML, unknown keys, or a
    /// zero `max_title_chars`.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).map_err(|e| MdnumError::Config(e.to_string()))?;
        if config.max_title_chars == Some(0) {
            return Err(MdnumError::Config(
                "max_title_chars must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }
}

/// Path of the config file for `dir`.
#[must_use]
pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Load `mdnum.toml` from `dir`, or defaults when absent.
///
/// # Errors
///
/// Returns [`MdnumError::Io`] if the file exists but cannot be read, and
/// [`MdnumError::Config`] if it cannot be parsed.
pub fn load(dir: &Path) -> Result<Config> {
    let path = config_path(dir);
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(&path).map_err(|e| MdnumError::io_at(&path, e))?;
    let config = Config::parse(&contents)
        .map_err(|e| MdnumError::Config(format!("{}: {e}", path.display())))?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}
