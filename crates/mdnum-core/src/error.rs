//! Error types for mdnum.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Top-level result type for mdnum operations.
pub type Result<T> = std::result::Result<T, MdnumError>;

/// Top-level error type for mdnum.
#[derive(Debug, Error)]
pub enum MdnumError {
    #[error("io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("export error: {0}")]
    Export(String),
}

impl MdnumError {
    /// Wrap an I/O error together with the path it happened on.
    pub fn io_at(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_message_names_the_path() {
        let err = MdnumError::io_at(
            "notes/07.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("notes/07.md"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn config_error_is_human_readable() {
        let err = MdnumError::Config("unknown policy 'shuffle'".to_string());
        assert_eq!(err.to_string(), "config error: unknown policy 'shuffle'");
    }
}
