//! Candidate discovery in an explicit directory.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use mdnum_core::error::{MdnumError, Result};
use mdnum_core::naming::{sort_candidates, Candidate};

/// Snapshot of a directory taken before a rename pass.
#[derive(Debug, Clone, Default)]
pub struct DirSnapshot {
    /// Rename candidates in processing order.
    pub candidates: Vec<Candidate>,
    /// Every entry name in the directory, candidates included.
    pub occupied: BTreeSet<String>,
}

/// List `dir` and pick out numbered `.md` files.
///
/// Non-UTF-8 names are skipped. Only regular files become candidates; all
/// entries count as occupied names.
///
/// # Errors
///
/// Returns [`MdnumError::Io`] if the directory cannot be read.
pub fn snapshot(dir: &Path) -> Result<DirSnapshot> {
    let entries = fs::read_dir(dir).map_err(|e| MdnumError::io_at(dir, e))?;
    let mut snap = DirSnapshot::default();

    for entry in entries {
        let entry = entry.map_err(|e| MdnumError::io_at(dir, e))?;
        let Ok(name) = entry.file_name().into_string() else {
            warn!(path = %entry.path().display(), "skipping non-UTF-8 file name");
            continue;
        };
        let is_file = entry
            .file_type()
            .map_err(|e| MdnumError::io_at(entry.path(), e))?
            .is_file();
        if is_file {
            if let Some(candidate) = Candidate::from_file_name(&name) {
                snap.candidates.push(candidate);
            }
        }
        snap.occupied.insert(name);
    }

    sort_candidates(&mut snap.candidates);
    debug!(
        dir = %dir.display(),
        candidates = ?snap.candidates.iter().map(|c| c.file_name.as_str()).collect::<Vec<_>>(),
        "discovered candidates"
    );
    Ok(snap)
}

/// Numbered `.md` files in `dir`, in processing order.
///
/// # Errors
///
/// Returns [`MdnumError::Io`] if the directory cannot be read.
pub fn discover(dir: &Path) -> Result<Vec<Candidate>> {
    snapshot(dir).map(|snap| snap.candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn discover_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["10.md", "2.md", "README.md", "3.txt", "01-Intro.md"] {
            touch(dir.path(), name);
        }
        let names: Vec<String> = discover(dir.path())
            .unwrap()
            .into_iter()
            .map(|c| c.file_name)
            .collect();
        assert_eq!(names, vec!["01-Intro.md", "2.md", "10.md"]);
    }

    #[test]
    fn directories_are_occupied_but_not_candidates() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("05-archive.md")).unwrap();
        touch(dir.path(), "06.md");

        let snap = snapshot(dir.path()).unwrap();
        assert_eq!(snap.candidates.len(), 1);
        assert!(snap.occupied.contains("05-archive.md"));
        assert!(snap.occupied.contains("06.md"));
    }

    #[test]
    fn empty_directory_has_no_candidates() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover(&dir.path().join("gone")).unwrap_err();
        assert!(matches!(err, MdnumError::Io { .. }));
    }
}
