//! Collision-safe rename execution.
//!
//! Applies a [`RenamePlan`] in order. Each target is rechecked against the
//! live directory right before the rename, so a file that appeared after the
//! scan is never overwritten. The first filesystem error aborts the batch:
//! earlier renames stay applied and later entries are left untouched.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use mdnum_core::error::{MdnumError, Result};
use mdnum_core::naming::Candidate;
use mdnum_core::plan::{plan_renames, resolve_collision, Note, RenamePlan, RenamePlanEntry};
use mdnum_core::policy::{Policy, RenameOptions};
use mdnum_core::title::extract_title;

use crate::scan::snapshot;

/// Whether renames touch the filesystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Apply,
    DryRun,
}

/// Options for a full scan-plan-rename batch.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    pub rename: RenameOptions,
    pub mode: Mode,
    /// Skip notes whose title cannot be read instead of aborting.
    pub skip_unreadable: bool,
}

/// A note left out of the batch because its title could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unreadable {
    pub file_name: String,
    pub reason: String,
}

/// What a batch did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameReport {
    pub seed: u64,
    pub renamed: Vec<RenamePlanEntry>,
    pub unchanged: Vec<String>,
    pub untouched: Vec<String>,
    pub unreadable: Vec<Unreadable>,
    pub dry_run: bool,
}

/// Apply `plan` inside `dir`.
///
/// `on_rename` is called after each rename (or would-be rename in
/// [`Mode::DryRun`]), so callers can report progress even if a later entry
/// fails.
///
/// # Errors
///
/// Returns [`MdnumError::Io`] on the first failed rename.
pub fn execute(
    dir: &Path,
    plan: &RenamePlan,
    mode: Mode,
    mut on_rename: impl FnMut(&RenamePlanEntry),
) -> Result<RenameReport> {
    let mut report = RenameReport {
        seed: plan.seed,
        unchanged: plan.unchanged.clone(),
        untouched: plan.untouched.clone(),
        dry_run: mode == Mode::DryRun,
        ..RenameReport::default()
    };

    for entry in &plan.entries {
        let entry = match mode {
            Mode::DryRun => entry.clone(),
            Mode::Apply => apply(dir, entry)?,
        };
        on_rename(&entry);
        report.renamed.push(entry);
    }

    Ok(report)
}

fn apply(dir: &Path, entry: &RenamePlanEntry) -> Result<RenamePlanEntry> {
    let to = resolve_collision(&entry.to, |name| dir.join(name).exists());
    if to != entry.to {
        warn!(planned = %entry.to, actual = %to, "target appeared since scan");
    }

    let from_path = dir.join(&entry.from);
    fs::rename(&from_path, dir.join(&to)).map_err(|e| MdnumError::io_at(&from_path, e))?;
    debug!(from = %entry.from, %to, "renamed");

    Ok(RenamePlanEntry {
        from: entry.from.clone(),
        to,
    })
}

/// Read the title line of every candidate in `dir` that will be renamed.
///
/// Every candidate comes back as a [`Note`]; those left alone under
/// `Append`, and skipped unreadable ones, carry no title.
fn read_notes(
    dir: &Path,
    candidates: Vec<Candidate>,
    policy: Policy,
    skip_unreadable: bool,
) -> Result<(Vec<Note>, Vec<Unreadable>)> {
    let mut notes = Vec::with_capacity(candidates.len());
    let mut unreadable = Vec::new();

    for candidate in candidates {
        if policy == Policy::Append && !candidate.needs_title {
            notes.push(Note {
                candidate,
                title: None,
            });
            continue;
        }

        let title = match extract_title(&dir.join(&candidate.file_name)) {
            Ok(title) => {
                debug!(file = %candidate.file_name, %title, "extracted title");
                Some(title)
            }
            Err(err) if skip_unreadable => {
                warn!(file = %candidate.file_name, error = %err, "skipping unreadable note");
                unreadable.push(Unreadable {
                    file_name: candidate.file_name.clone(),
                    reason: err.to_string(),
                });
                None
            }
            Err(err) => return Err(err),
        };
        notes.push(Note { candidate, title });
    }

    Ok((notes, unreadable))
}

/// Scan `dir`, plan under `options`, and apply the plan.
///
/// A directory without numbered notes yields an empty report.
///
/// # Errors
///
/// Returns [`MdnumError::Io`] if the directory cannot be listed, the title
/// of a note to be renamed cannot be read (unless `skip_unreadable`), or a
/// rename fails.
pub fn rename_in(
    dir: &Path,
    options: &BatchOptions,
    on_rename: impl FnMut(&RenamePlanEntry),
) -> Result<RenameReport> {
    let snap = snapshot(dir)?;
    let (notes, unreadable) = read_notes(
        dir,
        snap.candidates,
        options.rename.policy,
        options.skip_unreadable,
    )?;

    let plan = plan_renames(&notes, &options.rename, &snap.occupied);
    let mut report = execute(dir, &plan, options.mode, on_rename)?;
    report.unreadable = unreadable;
    Ok(report)
}
