//! Pure rename planning.
//!
//! Given sorted candidates, their title lines, and the names already on
//! disk, compute every `from -> to` pair without touching the filesystem.
//! The used-name set and the sequence counter are local to one call.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::naming::{collision_suffixed, padded, target_name, Candidate};
use crate::policy::{Policy, RenameOptions, SequenceCounter};
use crate::title::title_stem;

/// A candidate paired with its raw title line.
///
/// `title` is `None` when it was not read: either the note is left alone
/// anyway, or reading it failed and the caller chose to skip it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub candidate: Candidate,
    pub title: Option<String>,
}

/// One planned rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlanEntry {
    pub from: String,
    pub to: String,
}

/// The outcome of planning a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenamePlan {
    /// First sequence number handed out.
    pub seed: u64,
    pub entries: Vec<RenamePlanEntry>,
    /// Files whose computed target equals their current name.
    pub unchanged: Vec<String>,
    /// Titled files left alone by [`Policy::Append`].
    pub untouched: Vec<String>,
    /// Files that needed a new name but came without a title.
    pub skipped: Vec<String>,
}

impl RenamePlan {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Return `desired`, or the first `_N`-suffixed variant not taken.
#[must_use]
pub fn resolve_collision(desired: &str, is_taken: impl Fn(&str) -> bool) -> String {
    if !is_taken(desired) {
        return desired.to_string();
    }
    (1..)
        .map(|n| collision_suffixed(desired, n))
        .find(|name| !is_taken(name))
        .unwrap_or_else(|| desired.to_string())
}

/// Plan a rename pass.
///
/// `notes` must already be in processing order (see
/// [`crate::naming::sort_candidates`]) and hold every candidate in the
/// directory, titles or not: the `Append` seed is taken over all of them.
/// `occupied` holds every file name present at scan time.
#[must_use]
pub fn plan_renames(
    notes: &[Note],
    options: &RenameOptions,
    occupied: &BTreeSet<String>,
) -> RenamePlan {
    let candidates: Vec<Candidate> = notes.iter().map(|n| n.candidate.clone()).collect();
    let seed = SequenceCounter::seed_for(options.policy, &candidates, options.start);
    info!(policy = %options.policy, seed, "computed sequence seed");

    let mut counter = SequenceCounter::new(seed);
    let mut taken = occupied.clone();
    let mut plan = RenamePlan {
        seed,
        ..RenamePlan::default()
    };

    for note in notes {
        let from = note.candidate.file_name.as_str();
        if options.policy == Policy::Append && !note.candidate.needs_title {
            plan.untouched.push(from.to_string());
            continue;
        }
        let Some(title) = note.title.as_deref() else {
            debug!(%from, "no title, left in place");
            plan.skipped.push(from.to_string());
            continue;
        };

        let number = match options.policy {
            Policy::Keep => note.candidate.prefix_digits().to_string(),
            Policy::Sequential | Policy::Append => padded(counter.advance(), options.width),
        };

        let desired = target_name(&number, &title_stem(title, options.max_title_chars));
        // A file's own name never counts against it, so suffixed names stay stable.
        let to = resolve_collision(&desired, |name| name != from && taken.contains(name));
        if to == from {
            plan.unchanged.push(from.to_string());
            continue;
        }

        debug!(%from, %to, "planned rename");
        taken.remove(from);
        taken.insert(to.clone());
        plan.entries.push(RenamePlanEntry {
            from: from.to_string(),
            to,
        });
    }

    plan
}
