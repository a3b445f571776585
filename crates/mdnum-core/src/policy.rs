//! Ordering policies and the sequence counter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MdnumError;
use crate::naming::Candidate;

/// How candidates are numbered during a rename pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Keep each file's original digits, replace only the title.
    Keep,
    /// Renumber every candidate from `start` in prefix order.
    Sequential,
    /// Leave titled files alone; number untitled ones after the highest
    /// titled prefix.
    #[default]
    Append,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::Keep, Policy::Sequential, Policy::Append];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Policy::Keep => "keep",
            Policy::Sequential => "sequential",
            Policy::Append => "append",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = MdnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Policy::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                MdnumError::Config(format!(
                    "unknown policy '{s}' (expected keep, sequential, or append)"
                ))
            })
    }
}

/// Knobs for a rename pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOptions {
    pub policy: Policy,
    /// First number handed out by `Sequential`, and by `Append` when no
    /// titled file has a prefix.
    pub start: u64,
    /// Minimum digit count of assigned numbers.
    pub width: usize,
    /// Optional cap on the title portion of the stem, in characters.
    pub max_title_chars: Option<usize>,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            policy: Policy::default(),
            start: 1,
            width: 2,
            max_title_chars: None,
        }
    }
}

/// Monotonic counter handing out sequence numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceCounter {
    next: u64,
}

impl SequenceCounter {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { next: seed }
    }

    /// Seed for `policy` over the given candidates.
    ///
    /// `Keep` never draws from the counter; its seed is reported as `start`.
    #[must_use]
    pub fn seed_for(policy: Policy, candidates: &[Candidate], start: u64) -> u64 {
        match policy {
            Policy::Keep | Policy::Sequential => start,
            Policy::Append => candidates
                .iter()
                .filter(|c| !c.needs_title)
                .filter_map(|c| c.prefix)
                .max()
                .map_or(start, |max| max.saturating_add(1)),
        }
    }

    /// Hand out the current number and advance.
    pub fn advance(&mut self) -> u64 {
        let n = self.next;
        self.next = self.next.saturating_add(1);
        n
    }
}
