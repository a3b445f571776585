//! Filename model: numeric prefixes, stems, and rename candidates.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

/// Extension every note carries.
pub const MD_EXT: &str = ".md";

static NUMERIC_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)").expect("static regex"));

/// Leading run of decimal digits in `name`, if any.
#[must_use]
pub fn prefix_digits(name: &str) -> Option<&str> {
    NUMERIC_PREFIX
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Leading digit run parsed as an integer.
///
/// Returns `None` when there is no leading digit or the run overflows `u64`.
#[must_use]
pub fn numeric_prefix(name: &str) -> Option<u64> {
    prefix_digits(name).and_then(|digits| digits.parse().ok())
}

/// Filename without its final `.md` extension.
#[must_use]
pub fn stem(name: &str) -> &str {
    name.strip_suffix(MD_EXT).unwrap_or(name)
}

/// Whether any alphabetic character appears in `stem`.
#[must_use]
pub fn has_letters(stem: &str) -> bool {
    stem.chars().any(char::is_alphabetic)
}

/// Whether `stem` is nothing but ASCII digits, i.e. still awaits a title.
#[must_use]
pub fn is_bare_number(stem: &str) -> bool {
    !stem.is_empty() && stem.bytes().all(|b| b.is_ascii_digit())
}

/// A note eligible for renaming: `.md` with a leading digit.
#[must_use]
pub fn is_candidate(name: &str) -> bool {
    name.ends_with(MD_EXT) && prefix_digits(name).is_some()
}

/// One numbered note discovered on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub file_name: String,
    /// Parsed numeric prefix; `None` sorts last.
    pub prefix: Option<u64>,
    /// Whether the stem is a bare number with no title yet.
    pub needs_title: bool,
}

impl Candidate {
    /// Build a candidate from a file name, or `None` if it is not one.
    #[must_use]
    pub fn from_file_name(name: &str) -> Option<Self> {
        if !is_candidate(name) {
            return None;
        }
        Some(Self {
            file_name: name.to_string(),
            prefix: numeric_prefix(name),
            needs_title: is_bare_number(stem(name)),
        })
    }

    /// The original digit run, preserved verbatim (keeps leading zeros).
    #[must_use]
    pub fn prefix_digits(&self) -> &str {
        prefix_digits(&self.file_name).unwrap_or_default()
    }
}

/// Ascending by numeric prefix, missing prefixes last, then by name.
#[must_use]
pub fn by_prefix(a: &Candidate, b: &Candidate) -> Ordering {
    let key = |c: &Candidate| c.prefix.unwrap_or(u64::MAX);
    key(a)
        .cmp(&key(b))
        .then_with(|| a.prefix.is_none().cmp(&b.prefix.is_none()))
        .then_with(|| a.file_name.cmp(&b.file_name))
}

/// Sort candidates in processing order.
pub fn sort_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(by_prefix);
}

/// Insert `_n` before the final `.md` of `name`.
#[must_use]
pub fn collision_suffixed(name: &str, n: u32) -> String {
    format!("{}_{n}{MD_EXT}", stem(name))
}

/// Build `<number>-<stem>.md`.
#[must_use]
pub fn target_name(number: &str, title_stem: &str) -> String {
    format!("{number}-{title_stem}{MD_EXT}")
}

/// Zero-pad `n` to at least `width` digits.
#[must_use]
pub fn padded(n: u64, width: usize) -> String {
    format!("{n:0width$}")
}
