//! Title extraction and sanitization.
//!
//! A note's title is its first non-blank line. Markdown heading markers
//! are stripped and the result is turned into a filename stem:
//! ```text
//! "# HarmonyOS Next: Basics"  ->  "HarmonyOS-Next-Basics"
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{MdnumError, Result};

/// Title used for notes with no non-blank line.
pub const UNTITLED: &str = "untitled";

/// Characters that are illegal in common filesystem paths.
pub const ILLEGAL_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Return the first non-blank line from `reader`, trimmed.
///
/// Falls back to [`UNTITLED`] when every line is blank.
///
/// # Errors
///
/// Returns the underlying I/O error (including invalid UTF-8).
pub fn first_non_empty_line<R: BufRead>(reader: R) -> io::Result<String> {
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }
    Ok(UNTITLED.to_string())
}

/// Read the title line of the note at `path`.
///
/// # Errors
///
/// Returns [`MdnumError::Io`] if the file cannot be opened or is not UTF-8.
pub fn extract_title(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| MdnumError::io_at(path, e))?;
    first_non_empty_line(BufReader::new(file)).map_err(|e| MdnumError::io_at(path, e))
}

/// Turn a raw title line into a filename stem.
///
/// Strips leading `#` markers and surrounding whitespace, replaces spaces
/// with `-`, then drops [`ILLEGAL_CHARS`]. No length cap is applied here;
/// see [`truncate_stem`].
#[must_use]
pub fn format_title_to_filename(title: &str) -> String {
    title
        .trim_start_matches('#')
        .trim()
        .replace(' ', "-")
        .chars()
        .filter(|c| !ILLEGAL_CHARS.contains(c))
        .collect()
}

/// Cut `stem` to at most `max_chars` characters, dropping a dangling `-`.
#[must_use]
pub fn truncate_stem(stem: &str, max_chars: usize) -> String {
    match stem.char_indices().nth(max_chars) {
        Some((idx, _)) => stem[..idx].trim_end_matches('-').to_string(),
        None => stem.to_string(),
    }
}

/// Sanitize `title` and apply the optional length cap.
///
/// An empty result becomes [`UNTITLED`] so a target is never `NN-.md`.
#[must_use]
pub fn title_stem(title: &str, max_chars: Option<usize>) -> String {
    let stem = format_title_to_filename(title);
    let stem = match max_chars {
        Some(max) => truncate_stem(&stem, max),
        None => stem,
    };
    if stem.is_empty() {
        UNTITLED.to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Cursor;

    #[test]
    fn heading_with_colon_becomes_hyphenated_stem() {
        assert_eq!(
            format_title_to_filename("# HarmonyOS Next: Basics"),
            "HarmonyOS-Next-Basics"
        );
    }

    #[test]
    fn strips_every_leading_hash() {
        assert_eq!(format_title_to_filename("###   Deep  Dive"), "Deep--Dive");
    }

    #[test]
    fn removes_all_illegal_characters() {
        assert_eq!(
            format_title_to_filename(r#"a\b/c:d*e?f"g<h>i|j"#),
            "abcdefghij"
        );
    }

    #[test]
    fn keeps_non_ascii_titles() {
        assert_eq!(format_title_to_filename("## 鸿蒙 开发"), "鸿蒙-开发");
    }

    #[test]
    fn first_line_skips_blank_lines() {
        let input = Cursor::new("\n   \n\t\n  # Title here  \nbody\n");
        assert_eq!(first_non_empty_line(input).unwrap(), "# Title here");
    }

    #[test]
    fn empty_input_is_untitled() {
        assert_eq!(first_non_empty_line(Cursor::new("")).unwrap(), UNTITLED);
        assert_eq!(
            first_non_empty_line(Cursor::new("  \n\n \t \n")).unwrap(),
            UNTITLED
        );
    }

    #[test]
    fn extract_title_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("01.md");
        std::fs::write(&path, "\n# Getting Started\n\nText").unwrap();
        assert_eq!(extract_title(&path).unwrap(), "# Getting Started");
    }

    #[test]
    fn extract_title_of_zero_byte_file_is_untitled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("02.md");
        std::fs::write(&path, "").unwrap();
        assert_eq!(extract_title(&path).unwrap(), UNTITLED);
    }

    #[test]
    fn extract_title_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_title(&dir.path().join("nope.md")).unwrap_err();
        assert!(matches!(err, MdnumError::Io { .. }));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_stem("鸿蒙开发指南", 2), "鸿蒙");
        assert_eq!(truncate_stem("short", 10), "short");
        assert_eq!(truncate_stem("ab-cd", 3), "ab");
    }

    #[test]
    fn title_stem_never_empty() {
        assert_eq!(title_stem("###", None), UNTITLED);
        assert_eq!(title_stem("::??", None), UNTITLED);
        assert_eq!(title_stem("# Long Title", Some(4)), "Long");
    }

    proptest! {
        #[test]
        fn sanitized_output_has_no_illegal_chars(title in any::<String>()) {
            let stem = format_title_to_filename(&title);
            prop_assert!(!stem.chars().any(|c| ILLEGAL_CHARS.contains(&c)));
            prop_assert!(!stem.contains(' '));
        }

        #[test]
        fn capped_stem_fits(title in "\\PC{0,200}", max in 1usize..80) {
            let stem = title_stem(&title, Some(max));
            prop_assert!(stem.chars().count() <= max.max(UNTITLED.len()));
        }
    }
}
