//! Whitespace normalization for article text.

use regex::Regex;
use std::sync::LazyLock;

/// Regex pattern for any run of whitespace, line breaks included.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapse every whitespace run to a single space and trim the ends.
///
/// The result never contains line breaks or tabs, so it is safe to place
/// in a single TSV column.
///
/// # Examples
/// ```
/// use lexis_parser::tsv::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("one\n\ttwo   three "), "one two three");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_runs() {
        assert_eq!(normalize_whitespace("a  b"), "a b");
        assert_eq!(normalize_whitespace("a \t \r\n b"), "a b");
    }

    #[test]
    fn test_normalize_trims_ends() {
        assert_eq!(normalize_whitespace("  padded  "), "padded");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_normalize_unicode_whitespace() {
        // Non-breaking space is whitespace for the regex crate
        assert_eq!(normalize_whitespace("a\u{a0}\u{a0}b"), "a b");
    }

    #[test]
    fn test_normalize_keeps_single_spaces() {
        let text = "Already clean text.";
        assert_eq!(normalize_whitespace(text), text);
    }
}
