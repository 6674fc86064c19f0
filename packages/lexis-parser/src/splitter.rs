//! Splitting a raw LexisNexis export into its cover page and documents.

use regex::Regex;
use std::sync::LazyLock;

use crate::extract::extract_record;
use crate::types::{CoverInfo, Record};

/// Regex for the "N of M DOCUMENTS" line that precedes every document.
///
/// Exports centre the marker, so surrounding spaces and tabs are allowed.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DOCUMENT_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*\d+ of \d+ DOCUMENTS[ \t]*\r?$").expect("valid regex")
});

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DOWNLOAD_REQUEST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Download Request: .*").expect("valid regex"));

/// Terms line plus the two lines that continue it.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TERMS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Terms: .*(?:\n.*){2}").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SOURCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Source: .*").expect("valid regex"));

/// An export split at its document markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export<'a> {
    /// Text before the first marker (the whole input when there is none).
    pub cover: &'a str,

    /// Document bodies in export order.
    pub documents: Vec<&'a str>,
}

impl Export<'_> {
    /// Parse the search information on the cover page.
    #[must_use]
    pub fn cover_info(&self) -> CoverInfo {
        parse_cover(self.cover)
    }

    /// Extract one record per document, lazily and in order.
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        self.documents.iter().map(|doc| extract_record(doc))
    }

    /// Number of documents in the export.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when the export holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Split export text on its document markers.
///
/// Never fails: text without markers yields a cover page and no documents.
///
/// # Examples
/// ```
/// use lexis_parser::splitter::split_export;
///
/// let export = split_export("cover\n1 of 1 DOCUMENTS\nCNN\nMarch 3, 2012\nBody");
/// assert_eq!(export.documents.len(), 1);
/// assert_eq!(export.cover, "cover\n");
/// ```
#[must_use]
pub fn split_export(text: &str) -> Export<'_> {
    let mut segments = DOCUMENT_MARKER.split(text);
    let cover = segments.next().unwrap_or_default();
    Export {
        cover,
        documents: segments.collect(),
    }
}

/// Pull the download request, search terms and source out of a cover page.
#[must_use]
pub fn parse_cover(cover: &str) -> CoverInfo {
    let find = |re: &Regex| re.find(cover).map(|m| m.as_str().trim_end().to_string());
    CoverInfo {
        download_request: find(&DOWNLOAD_REQUEST),
        terms: find(&TERMS),
        source: find(&SOURCE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_no_markers() {
        let export = split_export("Just a cover page\nwith no documents");
        assert_eq!(export.cover, "Just a cover page\nwith no documents");
        assert!(export.is_empty());
        assert_eq!(export.records().count(), 0);
    }

    #[test]
    fn test_split_empty_input() {
        let export = split_export("");
        assert_eq!(export.cover, "");
        assert!(export.is_empty());
    }

    #[test]
    fn test_split_multiple_documents() {
        let text = "cover\n\n1 of 2 DOCUMENTS\n\nfirst\n\n2 of 2 DOCUMENTS\n\nsecond\n";
        let export = split_export(text);

        assert_eq!(export.len(), 2);
        assert!(export.documents[0].contains("first"));
        assert!(!export.documents[0].contains("second"));
        assert!(export.documents[1].contains("second"));
    }

    #[test]
    fn test_split_centred_marker() {
        let text = "cover\r\n                 12 of 150 DOCUMENTS   \r\nbody\r\n";
        let export = split_export(text);
        assert_eq!(export.len(), 1);
        assert!(!export.documents[0].contains("DOCUMENTS"));
    }

    #[test]
    fn test_marker_must_stand_alone() {
        let text = "cover\nWe found 1 of 2 DOCUMENTS relevant.\n";
        let export = split_export(text);
        assert!(export.is_empty());
    }

    #[test]
    fn test_parse_cover() {
        let cover = "Download Request: Select All : 1-2\n\
                     Time Of Request: Monday, March 5, 2012\n\
                     Terms: (nightly news)\n\
                     and broadcast\n\
                     Date: 2012\n\
                     Source: News Transcripts\n\
                     Project ID:\n";
        let info = parse_cover(cover);

        assert_eq!(
            info.download_request.as_deref(),
            Some("Download Request: Select All : 1-2")
        );
        assert_eq!(
            info.terms.as_deref(),
            Some("Terms: (nightly news)\nand broadcast\nDate: 2012")
        );
        assert_eq!(info.source.as_deref(), Some("Source: News Transcripts"));
    }

    #[test]
    fn test_parse_cover_missing_items() {
        let info = parse_cover("nothing useful here\n");
        assert!(info.is_empty());
    }

    #[test]
    fn test_terms_needs_two_following_lines() {
        // Too few lines after Terms: to complete the match
        let info = parse_cover("Terms: short");
        assert!(info.terms.is_none());
    }
}
