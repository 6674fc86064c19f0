//! Core data types for the parser.
//!
//! A [`Record`] holds one output row. Its column set is fixed: every record
//! carries all fifteen fields, with [`SENTINEL`] standing in for the ones a
//! document did not provide.

use serde::Serialize;

use crate::config::SENTINEL;

/// Output columns, in the order they appear in the TSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Publication name.
    Pub,
    /// Publication date line.
    PubDate,
    /// Broadcast show name.
    Show,
    Anchors,
    Guests,
    Blog,
    Byline,
    Section,
    /// Article length, e.g. "812 words".
    Length,
    LoadDate,
    /// Language, lower-cased.
    Language,
    /// Publication type, lower-cased.
    PubType,
    JournalCode,
    /// Copyright holder text after the "Copyright " prefix.
    Copyright,
    /// Body text left over after metadata extraction.
    ArticleText,
}

impl Field {
    /// All fields in column order.
    pub const ALL: [Field; 15] = [
        Self::Pub,
        Self::PubDate,
        Self::Show,
        Self::Anchors,
        Self::Guests,
        Self::Blog,
        Self::Byline,
        Self::Section,
        Self::Length,
        Self::LoadDate,
        Self::Language,
        Self::PubType,
        Self::JournalCode,
        Self::Copyright,
        Self::ArticleText,
    ];

    /// Column name used in the TSV header.
    #[must_use]
    pub fn column(&self) -> &'static str {
        match self {
            Self::Pub => "pub",
            Self::PubDate => "pub_date",
            Self::Show => "show",
            Self::Anchors => "anchors",
            Self::Guests => "guests",
            Self::Blog => "blog",
            Self::Byline => "byline",
            Self::Section => "section",
            Self::Length => "length",
            Self::LoadDate => "load_date",
            Self::Language => "language",
            Self::PubType => "pub_type",
            Self::JournalCode => "journal_code",
            Self::Copyright => "copyright",
            Self::ArticleText => "article_text",
        }
    }

    /// Label used for the field in the verbose printout.
    #[must_use]
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Pub => "PUBLICATION",
            Self::PubDate => "PUB-DATE",
            Self::Show => "SHOW",
            Self::Anchors => "ANCHORS",
            Self::Guests => "GUESTS",
            Self::Blog => "BLOG",
            Self::Byline => "BYLINE",
            Self::Section => "SECTION",
            Self::Length => "LENGTH",
            Self::LoadDate => "LOAD-DATE",
            Self::Language => "LANGUAGE",
            Self::PubType => "PUB-TYPE",
            Self::JournalCode => "JOURNAL-CODE",
            Self::Copyright => "COPYRIGHT",
            Self::ArticleText => "ARTICLE TEXT",
        }
    }
}

/// Column names in output order.
#[must_use]
pub fn columns() -> [&'static str; 15] {
    Field::ALL.map(|f| f.column())
}

/// One parsed document, serialized as a single TSV row.
///
/// Field order here is the column order; serialization relies on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    #[serde(rename = "pub")]
    pub publication: String,
    pub pub_date: String,
    pub show: String,
    pub anchors: String,
    pub guests: String,
    pub blog: String,
    pub byline: String,
    pub section: String,
    pub length: String,
    pub load_date: String,
    pub language: String,
    pub pub_type: String,
    pub journal_code: String,
    pub copyright: String,
    pub article_text: String,
}

impl Record {
    /// Create a record with every metadata field at the sentinel and empty body text.
    #[must_use]
    pub fn new() -> Self {
        let na = || SENTINEL.to_string();
        Self {
            publication: na(),
            pub_date: na(),
            show: na(),
            anchors: na(),
            guests: na(),
            blog: na(),
            byline: na(),
            section: na(),
            length: na(),
            load_date: na(),
            language: na(),
            pub_type: na(),
            journal_code: na(),
            copyright: na(),
            article_text: String::new(),
        }
    }

    /// Get the value of a field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Pub => &self.publication,
            Field::PubDate => &self.pub_date,
            Field::Show => &self.show,
            Field::Anchors => &self.anchors,
            Field::Guests => &self.guests,
            Field::Blog => &self.blog,
            Field::Byline => &self.byline,
            Field::Section => &self.section,
            Field::Length => &self.length,
            Field::LoadDate => &self.load_date,
            Field::Language => &self.language,
            Field::PubType => &self.pub_type,
            Field::JournalCode => &self.journal_code,
            Field::Copyright => &self.copyright,
            Field::ArticleText => &self.article_text,
        }
    }

    /// Set the value of a field, replacing what was there.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Pub => &mut self.publication,
            Field::PubDate => &mut self.pub_date,
            Field::Show => &mut self.show,
            Field::Anchors => &mut self.anchors,
            Field::Guests => &mut self.guests,
            Field::Blog => &mut self.blog,
            Field::Byline => &mut self.byline,
            Field::Section => &mut self.section,
            Field::Length => &mut self.length,
            Field::LoadDate => &mut self.load_date,
            Field::Language => &mut self.language,
            Field::PubType => &mut self.pub_type,
            Field::JournalCode => &mut self.journal_code,
            Field::Copyright => &mut self.copyright,
            Field::ArticleText => &mut self.article_text,
        };
        *slot = value.into();
    }

    /// Check whether a field still holds the sentinel value.
    #[must_use]
    pub fn is_missing(&self, field: Field) -> bool {
        self.get(field) == SENTINEL
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

/// Search information found on the cover page of an export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverInfo {
    /// The "Download Request: ..." line.
    pub download_request: Option<String>,

    /// The "Terms: ..." line and the two lines after it.
    pub terms: Option<String>,

    /// The "Source: ..." line.
    pub source: Option<String>,
}

impl CoverInfo {
    /// True when none of the cover items were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.download_request.is_none() && self.terms.is_none() && self.source.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_fixed_order() {
        assert_eq!(
            columns(),
            [
                "pub",
                "pub_date",
                "show",
                "anchors",
                "guests",
                "blog",
                "byline",
                "section",
                "length",
                "load_date",
                "language",
                "pub_type",
                "journal_code",
                "copyright",
                "article_text",
            ]
        );
    }

    #[test]
    fn test_new_record_defaults() {
        let record = Record::new();
        for field in Field::ALL {
            if field == Field::ArticleText {
                assert_eq!(record.get(field), "");
            } else {
                assert!(record.is_missing(field), "{} should default to NA", field.column());
            }
        }
    }

    #[test]
    fn test_record_set_and_get() {
        let mut record = Record::new();
        record.set(Field::Show, "Nightly News");
        record.set(Field::Pub, "CNN");

        assert_eq!(record.get(Field::Show), "Nightly News");
        assert_eq!(record.publication, "CNN");
        assert!(!record.is_missing(Field::Show));
        assert!(record.is_missing(Field::Guests));
    }

    #[test]
    fn test_cover_info_is_empty() {
        assert!(CoverInfo::default().is_empty());

        let cover = CoverInfo {
            source: Some("Source: News".to_string()),
            ..CoverInfo::default()
        };
        assert!(!cover.is_empty());
    }
}
