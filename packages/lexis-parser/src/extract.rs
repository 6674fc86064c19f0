//! Field extraction for a single document block.
//!
//! A document is reduced to trimmed, non-empty lines. The leading lines hold
//! the publication name and date; after that every line is classified once
//! by the label registry and either fills a field or stays body text.

use std::sync::LazyLock;

use tracing::debug;

use crate::config::{COPYRIGHT_TRAILER_LINES, MONTHS};
use crate::labels::{create_lexis_registry, LabelRegistry, LineKind};
use crate::tsv::normalize_whitespace;
use crate::types::{Field, Record};

static LEXIS_REGISTRY: LazyLock<LabelRegistry> = LazyLock::new(create_lexis_registry);

/// The shared registry used by [`extract_record`].
#[must_use]
pub fn lexis_registry() -> &'static LabelRegistry {
    &LEXIS_REGISTRY
}

/// Publication name and date taken from the top of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub publication: Option<String>,
    pub date: Option<String>,
    /// Number of leading lines that belong to the heading.
    pub consumed: usize,
}

/// Split a document into trimmed lines, dropping empty ones.
#[must_use]
pub fn split_lines(segment: &str) -> Vec<&str> {
    segment
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Check if a line opens with a month name, e.g. "March 3, 2012 Saturday".
#[must_use]
pub fn starts_with_month(line: &str) -> bool {
    MONTHS.iter().any(|month| line.starts_with(month))
}

/// Read the publication heading.
///
/// The date line is expected second. When the second line does not start
/// with a month, the publication name spans two lines and the date is the
/// third line. Short documents leave the missing parts as `None`.
///
/// # Examples
/// ```
/// use lexis_parser::extract::take_heading;
///
/// let heading = take_heading(&["The Daily", "Star", "May 1, 2011", "Body"]);
/// assert_eq!(heading.publication.as_deref(), Some("The Daily Star"));
/// assert_eq!(heading.date.as_deref(), Some("May 1, 2011"));
/// assert_eq!(heading.consumed, 3);
/// ```
#[must_use]
pub fn take_heading(lines: &[&str]) -> Heading {
    match lines {
        [] => Heading {
            publication: None,
            date: None,
            consumed: 0,
        },
        [publication] => Heading {
            publication: Some((*publication).to_string()),
            date: None,
            consumed: 1,
        },
        [publication, date, ..] if starts_with_month(date) => Heading {
            publication: Some((*publication).to_string()),
            date: Some((*date).to_string()),
            consumed: 2,
        },
        [first, second, rest @ ..] => Heading {
            publication: Some(format!("{first} {second}")),
            date: rest.first().map(|date| (*date).to_string()),
            consumed: 2 + rest.len().min(1),
        },
    }
}

/// Extract a record from one document block using the LexisNexis labels.
#[must_use]
pub fn extract_record(segment: &str) -> Record {
    extract_record_with(segment, &LEXIS_REGISTRY)
}

/// Extract a record from one document block with a custom label registry.
///
/// Lines after the heading are partitioned in a single pass into labeled
/// metadata and body text. A copyright line is consumed, and the last
/// [`COPYRIGHT_TRAILER_LINES`] lines of the document are then dropped from
/// the body as rights boilerplate. When a label repeats, the last one wins.
#[must_use]
pub fn extract_record_with(segment: &str, registry: &LabelRegistry) -> Record {
    let lines = split_lines(segment);
    let mut record = Record::new();

    let heading = take_heading(&lines);
    if let Some(publication) = heading.publication {
        record.set(Field::Pub, publication);
    }
    if let Some(date) = heading.date {
        record.set(Field::PubDate, date);
    }

    let remaining = &lines[heading.consumed..];
    let trailer_start = remaining.len().saturating_sub(COPYRIGHT_TRAILER_LINES);
    let mut has_copyright = false;
    let mut body: Vec<(usize, &str)> = Vec::new();

    for (idx, &line) in remaining.iter().enumerate() {
        match registry.classify(line) {
            LineKind::Label { field, value } => record.set(field, value),
            LineKind::Copyright(holder) => {
                record.set(Field::Copyright, holder);
                has_copyright = true;
            }
            LineKind::Body => body.push((idx, line)),
        }
    }

    if has_copyright {
        let before = body.len();
        body.retain(|(idx, _)| *idx < trailer_start);
        if body.len() < before {
            debug!(dropped = before - body.len(), "Dropped copyright trailer lines");
        }
    }

    let text: Vec<&str> = body.into_iter().map(|(_, line)| line).collect();
    record.set(Field::ArticleText, normalize_whitespace(&text.join(" ")));

    record
}
