//! Label registry mapping metadata line prefixes to record fields.
//!
//! Every metadata line in a LexisNexis document starts with a fixed label
//! such as `BYLINE: `. The registry holds one rule per label and classifies
//! each line exactly once.

use crate::config::COPYRIGHT_PREFIX;
use crate::types::Field;

/// How the value after a label is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelCase {
    /// Keep the value as written.
    Verbatim,
    /// Lower-case the value.
    Lowercase,
}

/// A single label prefix and the field it fills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRule {
    pub prefix: String,
    pub field: Field,
    pub case: LabelCase,
}

impl LabelRule {
    /// Return the stored value when `line` starts with this rule's prefix.
    #[must_use]
    pub fn apply(&self, line: &str) -> Option<String> {
        let value = line.strip_prefix(self.prefix.as_str())?;
        Some(match self.case {
            LabelCase::Verbatim => value.to_string(),
            LabelCase::Lowercase => value.to_lowercase(),
        })
    }
}

/// Classification of one document line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A labeled metadata line.
    Label { field: Field, value: String },
    /// The copyright line, with the text after "Copyright ".
    Copyright(String),
    /// Anything else; ends up in the article text.
    Body,
}

/// Ordered set of label rules.
#[derive(Debug, Clone, Default)]
pub struct LabelRegistry {
    rules: Vec<LabelRule>,
}

impl LabelRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a label prefix for a field.
    pub fn register(&mut self, prefix: impl Into<String>, field: Field, case: LabelCase) {
        self.rules.push(LabelRule {
            prefix: prefix.into(),
            field,
            case,
        });
    }

    /// Classify a trimmed line.
    ///
    /// Prefixes are matched literally and case-sensitively; the first
    /// registered rule that matches wins.
    #[must_use]
    pub fn classify(&self, line: &str) -> LineKind {
        for rule in &self.rules {
            if let Some(value) = rule.apply(line) {
                return LineKind::Label {
                    field: rule.field,
                    value,
                };
            }
        }

        match line.strip_prefix(COPYRIGHT_PREFIX) {
            Some(holder) => LineKind::Copyright(holder.to_string()),
            None => LineKind::Body,
        }
    }

    /// Check if a field has a registered label.
    #[must_use]
    pub fn has_label(&self, field: Field) -> bool {
        self.rules.iter().any(|r| r.field == field)
    }

    /// Registered rules in match order.
    #[must_use]
    pub fn rules(&self) -> &[LabelRule] {
        &self.rules
    }
}

/// Create the registry for LexisNexis document labels.
///
/// `LANGUAGE:` is registered without a trailing space, the way the exports
/// write it; its value keeps whatever follows the colon.
#[must_use]
pub fn create_lexis_registry() -> LabelRegistry {
    let mut registry = LabelRegistry::new();

    // Broadcast transcripts
    registry.register("SHOW: ", Field::Show, LabelCase::Verbatim);
    registry.register("ANCHORS: ", Field::Anchors, LabelCase::Verbatim);
    registry.register("GUESTS: ", Field::Guests, LabelCase::Verbatim);

    // Article metadata
    registry.register("BLOG: ", Field::Blog, LabelCase::Verbatim);
    registry.register("BYLINE: ", Field::Byline, LabelCase::Verbatim);
    registry.register("SECTION: ", Field::Section, LabelCase::Verbatim);
    registry.register("LENGTH: ", Field::Length, LabelCase::Verbatim);

    // Trailer metadata
    registry.register("LANGUAGE:", Field::Language, LabelCase::Lowercase);
    registry.register("LOAD-DATE: ", Field::LoadDate, LabelCase::Verbatim);
    registry.register("PUBLICATION-TYPE: ", Field::PubType, LabelCase::Lowercase);
    registry.register("JOURNAL-CODE: ", Field::JournalCode, LabelCase::Verbatim);

    registry
}
