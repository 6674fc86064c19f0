//! Lexis Parser - Turn LexisNexis news-archive exports into TSV rows.
//!
//! An export is a cover page followed by documents, each introduced by an
//! "N of M DOCUMENTS" line. Every document becomes one row with a fixed set
//! of columns; fields a document lacks are written as `NA`.
//!
//! # Example
//!
//! ```
//! use lexis_parser::splitter::split_export;
//!
//! let text = "cover\n1 of 1 DOCUMENTS\nCNN\nMarch 3, 2012\nSHOW: Nightly News\nHello.";
//! let records: Vec<_> = split_export(text).records().collect();
//!
//! assert_eq!(records[0].show, "Nightly News");
//! assert_eq!(records[0].language, "NA");
//! assert_eq!(records[0].article_text, "Hello.");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants and run configuration
//! - [`types`]: Record, field and cover page types
//! - [`error`]: Error types and Result alias
//! - [`splitter`]: Cover page and document splitting
//! - [`labels`]: Metadata label registry
//! - [`extract`]: Per-document field extraction
//! - [`tsv`]: Whitespace normalization and TSV output
//! - [`pipeline`]: End-to-end conversion
//! - [`report`]: Verbose console printout
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod labels;
pub mod pipeline;
pub mod report;
pub mod splitter;
pub mod tsv;
pub mod types;

// Re-export main functions
pub use extract::extract_record;
pub use pipeline::{convert_export, read_export, run, RunSummary};
pub use splitter::split_export;

// Re-export commonly used items
pub use config::RunConfig;
pub use error::{LexisError, Result};
pub use types::{CoverInfo, Field, Record};
