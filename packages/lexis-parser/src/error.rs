//! Error types for the parser.
//!
//! Extraction itself never fails: malformed documents degrade to sentinel
//! fields. Errors only come from the run surface (paths, IO, TSV writing).

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the parser library.
#[derive(Debug, Error)]
pub enum LexisError {
    /// No input path was given.
    #[error("Must provide an input file name, e.g. lexis-parser input.txt")]
    MissingInput,

    /// Input path does not exist.
    #[error("Input file does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Input path exists but is not a regular file.
    #[error("Input path is not a file: {}", .0.display())]
    InputNotAFile(PathBuf),

    /// Directory the output file should be written to does not exist.
    #[error("Output directory does not exist: {}", .0.display())]
    OutputDirMissing(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TSV serialization error.
    #[error("TSV writing failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, LexisError>;
