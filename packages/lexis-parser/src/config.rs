//! Configuration constants and run configuration for the parser.

use std::path::{Path, PathBuf};

use crate::error::{LexisError, Result};

/// Value written for every field that was not found in a document.
pub const SENTINEL: &str = "NA";

/// Output file used when no output path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "lexis_nexis_output.txt";

/// Month names that mark the publication date line of a document heading.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Prefix of the copyright line near the end of each document.
pub const COPYRIGHT_PREFIX: &str = "Copyright ";

/// Number of trailing lines dropped as rights boilerplate once a copyright
/// line has been seen.
pub const COPYRIGHT_TRAILER_LINES: usize = 3;

/// Wrap width for article text in the verbose printout.
pub const TERMINAL_WRAP_WIDTH: usize = 100;

/// Options for a single parser run.
///
/// Built once at startup and handed to [`crate::pipeline::run`] by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// LexisNexis export to read.
    pub input: PathBuf,

    /// TSV file to write.
    pub output: PathBuf,

    /// Print the cover page and every record to stdout.
    pub print: bool,
}

impl RunConfig {
    /// Create a configuration with the default output path and printing off.
    #[must_use]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            print: false,
        }
    }

    /// Build a configuration from optional command-line values.
    ///
    /// # Errors
    /// Returns `LexisError::MissingInput` when no input path is given.
    ///
    /// # Examples
    /// ```
    /// use lexis_parser::config::{RunConfig, DEFAULT_OUTPUT_PATH};
    ///
    /// let config = RunConfig::from_args(Some("in.txt".into()), None, false).unwrap();
    /// assert_eq!(config.output.to_str(), Some(DEFAULT_OUTPUT_PATH));
    ///
    /// assert!(RunConfig::from_args(None, None, false).is_err());
    /// ```
    pub fn from_args(input: Option<PathBuf>, output: Option<PathBuf>, print: bool) -> Result<Self> {
        let input = input.ok_or(LexisError::MissingInput)?;
        let mut config = Self::new(input).with_print(print);
        if let Some(output) = output {
            config = config.with_output(output);
        }
        Ok(config)
    }

    /// Set the output path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Enable or disable the verbose printout.
    #[must_use]
    pub fn with_print(mut self, print: bool) -> Self {
        self.print = print;
        self
    }

    /// Check both paths before anything is read or written.
    pub fn validate(&self) -> Result<()> {
        validate_input(&self.input)?;
        validate_output(&self.output)
    }
}

/// Validate that the input path points at an existing regular file.
pub fn validate_input(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(LexisError::InputNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(LexisError::InputNotAFile(path.to_path_buf()));
    }
    Ok(())
}

/// Validate that the directory holding the output file exists.
///
/// A bare file name resolves against the working directory and always passes.
pub fn validate_output(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => {
            Err(LexisError::OutputDirMissing(dir.to_path_buf()))
        }
        _ => Ok(()),
    }
}
