//! Command-line interface for the parser.

use std::path::PathBuf;

use clap::Parser;
use console::style;

use crate::config::{RunConfig, DEFAULT_OUTPUT_PATH};
use crate::error::Result;
use crate::pipeline;

/// Parse a LexisNexis export into a tab-separated file.
#[derive(Parser)]
#[command(name = "lexis-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// LexisNexis export to parse
    pub input: Option<PathBuf>,

    /// Output TSV file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Print run options, the cover page and every parsed document
    #[arg(short, long)]
    pub print: bool,
}

impl Cli {
    /// Turn parsed arguments into a run configuration.
    pub fn into_config(self) -> Result<RunConfig> {
        RunConfig::from_args(self.input, Some(self.output), self.print)
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let config = Cli::parse().into_config()?;
    parse_command(&config)
}

/// Execute a parse run and report where the output went.
fn parse_command(config: &RunConfig) -> Result<()> {
    let summary = pipeline::run(config)?;

    println!();
    println!(
        "{} {} document(s) to {}",
        style("Saved").green().bold(),
        summary.documents,
        style(config.output.display()).cyan()
    );

    Ok(())
}
