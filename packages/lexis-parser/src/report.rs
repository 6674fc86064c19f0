//! Console printout for the `--print` mode.

use console::style;
use textwrap::{fill, Options};

use crate::config::{RunConfig, TERMINAL_WRAP_WIDTH};
use crate::extract::lexis_registry;
use crate::labels::LabelRegistry;
use crate::types::{CoverInfo, Field, Record};

/// Print the options the run was started with.
pub fn print_run_options(config: &RunConfig) {
    println!();
    println!("{}", style("RUN OPTIONS").bold());
    println!("... in = {}", style(config.input.display()).cyan());
    println!("... out = {}", style(config.output.display()).cyan());
    println!("... print = {}", config.print);
    println!("{}", format_labels(lexis_registry()));
}

/// Describe a registry: label prefixes in match order, then the columns
/// no label fills.
#[must_use]
pub fn format_labels(registry: &LabelRegistry) -> String {
    let labels: Vec<&str> = registry.rules().iter().map(|r| r.prefix.trim_end()).collect();
    let unlabeled: Vec<&str> = Field::ALL
        .into_iter()
        .filter(|field| !registry.has_label(*field))
        .map(|field| field.column())
        .collect();
    format!(
        "... labels = {}\n... unlabeled = {}",
        labels.join(" "),
        unlabeled.join(", ")
    )
}

/// Print the search information from the cover page.
pub fn print_cover(cover: &CoverInfo) {
    println!();
    println!("{}", style("COVER PAGE").bold());
    for item in [&cover.download_request, &cover.terms, &cover.source] {
        match item {
            Some(text) => println!("... {text}"),
            None => println!("... {}", style("(not found)").dim()),
        }
    }
}

/// Format a record for display, one field per line.
///
/// Article text comes last, on its own lines and wrapped for the terminal.
#[must_use]
pub fn format_record(record: &Record) -> String {
    let mut out = String::new();
    for field in Field::ALL {
        if field == Field::ArticleText {
            continue;
        }
        let value = record.get(field);
        let value = if record.is_missing(field) {
            style(value).dim().to_string()
        } else {
            value.to_string()
        };
        out.push_str(&format!("{}: {}\n", style(field.display_label()).bold(), value));
    }

    out.push_str(&format!("{}:\n", style(Field::ArticleText.display_label()).bold()));
    out.push_str(&fill(&record.article_text, Options::new(TERMINAL_WRAP_WIDTH)));
    out
}

/// Print one record, preceded by a blank line.
pub fn print_record(record: &Record) {
    println!();
    println!("{}", format_record(record));
}
