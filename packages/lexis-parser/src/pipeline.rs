//! Main conversion pipeline that ties all components together.

use std::fs;
use std::io::Write;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::config::RunConfig;
use crate::error::Result;
use crate::report;
use crate::splitter::{split_export, Export};
use crate::tsv::{create_output_file, RecordWriter};
use crate::types::{CoverInfo, Field, Record};

/// Outcome of converting one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of data rows written.
    pub documents: usize,

    /// Search information from the cover page.
    pub cover: CoverInfo,
}

/// Convert export text into TSV rows.
///
/// Documents are extracted and written one at a time, in export order.
/// `on_record` sees each record right before it is written.
///
/// # Arguments
/// * `text` - Full export contents
/// * `writer` - Destination; its header row is already written
/// * `on_record` - Called with the 1-based document number and its record
pub fn convert_export<W, F>(
    text: &str,
    writer: &mut RecordWriter<W>,
    on_record: F,
) -> Result<RunSummary>
where
    W: Write,
    F: FnMut(usize, &Record),
{
    write_export(&split_export(text), writer, on_record)
}

/// Write the records of an already split export.
pub fn write_export<W, F>(
    export: &Export<'_>,
    writer: &mut RecordWriter<W>,
    mut on_record: F,
) -> Result<RunSummary>
where
    W: Write,
    F: FnMut(usize, &Record),
{
    info!(documents = export.len(), "Split export into documents");

    let mut documents = 0;
    for record in export.records() {
        documents += 1;
        log_record(documents, &record);
        on_record(documents, &record);
        writer.write(&record)?;
    }

    Ok(RunSummary {
        documents,
        cover: export.cover_info(),
    })
}

fn log_record(number: usize, record: &Record) {
    if record.is_missing(Field::Pub) {
        warn!(document = number, "Empty document block");
    } else if record.is_missing(Field::PubDate) {
        warn!(
            document = number,
            publication = %record.publication,
            "No publication date found"
        );
    } else {
        debug!(
            document = number,
            publication = %record.publication,
            pub_date = %record.pub_date,
            "Extracted document"
        );
    }
}

/// Read an export file as text.
///
/// Older exports are often Windows-1252 encoded. Bytes that are not valid
/// UTF-8 become U+FFFD instead of failing the run.
pub fn read_export(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(path = %path.display(), "Input is not valid UTF-8, replacing invalid bytes");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Run a full conversion from input file to output file.
///
/// With `print` set, run options, the cover page and every record are
/// printed to stdout and the progress bar is hidden.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    config.validate()?;
    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        print = config.print,
        "Run options"
    );

    if config.print {
        report::print_run_options(config);
    }

    let text = read_export(&config.input)?;
    let mut writer = create_output_file(&config.output)?;

    let export = split_export(&text);
    if config.print {
        report::print_cover(&export.cover_info());
    }

    let pb = if config.print {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(export.len() as u64)
    };
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Parsing documents...");

    let result = write_export(&export, &mut writer, |_, record| {
        if config.print {
            report::print_record(record);
        }
        pb.inc(1);
    });
    pb.finish_and_clear();

    let summary = result?;
    writer.finish()?;

    info!(
        documents = summary.documents,
        output = %config.output.display(),
        "Output saved"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_export_zero_documents() {
        let mut writer = RecordWriter::new(Vec::new()).unwrap();
        let summary = convert_export("cover only\n", &mut writer, |_, _| {}).unwrap();
        assert_eq!(summary.documents, 0);

        let output = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_convert_export_observer_order() {
        let text = "cover\n1 of 2 DOCUMENTS\nA\nMay 1, 2000\n2 of 2 DOCUMENTS\nB\nJune 1, 2000\n";
        let mut writer = RecordWriter::new(Vec::new()).unwrap();
        let mut seen = Vec::new();

        let summary = convert_export(text, &mut writer, |n, record| {
            seen.push((n, record.publication.clone()));
        })
        .unwrap();

        assert_eq!(summary.documents, 2);
        assert_eq!(seen, vec![(1, "A".to_string()), (2, "B".to_string())]);
    }

    #[test]
    fn test_convert_export_cover_info() {
        let text = "Source: Broadcast Transcripts\n1 of 1 DOCUMENTS\nA\nMay 1, 2000\n";
        let mut writer = RecordWriter::new(Vec::new()).unwrap();
        let summary = convert_export(text, &mut writer, |_, _| {}).unwrap();

        assert_eq!(summary.cover.source.as_deref(), Some("Source: Broadcast Transcripts"));
        assert!(summary.cover.download_request.is_none());
    }
}
