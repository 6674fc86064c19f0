//! Tab-separated writer for records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, Writer, WriterBuilder};

use crate::error::{LexisError, Result};
use crate::types::{columns, Record};

/// Sequential TSV writer with a fixed header.
///
/// The header row is written as soon as the writer is created, so an export
/// without documents still produces a header-only file. Fields containing a
/// tab, quote or line break are quoted.
pub struct RecordWriter<W: Write> {
    inner: Writer<W>,
    written: usize,
}

impl<W: Write> RecordWriter<W> {
    /// Wrap `sink` and write the header row.
    pub fn new(sink: W) -> Result<Self> {
        let mut inner = WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(QuoteStyle::Necessary)
            .has_headers(false)
            .from_writer(sink);
        inner.write_record(columns())?;
        Ok(Self { inner, written: 0 })
    }

    /// Append one record.
    pub fn write(&mut self, record: &Record) -> Result<()> {
        self.inner.serialize(record)?;
        self.written += 1;
        Ok(())
    }

    /// Number of records written so far, header excluded.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.written
    }

    /// Flush and return the underlying sink.
    pub fn finish(self) -> Result<W> {
        let mut sink = self.inner.into_inner().map_err(|e| {
            let err = e.error();
            LexisError::Io(std::io::Error::new(err.kind(), err.to_string()))
        })?;
        sink.flush()?;
        Ok(sink)
    }
}

/// Create (or truncate) the output file.
pub fn create_output_file(path: &Path) -> Result<RecordWriter<BufWriter<File>>> {
    let file = File::create(path)?;
    RecordWriter::new(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Field;
    use std::fs;
    use tempfile::tempdir;

    fn write_to_string(records: &[Record]) -> String {
        let mut writer = RecordWriter::new(Vec::new()).unwrap();
        for record in records {
            writer.write(record).unwrap();
        }
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_header_only() {
        let output = write_to_string(&[]);
        assert_eq!(
            output,
            "pub\tpub_date\tshow\tanchors\tguests\tblog\tbyline\tsection\tlength\t\
             load_date\tlanguage\tpub_type\tjournal_code\tcopyright\tarticle_text\n"
        );
    }

    #[test]
    fn test_record_row() {
        let mut record = Record::new();
        record.set(Field::Pub, "CNN");
        record.set(Field::Show, "Nightly News");
        record.set(Field::ArticleText, "Body text.");

        let output = write_to_string(&[record]);
        let rows: Vec<&str> = output.lines().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1],
            "CNN\tNA\tNightly News\tNA\tNA\tNA\tNA\tNA\tNA\tNA\tNA\tNA\tNA\tNA\tBody text."
        );
    }

    #[test]
    fn test_empty_article_text_column() {
        let output = write_to_string(&[Record::new()]);
        let row = output.lines().nth(1).unwrap();
        let cells: Vec<&str> = row.split('\t').collect();
        assert_eq!(cells.len(), 15);
        assert_eq!(cells[14], "");
    }

    #[test]
    fn test_quotes_fields_with_tabs() {
        let mut record = Record::new();
        record.set(Field::Byline, "A\tB");

        let output = write_to_string(&[record]);
        assert!(output.contains("\"A\tB\""));
    }

    #[test]
    fn test_records_written() {
        let mut writer = RecordWriter::new(Vec::new()).unwrap();
        assert_eq!(writer.records_written(), 0);
        writer.write(&Record::new()).unwrap();
        writer.write(&Record::new()).unwrap();
        assert_eq!(writer.records_written(), 2);
    }

    #[test]
    fn test_create_output_file_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        fs::write(&path, "stale content\n").unwrap();

        let writer = create_output_file(&path).unwrap();
        writer.finish().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("pub\tpub_date"));
        assert!(!content.contains("stale"));
    }
}
