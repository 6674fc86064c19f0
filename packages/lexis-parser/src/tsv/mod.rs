//! TSV output generation for parsed records.

mod text;
mod writer;

pub use text::normalize_whitespace;
pub use writer::{create_output_file, RecordWriter};
