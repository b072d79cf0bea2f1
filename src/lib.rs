//! # tabson
//!
//! Markdown pipe-table to JSON converter written in Rust.
//!
//! ## Features
//!
//! - **Single-pass**: one linear read → validate → parse → serialize → write
//!   pipeline, no backtracking
//! - **Header-keyed output**: each data row becomes one JSON object keyed by
//!   the table's column headers, in header order
//! - **Coarse validation**: a cheap shape check rejects input that is
//!   clearly not a table before any parsing
//! - **Named row policy**: mismatched row widths are handled by an explicit
//!   truncate-to-shorter pairing policy
//! - **CLI**: a small `md2j` binary over the library API
//!
//! ## Usage Examples
//!
//! ### Table Conversion
//!
//! ```rust
//! use tabson::markdown_table_to_json;
//!
//! let json = markdown_table_to_json("| a | b |\n|---|---|\n| 1 | 2 |\n").unwrap();
//! assert_eq!(json, "[\n    {\n        \"a\": \"1\",\n        \"b\": \"2\"\n    }\n]");
//! ```
//!
//! ### Working with Records
//!
//! ```rust
//! use tabson::markdown_table_to_records;
//!
//! let records = markdown_table_to_records("| name |\n|------|\n| ada  |\n").unwrap();
//! assert_eq!(records[0]["name"], "ada");
//! ```

/// Core conversion modules
pub mod core;

/// Utility modules
pub mod utils;

// Re-export core conversion functions
pub use core::md2json;
pub use core::{ConvertOptions, Record, RowPolicy};

// Re-export utilities
pub use utils::error::{ConvertError, ConvertResult};
pub use utils::files;

use std::path::Path;

/// Convert Markdown table text to records
///
/// # Arguments
/// * `input` - raw text containing a single Markdown pipe-table
///
/// # Returns
/// One record per data row, keys in header order
pub fn markdown_table_to_records(input: &str) -> ConvertResult<Vec<Record>> {
    md2json::convert_to_records(input, &ConvertOptions::default())
}

/// Convert Markdown table text to records with custom options
pub fn markdown_table_to_records_with_options(
    input: &str,
    options: &ConvertOptions,
) -> ConvertResult<Vec<Record>> {
    md2json::convert_to_records(input, options)
}

/// Convert Markdown table text to a serialized JSON document
///
/// # Arguments
/// * `input` - raw text containing a single Markdown pipe-table
///
/// # Returns
/// A JSON array of objects with 4-space indentation
pub fn markdown_table_to_json(input: &str) -> ConvertResult<String> {
    md2json::convert(input, &ConvertOptions::default())
}

/// Convert Markdown table text to a serialized JSON document with custom options
pub fn markdown_table_to_json_with_options(
    input: &str,
    options: &ConvertOptions,
) -> ConvertResult<String> {
    md2json::convert(input, options)
}

/// Convert a Markdown table file into a JSON file
///
/// Reads the whole input file, validates and converts it, then creates or
/// truncates the output file. Validation failure surfaces as
/// `ConvertError::FormatError` before any output I/O happens.
pub fn convert_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> ConvertResult<()> {
    convert_file_with_options(input, output, &ConvertOptions::default())
}

/// Convert a Markdown table file into a JSON file with custom options
pub fn convert_file_with_options(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConvertOptions,
) -> ConvertResult<()> {
    let source = files::read_source(input)?;
    let json = md2json::convert(&source, options)?;
    files::write_output(output, &json)
}
