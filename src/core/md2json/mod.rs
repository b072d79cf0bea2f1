//! Markdown pipe-table → JSON conversion engine
//!
//! This module turns a single Markdown pipe-table into a JSON array of
//! objects, one object per data row, keyed by the header row.
//!
//! # Architecture
//!
//! The pipeline is strictly linear with no backtracking:
//!
//! ```text
//! Raw text -> Shape check -> Line parser -> Records -> JSON document
//! ```
//!
//! # Example
//!
//! ```
//! use tabson::md2json::{convert, ConvertOptions};
//!
//! let json = convert("| a | b |\n|---|---|\n| 1 | 2 |\n", &ConvertOptions::default()).unwrap();
//! assert!(json.contains("\"a\": \"1\""));
//! ```

mod json;
mod parser;


// Re-export public API
pub use json::records_to_json;
pub use parser::{is_markdown_table, parse_table, split_row};

use indexmap::IndexMap;

use crate::utils::error::{ConvertError, ConvertResult};

/// One converted table row: column name → cell value, in header order.
///
/// Duplicate header names follow mapping-assignment semantics: the key keeps
/// the position of its first occurrence and the value of its last.
pub type Record = IndexMap<String, String>;

/// How a data row is paired with the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPolicy {
    /// Pair cells with header names positionally and stop at the shorter
    /// sequence (standard zip truncation): short rows yield partial records
    /// with the trailing keys missing, excess cells are silently dropped.
    #[default]
    TruncateToShorter,
}

/// Conversion options
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// How data rows are paired with the header row.
    /// Default: `RowPolicy::TruncateToShorter`
    pub row_policy: RowPolicy,

    /// Filter out data lines that are empty after trimming instead of
    /// letting them through as zero-cell rows (which would each append an
    /// empty record).
    /// Default: true
    pub skip_blank_lines: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            row_policy: RowPolicy::TruncateToShorter,
            skip_blank_lines: true,
        }
    }
}

impl ConvertOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

/// Convert raw table text into records.
///
/// Runs the coarse shape check first; the text is stripped of surrounding
/// whitespace before line parsing, so a trailing newline does not produce a
/// phantom row.
pub fn convert_to_records(input: &str, options: &ConvertOptions) -> ConvertResult<Vec<Record>> {
    if !is_markdown_table(input) {
        return Err(ConvertError::invalid_table(
            "no pipe-table line found in input",
        ));
    }
    Ok(parse_table(input.trim(), options))
}

/// Convert raw table text into the serialized JSON document.
pub fn convert(input: &str, options: &ConvertOptions) -> ConvertResult<String> {
    let records = convert_to_records(input, options)?;
    records_to_json(&records)
}
