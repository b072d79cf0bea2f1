//! Core conversion modules
//!
//! This module contains the conversion engine:
//! - `md2json`: Markdown pipe-table to JSON converter

pub mod md2json;

// Re-export main types and functions from md2json
pub use md2json::{
    convert, convert_to_records, is_markdown_table, parse_table, records_to_json, split_row,
    ConvertOptions, Record, RowPolicy,
};
