//! Line-level parsing of Markdown pipe-tables

use lazy_static::lazy_static;
use regex::Regex;

use super::{ConvertOptions, Record, RowPolicy};

lazy_static! {
    /// A line that starts with `|`, contains at least one more `|`, and
    /// ends with `|` followed only by whitespace.
    static ref TABLE_LINE_RE: Regex = Regex::new(
        r"(?m)^\|.*\|[ \t\r]*$"
    ).unwrap();
}

/// Check whether any line of the document looks like a pipe-table row.
///
/// This is a coarse shape check, permissive by design: it distinguishes
/// "plausibly a table" from "clearly not a table" without parsing the
/// grammar, and it succeeds if a single line matches.
pub fn is_markdown_table(input: &str) -> bool {
    TABLE_LINE_RE.is_match(input)
}

/// Split one table line into trimmed cells.
///
/// Splitting a `|`-delimited line on `|` leaves an empty artifact segment
/// on each side from the outer delimiters; both are stripped before the
/// remaining cells are trimmed. A line without pipes yields no cells.
pub fn split_row(line: &str) -> Vec<String> {
    let mut segments: Vec<&str> = line.split('|').collect();
    if !segments.is_empty() {
        segments.remove(0);
    }
    segments.pop();
    segments
        .into_iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Parse a stripped Markdown table into records.
///
/// Line 0 is the header row. Exactly one line after the header (the
/// separator row) is skipped unconditionally, with no validation of its
/// syntax. Every remaining line becomes one record, paired with the header
/// under the configured `RowPolicy`.
pub fn parse_table(input: &str, options: &ConvertOptions) -> Vec<Record> {
    let mut lines = input.split('\n');

    let headers = split_row(lines.next().unwrap_or_default());

    // Separator row: skip exactly one line, unconditionally.
    lines.next();

    let mut records = Vec::new();
    for line in lines {
        if options.skip_blank_lines && line.trim().is_empty() {
            continue;
        }
        records.push(build_record(&headers, split_row(line), options.row_policy));
    }
    records
}

/// Pair one data row with the header row under the given policy.
fn build_record(headers: &[String], cells: Vec<String>, policy: RowPolicy) -> Record {
    match policy {
        RowPolicy::TruncateToShorter => headers.iter().cloned().zip(cells).collect(),
    }
}
