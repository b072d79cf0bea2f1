//! JSON serialization of converted records

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::Record;
use crate::utils::error::{ConvertError, ConvertResult};

/// Serialize records as a JSON array of objects with 4-space indentation.
///
/// Key order inside each object follows header order. String values get
/// standard JSON escaping; non-ASCII text is written as UTF-8 rather than
/// `\u` escapes. The document carries no trailing newline.
pub fn records_to_json(records: &[Record]) -> ConvertResult<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| ConvertError::io(e.to_string()))
}
