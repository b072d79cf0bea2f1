//! Filesystem helpers for the conversion pipeline
//!
//! One read, one write. The input file is opened read-only and released as
//! soon as its contents are in memory; the output file is created or
//! truncated and released after the document is written.

use std::fs;
use std::path::Path;

use crate::utils::error::{ConvertError, ConvertResult};

/// Read the entire source file as UTF-8 text.
pub fn read_source(path: impl AsRef<Path>) -> ConvertResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .map_err(|e| ConvertError::io(format!("cannot read {}: {}", path.display(), e)))
}

/// Create or truncate the target file and write the serialized document.
pub fn write_output(path: impl AsRef<Path>, text: &str) -> ConvertResult<()> {
    let path = path.as_ref();
    fs::write(path, text)
        .map_err(|e| ConvertError::io(format!("cannot write {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("definitely/not/a/real/path.md").unwrap_err();
        assert!(matches!(err, ConvertError::IoError { .. }));
        assert!(err.to_string().contains("path.md"));
    }

    #[test]
    fn test_write_output_invalid_directory() {
        let err = write_output("definitely/not/a/real/dir/out.json", "[]").unwrap_err();
        assert!(matches!(err, ConvertError::IoError { .. }));
    }
}
