//! Error handling for Tabson conversions
//!
//! This module provides a unified error type and result type for the whole
//! conversion pipeline.

use std::fmt;

/// Conversion error type
#[derive(Debug, Clone)]
pub enum ConvertError {
    /// Wrong command-line usage (argument count)
    UsageError { message: String },
    /// IO error (input unreadable, output unwritable)
    IoError { message: String },
    /// Input failed the coarse table-shape check
    FormatError { message: String },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UsageError { message } => {
                write!(f, "Usage error: {}", message)
            }
            ConvertError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            ConvertError::FormatError { message } => {
                write!(f, "Format error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

// Convenience constructors for errors
impl ConvertError {
    pub fn usage(message: impl Into<String>) -> Self {
        ConvertError::UsageError {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        ConvertError::IoError {
            message: message.into(),
        }
    }

    pub fn invalid_table(message: impl Into<String>) -> Self {
        ConvertError::FormatError {
            message: message.into(),
        }
    }
}
