//! Error types for format operations
//!
//! Converting Markdown never fails. Errors only come from looking up formats,
//! compiling caller-supplied transformer tables and serializing trees.

use std::fmt;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
    /// Format does not support the requested operation
    NotSupported(String),
    /// A block or text transformer table entry could not be compiled
    InvalidTransformer(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
            FormatError::InvalidTransformer(msg) => write!(f, "Invalid transformer: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}
