//! Common utilities for the output formats
//!
//! Parsing of the string parameters handed to
//! [`Format::serialize_with_options`](crate::format::Format::serialize_with_options).

use crate::error::FormatError;
use std::collections::HashMap;

/// Read a boolean parameter. Accepts `true`/`false` in any case; missing keys yield `default`.
pub fn bool_param(
    params: &HashMap<String, String>,
    key: &str,
    default: bool,
) -> Result<bool, FormatError> {
    match params.get(key) {
        None => Ok(default),
        Some(value) => match value.to_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(invalid(key, value)),
        },
    }
}

/// Read an unsigned integer parameter; missing keys yield `default`.
pub fn usize_param(
    params: &HashMap<String, String>,
    key: &str,
    default: usize,
) -> Result<usize, FormatError> {
    match params.get(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| invalid(key, value)),
    }
}

fn invalid(key: &str, value: &str) -> FormatError {
    FormatError::SerializationError(format!("Invalid value '{value}' for parameter '{key}'"))
}
