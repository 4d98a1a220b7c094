//! JSON serialization of the document tree
//!
//! Blocks and inlines are tagged with a `type` field; text runs carry their
//! formats as a list of names and omit the list when unformatted.
//!
//! ```text
//! {"children":[{"type":"heading","level":1,"children":[{"type":"text","content":"Hi"}]}]}
//! ```

use super::common::bool_param;
use crate::error::FormatError;
use crate::format::Format;
use crate::tree::Document;
use std::collections::HashMap;

/// Format implementation for JSON output
#[derive(Debug, Clone, Copy)]
pub struct JsonFormat {
    pretty: bool,
}

impl JsonFormat {
    pub fn new(pretty: bool) -> Self {
        JsonFormat { pretty }
    }
}

impl Default for JsonFormat {
    fn default() -> Self {
        JsonFormat::new(true)
    }
}

/// Serialize a document as JSON, indented when `pretty` is set.
pub fn to_json_str(doc: &Document, pretty: bool) -> Result<String, FormatError> {
    let result = if pretty {
        serde_json::to_string_pretty(doc)
    } else {
        serde_json::to_string(doc)
    };
    result.map_err(|e| FormatError::SerializationError(e.to_string()))
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Document tree as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        to_json_str(doc, self.pretty)
    }

    /// Supports `pretty` (`true`/`false`), overriding the format's default.
    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let pretty = bool_param(options, "pretty", self.pretty)?;
        to_json_str(doc, pretty)
    }
}
