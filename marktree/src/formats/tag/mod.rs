//! XML-like tag serialization of the document tree
//!
//! ## Format
//!
//! - Block type → tag name (kebab-case), block properties → attributes
//! - Inline leaves on their own line, text as element content
//! - Two spaces of indentation per level
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <heading level="1">
//!     <text>Intro</text>
//!   </heading>
//!   <paragraph>
//!     <text format="bold">Hello</text>
//!     <link url="https://example.com"><text>site</text></link>
//!   </paragraph>
//! </document>
//! ```

use super::common::bool_param;
use crate::error::FormatError;
use crate::format::Format;
use crate::tree::{Block, Document, Inline, TextRun};
use std::collections::HashMap;

fn format_text(run: &TextRun, show_formats: bool) -> String {
    if show_formats && !run.format.is_empty() {
        format!(
            "<text format=\"{}\">{}</text>",
            run.format,
            escape_xml(&run.content)
        )
    } else {
        format!("<text>{}</text>", escape_xml(&run.content))
    }
}

fn format_inlines(children: &[Inline], indent_level: usize, show_formats: bool) -> String {
    let indent = "  ".repeat(indent_level);
    let mut output = String::new();
    for child in children {
        match child {
            Inline::Text(run) => {
                output.push_str(&format!("{indent}{}\n", format_text(run, show_formats)));
            }
            Inline::Link(link) => {
                let text: String = link
                    .children
                    .iter()
                    .map(|run| format_text(run, show_formats))
                    .collect();
                output.push_str(&format!(
                    "{indent}<link url=\"{}\">{text}</link>\n",
                    escape_xml(&link.url)
                ));
            }
        }
    }
    output
}

fn format_element(
    tag: &str,
    attrs: &str,
    children: &[Inline],
    indent_level: usize,
    show_formats: bool,
) -> String {
    let indent = "  ".repeat(indent_level);
    if children.is_empty() {
        return format!("{indent}<{tag}{attrs}></{tag}>\n");
    }
    format!(
        "{indent}<{tag}{attrs}>\n{}{indent}</{tag}>\n",
        format_inlines(children, indent_level + 1, show_formats)
    )
}

fn format_block(block: &Block, indent_level: usize, show_formats: bool) -> String {
    let indent = "  ".repeat(indent_level);
    match block {
        Block::Paragraph(p) => {
            format_element("paragraph", "", &p.children, indent_level, show_formats)
        }
        Block::Heading(h) => format_element(
            "heading",
            &format!(" level=\"{}\"", h.level),
            &h.children,
            indent_level,
            show_formats,
        ),
        Block::Quote(q) => format_element("quote", "", &q.children, indent_level, show_formats),
        Block::CodeBlock(code) => {
            let lang = code
                .language
                .as_deref()
                .map(|l| format!(" language=\"{}\"", escape_xml(l)))
                .unwrap_or_default();
            format!(
                "{indent}<code-block{lang}>{}</code-block>\n",
                escape_xml(&code.content)
            )
        }
        Block::List(list) => {
            let mut attrs = format!(" ordered=\"{}\"", list.ordered);
            if let Some(start) = list.start {
                attrs.push_str(&format!(" start=\"{start}\""));
            }
            let mut output = format!("{indent}<list{attrs}>\n");
            for item in &list.items {
                output.push_str(&format_element(
                    "list-item",
                    &format!(" indent=\"{}\"", item.indent),
                    &item.children,
                    indent_level + 1,
                    show_formats,
                ));
            }
            output.push_str(&format!("{indent}</list>\n"));
            output
        }
        Block::HorizontalRule => format!("{indent}<horizontal-rule/>\n"),
    }
}

pub fn serialize_document(doc: &Document) -> String {
    serialize_document_with_params(doc, true)
}

/// Serialize a document to tag format
///
/// With `show_formats` unset, text runs are written without their `format` attribute.
pub fn serialize_document_with_params(doc: &Document, show_formats: bool) -> String {
    let mut result = String::new();
    result.push_str("<document>\n");

    for child in &doc.children {
        result.push_str(&format_block(child, 1, show_formats));
    }

    result.push_str("</document>");
    result
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

/// Format implementation for XML-like tag format
#[derive(Debug, Clone, Copy)]
pub struct TagFormat {
    show_formats: bool,
}

impl TagFormat {
    pub fn new(show_formats: bool) -> Self {
        TagFormat { show_formats }
    }
}

impl Default for TagFormat {
    fn default() -> Self {
        TagFormat::new(true)
    }
}

impl Format for TagFormat {
    fn name(&self) -> &str {
        "tag"
    }

    fn description(&self) -> &str {
        "XML-like tag format with hierarchical structure"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tag", "xml"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_document_with_params(doc, self.show_formats))
    }

    /// Supports `show-formats` (`true`/`false`).
    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let show_formats = bool_param(options, "show-formats", self.show_formats)?;
        Ok(serialize_document_with_params(doc, show_formats))
    }
}
