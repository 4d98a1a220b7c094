//! Treeviz formatter for the document tree
//!
//! Treeviz draws the tree with box-drawing connectors, one node per line:
//!
//! <prefix><connector> <icon> <label>
//!
//! Labels longer than the configured width are truncated with `…`.
//!
//! ```text
//! ⧉ Document (3 blocks)
//! ├─ § h1 Title
//! │ └─ ◦ "Title"
//! ├─ ☰ 2 items, ordered from 1
//! │ ├─ • first
//! │ │ └─ ◦ "first"
//! │ └─ • (indent 1) second
//! │   └─ ◦ "second" [bold]
//! └─ ⎯ horizontal rule
//! ```

use super::common::usize_param;
use super::icons::get_icon;
use crate::error::FormatError;
use crate::format::Format;
use crate::tree::{Block, Document, Inline, TextRun};
use std::collections::HashMap;

pub const DEFAULT_LABEL_WIDTH: usize = 40;

/// Truncate `label` to `width` characters, marking the cut with `…`. Width 0 disables truncation.
fn truncate(label: &str, width: usize) -> String {
    if width == 0 || label.chars().count() <= width {
        return label.to_string();
    }
    let mut cut: String = label.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// One node to draw: icon, label and already-built child nodes.
struct Node {
    icon: &'static str,
    label: String,
    children: Vec<Node>,
}

impl Node {
    fn leaf(node_type: &str, label: String) -> Self {
        Node {
            icon: get_icon(node_type),
            label,
            children: Vec::new(),
        }
    }

    fn with_children(node_type: &str, label: String, children: Vec<Node>) -> Self {
        Node {
            icon: get_icon(node_type),
            label,
            children,
        }
    }
}

fn text_node(run: &TextRun, width: usize) -> Node {
    let mut label = format!("{:?}", truncate(&run.content, width));
    if !run.format.is_empty() {
        label.push_str(&format!(" [{}]", run.format));
    }
    Node::leaf("Text", label)
}

fn inline_nodes(children: &[Inline], width: usize) -> Vec<Node> {
    children
        .iter()
        .map(|child| match child {
            Inline::Text(run) => text_node(run, width),
            Inline::Link(link) => Node::with_children(
                "Link",
                truncate(&link.url, width),
                link.children.iter().map(|run| text_node(run, width)).collect(),
            ),
        })
        .collect()
}

fn block_node(block: &Block, width: usize) -> Node {
    match block {
        Block::Paragraph(p) => Node::with_children(
            "Paragraph",
            truncate(&block.text_content(), width),
            inline_nodes(&p.children, width),
        ),
        Block::Heading(h) => Node::with_children(
            "Heading",
            truncate(&format!("h{} {}", h.level, block.text_content()), width),
            inline_nodes(&h.children, width),
        ),
        Block::Quote(q) => Node::with_children(
            "Quote",
            truncate(&block.text_content(), width),
            inline_nodes(&q.children, width),
        ),
        Block::CodeBlock(code) => {
            let lines = if code.content.is_empty() {
                0
            } else {
                code.content.split('\n').count()
            };
            let language = code.language.as_deref().unwrap_or("code");
            Node::leaf("CodeBlock", format!("{language} ({lines} lines)"))
        }
        Block::List(list) => {
            let mut label = format!("{} items", list.items.len());
            if list.ordered {
                match list.start {
                    Some(start) => label.push_str(&format!(", ordered from {start}")),
                    None => label.push_str(", ordered"),
                }
            }
            let items = list
                .items
                .iter()
                .map(|item| {
                    let text = item.text_content();
                    let label = if item.indent > 0 {
                        format!("(indent {}) {text}", item.indent)
                    } else {
                        text
                    };
                    Node::with_children(
                        "ListItem",
                        truncate(&label, width),
                        inline_nodes(&item.children, width),
                    )
                })
                .collect();
            Node::with_children("List", label, items)
        }
        Block::HorizontalRule => Node::leaf("HorizontalRule", "horizontal rule".to_string()),
    }
}

fn format_node(node: &Node, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!("{prefix}{connector} {} {}\n", node.icon, node.label));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(&node.children, &child_prefix, output);
}

fn format_children(children: &[Node], prefix: &str, output: &mut String) {
    let child_count = children.len();
    for (i, child) in children.iter().enumerate() {
        format_node(child, prefix, i == child_count - 1, output);
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    to_treeviz_str_with_width(doc, DEFAULT_LABEL_WIDTH)
}

/// Render a document, truncating labels to `label_width` characters (0 keeps them whole).
pub fn to_treeviz_str_with_width(doc: &Document, label_width: usize) -> String {
    let icon = get_icon("Document");
    let mut output = format!("{} Document ({} blocks)\n", icon, doc.children.len());

    let nodes: Vec<Node> = doc
        .children
        .iter()
        .map(|block| block_node(block, label_width))
        .collect();
    format_children(&nodes, "", &mut output);
    output
}

/// Format implementation for treeviz format
#[derive(Debug, Clone, Copy)]
pub struct TreevizFormat {
    label_width: usize,
}

impl TreevizFormat {
    pub fn new(label_width: usize) -> Self {
        TreevizFormat { label_width }
    }
}

impl Default for TreevizFormat {
    fn default() -> Self {
        TreevizFormat::new(DEFAULT_LABEL_WIDTH)
    }
}

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_width(doc, self.label_width))
    }

    /// Supports `label-width` (characters, 0 disables truncation).
    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let width = usize_param(options, "label-width", self.label_width)?;
        Ok(to_treeviz_str_with_width(doc, width))
    }
}
