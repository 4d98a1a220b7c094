//! Core data structures of the document tree.
//!
//! The tree owns its children by value: blocks live in [`Document::children`],
//! inline leaves in their block's child vector. Replacing a node is a splice on
//! the parent's vector and the previous sibling is simply the preceding index.

use super::formats::{TextFormat, TextFormats};
use serde::Serialize;

/// Root of a converted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub children: Vec<Block>,
}

/// Block-level elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Block {
    Paragraph(Paragraph),
    Heading(Heading),
    Quote(Quote),
    CodeBlock(CodeBlock),
    List(List),
    HorizontalRule,
}

/// Discriminant of a [`Block`], handy for assertions and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading,
    Quote,
    CodeBlock,
    List,
    HorizontalRule,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Paragraph {
    pub children: Vec<Inline>,
}

/// Heading with a level between 1 and 6.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub level: u8,
    pub children: Vec<Inline>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Quote {
    pub children: Vec<Inline>,
}

/// Verbatim code. Its content is never scanned for inline formats or links.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBlock {
    pub language: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List {
    pub ordered: bool,
    pub start: Option<u64>,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListItem {
    pub indent: usize,
    pub children: Vec<Inline>,
}

/// Inline leaves of a block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Inline {
    Text(TextRun),
    Link(Link),
}

/// A run of text sharing one set of format flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextRun {
    pub content: String,
    #[serde(skip_serializing_if = "TextFormats::is_empty")]
    pub format: TextFormats,
}

/// A hyperlink. Its text runs are final and never split again.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub url: String,
    pub children: Vec<TextRun>,
}

/// Result of [`TextRun::split`]. Outer parts are `None` when they would be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub before: Option<TextRun>,
    pub matched: TextRun,
    pub after: Option<TextRun>,
}

/// Position at the end of a document.
///
/// `path` indexes from the document's children down to the deepest last node,
/// `offset` counts characters inside that node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    pub path: Vec<usize>,
    pub offset: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(children: Vec<Block>) -> Self {
        Document { children }
    }

    /// Drops every block.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Plain text of all blocks, one block per line.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .map(Block::text_content)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Cursor placed after the last character of the document.
    pub fn select_end(&self) -> Cursor {
        let Some(index) = self.children.len().checked_sub(1) else {
            return Cursor::default();
        };
        let mut path = vec![index];
        let offset = match &self.children[index] {
            Block::CodeBlock(code) => code.content.chars().count(),
            Block::HorizontalRule => 0,
            Block::List(list) => match list.items.len().checked_sub(1) {
                Some(item) => {
                    path.push(item);
                    inline_end(&list.items[item].children, &mut path)
                }
                None => 0,
            },
            block => block
                .inline_children()
                .map(|children| inline_end(children, &mut path))
                .unwrap_or(0),
        };
        Cursor { path, offset }
    }
}

fn inline_end(children: &[Inline], path: &mut Vec<usize>) -> usize {
    let Some(index) = children.len().checked_sub(1) else {
        return 0;
    };
    path.push(index);
    match &children[index] {
        Inline::Text(run) => run.content.chars().count(),
        Inline::Link(link) => match link.children.len().checked_sub(1) {
            Some(child) => {
                path.push(child);
                link.children[child].content.chars().count()
            }
            None => 0,
        },
    }
}

impl Block {
    pub fn paragraph(children: Vec<Inline>) -> Self {
        Block::Paragraph(Paragraph { children })
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Paragraph(_) => BlockKind::Paragraph,
            Block::Heading(_) => BlockKind::Heading,
            Block::Quote(_) => BlockKind::Quote,
            Block::CodeBlock(_) => BlockKind::CodeBlock,
            Block::List(_) => BlockKind::List,
            Block::HorizontalRule => BlockKind::HorizontalRule,
        }
    }

    /// Inline children of blocks that hold text directly.
    ///
    /// Lists hold their inlines in items and code blocks hold raw text, so
    /// both return `None`.
    pub fn inline_children(&self) -> Option<&Vec<Inline>> {
        match self {
            Block::Paragraph(p) => Some(&p.children),
            Block::Heading(h) => Some(&h.children),
            Block::Quote(q) => Some(&q.children),
            Block::CodeBlock(_) | Block::List(_) | Block::HorizontalRule => None,
        }
    }

    pub fn inline_children_mut(&mut self) -> Option<&mut Vec<Inline>> {
        match self {
            Block::Paragraph(p) => Some(&mut p.children),
            Block::Heading(h) => Some(&mut h.children),
            Block::Quote(q) => Some(&mut q.children),
            Block::CodeBlock(_) | Block::List(_) | Block::HorizontalRule => None,
        }
    }

    /// Moves the inline children out, leaving the block empty.
    pub fn take_inline_children(&mut self) -> Vec<Inline> {
        self.inline_children_mut()
            .map(std::mem::take)
            .unwrap_or_default()
    }

    pub fn text_content(&self) -> String {
        match self {
            Block::CodeBlock(code) => code.content.clone(),
            Block::HorizontalRule => String::new(),
            Block::List(list) => list
                .items
                .iter()
                .map(ListItem::text_content)
                .collect::<Vec<_>>()
                .join("\n"),
            block => block
                .inline_children()
                .map(|children| inline_text(children))
                .unwrap_or_default(),
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Block::List(list) => Some(list),
            _ => None,
        }
    }
}

impl ListItem {
    pub fn text_content(&self) -> String {
        inline_text(&self.children)
    }
}

/// Concatenated text of inline leaves, link text included.
pub fn inline_text(children: &[Inline]) -> String {
    let mut text = String::new();
    for child in children {
        match child {
            Inline::Text(run) => text.push_str(&run.content),
            Inline::Link(link) => {
                for run in &link.children {
                    text.push_str(&run.content);
                }
            }
        }
    }
    text
}

impl Inline {
    pub fn as_text(&self) -> Option<&TextRun> {
        match self {
            Inline::Text(run) => Some(run),
            Inline::Link(_) => None,
        }
    }

    pub fn as_link(&self) -> Option<&Link> {
        match self {
            Inline::Link(link) => Some(link),
            Inline::Text(_) => None,
        }
    }
}

impl TextRun {
    pub fn plain(content: impl Into<String>) -> Self {
        TextRun {
            content: content.into(),
            format: TextFormats::NONE,
        }
    }

    pub fn formatted(content: impl Into<String>, format: TextFormats) -> Self {
        TextRun {
            content: content.into(),
            format,
        }
    }

    pub fn has_format(&self, format: TextFormat) -> bool {
        self.format.contains(format)
    }

    /// Sets every flag in `formats`. Flags already present stay set.
    pub fn apply_formats(&mut self, formats: TextFormats) {
        self.format.apply(formats);
    }

    /// Splits the run at byte offsets `start..end`.
    ///
    /// Every part keeps this run's formats. Offsets must satisfy
    /// `start <= end <= content.len()` and fall on character boundaries;
    /// anything else is a bug in the caller and panics.
    pub fn split(self, start: usize, end: usize) -> Split {
        assert!(
            start <= end && end <= self.content.len(),
            "split offsets {start}..{end} out of range for run of length {}",
            self.content.len()
        );
        let format = self.format;
        let part = |text: &str| {
            if text.is_empty() {
                None
            } else {
                Some(TextRun::formatted(text, format))
            }
        };
        Split {
            before: part(&self.content[..start]),
            matched: TextRun::formatted(&self.content[start..end], format),
            after: part(&self.content[end..]),
        }
    }
}

impl Link {
    pub fn new(url: impl Into<String>, text: TextRun) -> Self {
        Link {
            url: url.into(),
            children: vec![text],
        }
    }
}
