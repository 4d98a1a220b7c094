//! Markdown import: string → document tree.
//!
//! The driver walks the input line by line. A line that opens a closed code
//! fence is consumed together with the fenced lines. Any other line becomes a
//! placeholder paragraph, which the block registry may rewrite, after which
//! the inline engine and the link extractor turn its text run into formatted
//! runs and links.
//!
//!     line ─┬─ fence ──────────────────────────────► code block
//!           └─ paragraph → block registry → inline engine → links
//!
//! Conversion is total: any input string produces a tree.

pub mod blocks;
pub mod fence;
pub mod format_table;
pub mod inline;
pub mod links;

use crate::tree::{Block, Document, Inline, TextRun};
use blocks::{active_inlines, BlockTransformers};
use format_table::TextTransformers;
use inline::InlineEngine;

pub const DEFAULT_MAX_INLINE_DEPTH: usize = 32;

/// Tunables of the import that are not part of the transformer tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOptions {
    /// Deepest delimiter nesting that is still unwrapped; deeper pairs stay text.
    pub max_inline_depth: usize,
}

impl Default for ImportOptions {
    fn default() -> Self {
        ImportOptions {
            max_inline_depth: DEFAULT_MAX_INLINE_DEPTH,
        }
    }
}

/// Markdown to document tree converter.
///
/// Holds compiled transformer tables so repeated conversions reuse them.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    blocks: BlockTransformers,
    texts: TextTransformers,
    options: ImportOptions,
}

impl Converter {
    pub fn new(blocks: BlockTransformers, texts: TextTransformers) -> Self {
        Converter {
            blocks,
            texts,
            options: ImportOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ImportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ImportOptions {
        self.options
    }

    pub fn convert(&self, markdown: &str) -> Document {
        let mut document = Document::new();
        self.convert_into(&mut document, markdown);
        document
    }

    /// Replaces the content of `document` with the tree for `markdown`.
    pub fn convert_into(&self, document: &mut Document, markdown: &str) {
        document.clear();

        let lines: Vec<&str> = markdown.split('\n').collect();
        tracing::debug!(lines = lines.len(), "converting markdown");

        let engine = InlineEngine::new(&self.texts, self.options.max_inline_depth);
        let mut index = 0;
        while index < lines.len() {
            // Fenced content is never seen by the other passes.
            if let Some(close) = fence::run_fenced_code(&lines, index, &mut document.children) {
                index = close + 1;
                continue;
            }
            self.convert_line(&mut document.children, lines[index], &engine);
            index += 1;
        }

        tracing::debug!(blocks = document.children.len(), "markdown converted");
    }

    fn convert_line(&self, blocks: &mut Vec<Block>, line: &str, engine: &InlineEngine<'_>) {
        blocks.push(Block::paragraph(vec![Inline::Text(TextRun::plain(line))]));
        self.blocks.apply(blocks, line);

        if let Some(children) = active_inlines(blocks) {
            let raw = std::mem::take(children);
            *children = engine.transform(raw);
        }
    }
}
