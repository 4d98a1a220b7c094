//! Block transformer registry.
//!
//! Each line first becomes a placeholder paragraph holding the whole line as
//! one text run. The registry then tries its transformers in order; the first
//! pattern matching at the start of the line wins. Its prefix is cut from the
//! text run and its builder rewrites the tail of the block list: usually by
//! swapping the placeholder for another block, or, for list items, by merging
//! into the list right before it.

use crate::error::FormatError;
use crate::tree::{inline_text, Block, CodeBlock, Heading, Inline, List, ListItem, Quote};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Rewrites the block list whose last element is the placeholder paragraph.
pub type BlockBuilder = fn(&mut Vec<Block>, &Captures<'_>);

/// A `(pattern, builder)` pair.
#[derive(Debug, Clone)]
pub struct BlockTransformer {
    name: String,
    pattern: Regex,
    builder: BlockBuilder,
}

impl BlockTransformer {
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        builder: BlockBuilder,
    ) -> Result<Self, FormatError> {
        let name = name.into();
        let pattern = Regex::new(pattern)
            .map_err(|e| FormatError::InvalidTransformer(format!("{name}: {e}")))?;
        Ok(BlockTransformer {
            name,
            pattern,
            builder,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Captures of a match starting at the first byte of `line`.
    pub fn captures<'t>(&self, line: &'t str) -> Option<Captures<'t>> {
        let captures = self.pattern.captures(line)?;
        (captures.get(0)?.start() == 0).then_some(captures)
    }
}

/// Ordered block transformer table.
#[derive(Debug, Clone)]
pub struct BlockTransformers {
    entries: Vec<BlockTransformer>,
}

static DEFAULT_BLOCK_TRANSFORMERS: Lazy<BlockTransformers> = Lazy::new(|| {
    let entries = [
        ("heading", r"^(#{1,6})\s", build_heading as BlockBuilder),
        ("quote", r"^>\s", build_quote),
        ("code", r"^```([0-9A-Za-z_]{1,10})?\s", build_code),
        ("unordered-list", r"^(\s*)[-*+]\s", build_unordered_list),
        ("ordered-list", r"^(\s*)(\d+)\.\s", build_ordered_list),
        ("horizontal-rule", r"^(---|\*\*\*|___)\s?$", build_horizontal_rule),
    ]
    .into_iter()
    .map(|(name, pattern, builder)| BlockTransformer::new(name, pattern, builder))
    .collect::<Result<Vec<_>, _>>()
    .unwrap_or_else(|err| panic!("built-in block transformers must compile: {err}"));
    BlockTransformers::new(entries)
});

impl BlockTransformers {
    pub fn new(entries: Vec<BlockTransformer>) -> Self {
        BlockTransformers { entries }
    }

    pub fn entries(&self) -> &[BlockTransformer] {
        &self.entries
    }

    /// Runs the first transformer matching `line` over the placeholder at the
    /// end of `blocks`. Returns the transformer's name, or `None` when the
    /// placeholder stays a plain paragraph.
    pub fn apply(&self, blocks: &mut Vec<Block>, line: &str) -> Option<&str> {
        let (transformer, captures) = self
            .entries
            .iter()
            .find_map(|entry| entry.captures(line).map(|captures| (entry, captures)))?;

        let prefix_len = captures.get(0).map_or(0, |m| m.end());
        strip_placeholder_prefix(blocks, prefix_len);
        (transformer.builder)(blocks, &captures);

        tracing::trace!(transformer = transformer.name(), "block transformer matched");
        Some(transformer.name())
    }
}

impl Default for BlockTransformers {
    fn default() -> Self {
        DEFAULT_BLOCK_TRANSFORMERS.clone()
    }
}

fn strip_placeholder_prefix(blocks: &mut [Block], len: usize) {
    if let Some(Block::Paragraph(paragraph)) = blocks.last_mut() {
        if let Some(Inline::Text(run)) = paragraph.children.first_mut() {
            run.content.drain(..len.min(run.content.len()));
        }
    }
}

/// Removes the placeholder paragraph and hands back its inline children.
pub fn take_placeholder(blocks: &mut Vec<Block>) -> Vec<Inline> {
    match blocks.last() {
        Some(Block::Paragraph(_)) => blocks
            .pop()
            .map(|mut block| block.take_inline_children())
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Inline children receiving the current line's text: the last block's, or
/// the last item's when the last block is a list.
pub fn active_inlines(blocks: &mut [Block]) -> Option<&mut Vec<Inline>> {
    match blocks.last_mut()? {
        Block::List(list) => list.items.last_mut().map(|item| &mut item.children),
        block => block.inline_children_mut(),
    }
}

fn build_heading(blocks: &mut Vec<Block>, captures: &Captures<'_>) {
    let level = captures.get(1).map_or(1, |m| m.len()).clamp(1, 6) as u8;
    let children = take_placeholder(blocks);
    blocks.push(Block::Heading(Heading { level, children }));
}

fn build_quote(blocks: &mut Vec<Block>, _captures: &Captures<'_>) {
    let children = take_placeholder(blocks);
    blocks.push(Block::Quote(Quote { children }));
}

fn build_code(blocks: &mut Vec<Block>, captures: &Captures<'_>) {
    let language = captures.get(1).map(|m| m.as_str().to_string());
    let content = inline_text(&take_placeholder(blocks));
    blocks.push(Block::CodeBlock(CodeBlock { language, content }));
}

fn build_unordered_list(blocks: &mut Vec<Block>, captures: &Captures<'_>) {
    build_list_item(blocks, captures, false);
}

fn build_ordered_list(blocks: &mut Vec<Block>, captures: &Captures<'_>) {
    build_list_item(blocks, captures, true);
}

fn build_list_item(blocks: &mut Vec<Block>, captures: &Captures<'_>, ordered: bool) {
    let children = take_placeholder(blocks);
    let leading = captures.get(1).map_or(0, |m| m.as_str().chars().count());
    let item = ListItem {
        indent: leading / 4,
        children,
    };

    match blocks.last_mut() {
        Some(Block::List(list)) if list.ordered == ordered => list.items.push(item),
        _ => {
            let start = if ordered {
                captures.get(2).and_then(|m| m.as_str().parse().ok())
            } else {
                None
            };
            blocks.push(Block::List(List {
                ordered,
                start,
                items: vec![item],
            }));
        }
    }
}

/// Swaps the placeholder for the rule. The placeholder is not kept behind it,
/// so a rule line never leaves an empty paragraph after the rule.
fn build_horizontal_rule(blocks: &mut Vec<Block>, _captures: &Captures<'_>) {
    take_placeholder(blocks);
    blocks.push(Block::HorizontalRule);
}
