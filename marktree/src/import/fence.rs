//! Fenced code scanning.
//!
//! An opening fence is three backticks, an optional language of up to ten
//! word characters and optional trailing whitespace. The block ends at the
//! next line that is itself a fence; the language of the closing fence is
//! irrelevant. A fence that is never closed is not a block at all: the line
//! falls through to ordinary block and inline processing.

use crate::tree::{Block, CodeBlock};
use once_cell::sync::Lazy;
use regex::Regex;

static FENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^```([0-9A-Za-z_]{1,10})?\s?$").expect("fence pattern is valid")
});

/// A closed fence found by [`find_fenced_code`].
#[derive(Debug, Clone, PartialEq)]
pub struct FencedCode {
    pub block: CodeBlock,
    /// Index of the closing fence line.
    pub close: usize,
}

pub fn is_fence(line: &str) -> bool {
    FENCE_PATTERN.is_match(line)
}

/// Looks for a code block opening at `lines[start]`.
pub fn find_fenced_code(lines: &[&str], start: usize) -> Option<FencedCode> {
    let captures = FENCE_PATTERN.captures(lines.get(start)?)?;
    let language = captures.get(1).map(|m| m.as_str().to_string());

    let Some(close) = (start + 1..lines.len()).find(|&index| is_fence(lines[index])) else {
        tracing::debug!(line = start + 1, "unterminated code fence, treating as text");
        return None;
    };

    Some(FencedCode {
        block: CodeBlock {
            language,
            content: lines[start + 1..close].join("\n"),
        },
        close,
    })
}

/// Appends the code block opening at `lines[start]`, if any.
///
/// Returns the closing fence's index so the caller resumes after it, or
/// `None` when no block was created and `start` is still the line to process.
pub fn run_fenced_code(lines: &[&str], start: usize, blocks: &mut Vec<Block>) -> Option<usize> {
    let fenced = find_fenced_code(lines, start)?;
    blocks.push(Block::CodeBlock(fenced.block));
    Some(fenced.close)
}
