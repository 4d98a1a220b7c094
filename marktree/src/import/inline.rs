//! Inline delimiter engine.
//!
//! Finds the leftmost delimiter pair in a text run, cuts the run into
//! before / matched / after, strips the delimiters from the matched part and
//! applies the tag's formats. The matched part is scanned again for nested
//! pairs unless it is code, and the remainder is scanned for further pairs.
//! Runs without any pair are handed to the link extractor.
//!
//! Work is driven by an explicit stack rather than recursion. Items are popped
//! in document order, so output is appended in order as well. Nesting deeper
//! than `max_depth` is left as literal text.

use super::format_table::TextTransformers;
use super::links::extract_links;
use crate::tree::{Inline, Split, TextFormat, TextRun};

/// Runs the text transformer table over inline content.
#[derive(Debug, Clone, Copy)]
pub struct InlineEngine<'a> {
    transformers: &'a TextTransformers,
    max_depth: usize,
}

impl<'a> InlineEngine<'a> {
    pub fn new(transformers: &'a TextTransformers, max_depth: usize) -> Self {
        InlineEngine {
            transformers,
            max_depth,
        }
    }

    /// Transforms every text run in `children`. Links pass through untouched.
    pub fn transform(&self, children: Vec<Inline>) -> Vec<Inline> {
        let mut output = Vec::with_capacity(children.len());
        for child in children {
            match child {
                Inline::Text(run) => output.extend(self.transform_run(run)),
                link @ Inline::Link(_) => output.push(link),
            }
        }
        output
    }

    /// Transforms a single run into formatted runs and links.
    pub fn transform_run(&self, run: TextRun) -> Vec<Inline> {
        let mut output = Vec::new();
        let mut stack = vec![(run, 0usize)];

        while let Some((run, depth)) = stack.pop() {
            if run.has_format(TextFormat::Code) {
                output.push(Inline::Text(run));
                continue;
            }

            let Some(found) = self.transformers.find(&run.content) else {
                output.extend(extract_links(run));
                continue;
            };

            if depth >= self.max_depth {
                tracing::warn!(
                    depth,
                    max_depth = self.max_depth,
                    "inline nesting limit reached, keeping delimiters as text"
                );
                output.extend(extract_links(run));
                continue;
            }

            let (start, end) = (found.start, found.end);
            let inner = found.inner.to_string();
            let formats = found.transformer.formats;

            let Split {
                before,
                mut matched,
                after,
            } = run.split(start, end);

            // Leftmost match: nothing before it can hold a delimiter pair.
            if let Some(before) = before {
                output.extend(extract_links(before));
            }

            matched.content = inner;
            matched.apply_formats(formats);

            if let Some(after) = after {
                stack.push((after, depth));
            }
            stack.push((matched, depth + 1));
        }

        output
    }
}
