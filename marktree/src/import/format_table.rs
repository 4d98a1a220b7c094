//! Delimiter tag → format flag table.
//!
//! The table is ordered: earlier entries win when two tags could start at the
//! same position, which is why longer tags precede their prefixes. The whole
//! table is compiled into one regex with a capture group per entry, built once
//! when the table is created and reused for every conversion.

use crate::error::FormatError;
use crate::tree::{TextFormat, TextFormats};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Inner span of a delimiter pair: must start and end with non-whitespace.
/// Both quantifiers are lazy so the nearest closing tag ends the span.
const INNER: &str = r"(\S(?:.*?\S)??)";

/// One `(tag, formats)` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TextTransformer {
    pub tag: String,
    pub formats: TextFormats,
}

impl TextTransformer {
    pub fn new(tag: impl Into<String>, formats: &[TextFormat]) -> Self {
        TextTransformer {
            tag: tag.into(),
            formats: TextFormats::of(formats),
        }
    }
}

/// A delimiter pair located by [`TextTransformers::find`].
#[derive(Debug, Clone, PartialEq)]
pub struct DelimiterMatch<'t> {
    /// Byte range of the whole match, delimiters included.
    pub start: usize,
    pub end: usize,
    /// Text between the delimiters.
    pub inner: &'t str,
    pub transformer: &'t TextTransformer,
}

/// Ordered, compiled text transformer table.
#[derive(Debug, Clone)]
pub struct TextTransformers {
    entries: Vec<TextTransformer>,
    /// `None` for an empty table, which matches nothing.
    pattern: Option<Regex>,
}

static DEFAULT_TEXT_TRANSFORMERS: Lazy<TextTransformers> = Lazy::new(|| {
    use TextFormat::*;
    TextTransformers::new(vec![
        TextTransformer::new("`", &[Code]),
        TextTransformer::new("***", &[Bold, Italic]),
        TextTransformer::new("___", &[Bold, Italic]),
        TextTransformer::new("**", &[Bold]),
        TextTransformer::new("__", &[Bold]),
        TextTransformer::new("~~", &[Strikethrough]),
        TextTransformer::new("*", &[Italic]),
        TextTransformer::new("_", &[Italic]),
    ])
    .unwrap_or_else(|err| panic!("built-in text transformers must compile: {err}"))
});

impl TextTransformers {
    /// Compiles a table. Tags must be non-empty.
    pub fn new(entries: Vec<TextTransformer>) -> Result<Self, FormatError> {
        if entries.is_empty() {
            return Ok(TextTransformers {
                entries,
                pattern: None,
            });
        }
        let mut branches = Vec::with_capacity(entries.len());
        for entry in &entries {
            if entry.tag.is_empty() {
                return Err(FormatError::InvalidTransformer(
                    "text transformer tag must not be empty".to_string(),
                ));
            }
            let tag = regex::escape(&entry.tag);
            branches.push(format!("{tag}{INNER}{tag}"));
        }
        let pattern = Regex::new(&branches.join("|"))
            .map_err(|e| FormatError::InvalidTransformer(e.to_string()))?;
        Ok(TextTransformers {
            entries,
            pattern: Some(pattern),
        })
    }

    pub fn entries(&self) -> &[TextTransformer] {
        &self.entries
    }

    /// Leftmost delimiter pair in `text`.
    pub fn find<'t>(&'t self, text: &'t str) -> Option<DelimiterMatch<'t>> {
        let captures = self.pattern.as_ref()?.captures(text)?;
        let whole = captures.get(0)?;
        let (index, inner) = matched_branch(&captures)?;
        Some(DelimiterMatch {
            start: whole.start(),
            end: whole.end(),
            inner,
            transformer: &self.entries[index],
        })
    }
}

fn matched_branch<'t>(captures: &Captures<'t>) -> Option<(usize, &'t str)> {
    captures
        .iter()
        .skip(1)
        .enumerate()
        .find_map(|(index, group)| group.map(|m| (index, m.as_str())))
}

impl Default for TextTransformers {
    fn default() -> Self {
        DEFAULT_TEXT_TRANSFORMERS.clone()
    }
}
