//! Link extraction over leaf text runs.
//!
//! Runs `[text](url)` spans out of a text run and replaces them with
//! [`Link`] nodes. Link text keeps the formats of the run it was cut from.
//! Code runs are opaque and come back untouched.

use crate::tree::{Inline, Link, Split, TextFormat, TextRun};
use once_cell::sync::Lazy;
use regex::Regex;

static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[]+)\]\(([^(]+)\)").expect("link pattern is valid"));

struct LinkSpan {
    start: usize,
    end: usize,
    text: String,
    url: String,
}

fn find_link(text: &str) -> Option<LinkSpan> {
    let captures = LINK_PATTERN.captures(text)?;
    let whole = captures.get(0)?;
    Some(LinkSpan {
        start: whole.start(),
        end: whole.end(),
        text: captures.get(1)?.as_str().to_string(),
        url: captures.get(2)?.as_str().to_string(),
    })
}

/// Splits `run` around every link it contains, left to right.
///
/// Returns the run itself (as a single element) when there is no link.
pub fn extract_links(run: TextRun) -> Vec<Inline> {
    if run.has_format(TextFormat::Code) {
        return vec![Inline::Text(run)];
    }

    let mut output = Vec::new();
    let mut rest = Some(run);
    while let Some(run) = rest.take() {
        let Some(span) = find_link(&run.content) else {
            output.push(Inline::Text(run));
            break;
        };
        let Split {
            before,
            matched,
            after,
        } = run.split(span.start, span.end);
        if let Some(before) = before {
            output.push(Inline::Text(before));
        }
        let text = TextRun::formatted(span.text, matched.format);
        output.push(Inline::Link(Link::new(span.url, text)));
        rest = after;
    }
    output
}
