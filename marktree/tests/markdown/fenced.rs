//! Fenced code scanner tests

use marktree::{
    from_markdown, Block, BlockKind, CodeBlock, Inline, TextFormat, TextFormats, TextRun,
};

fn code(language: Option<&str>, content: &str) -> Block {
    Block::CodeBlock(CodeBlock {
        language: language.map(str::to_string),
        content: content.to_string(),
    })
}

#[test]
fn test_fenced_block_with_language() {
    let doc = from_markdown("```js\ncode\n```");
    assert_eq!(doc.children, vec![code(Some("js"), "code")]);
}

#[test]
fn test_fenced_content_is_verbatim() {
    let doc = from_markdown("```\n# not heading\n**not bold** [no](link)\n- no list\n```");
    assert_eq!(
        doc.children,
        vec![code(None, "# not heading\n**not bold** [no](link)\n- no list")]
    );
}

#[test]
fn test_closing_fence_ignores_language() {
    let doc = from_markdown("```rust\nfn main() {}\n```text\nafter");
    assert_eq!(doc.children[0], code(Some("rust"), "fn main() {}"));
    assert_eq!(doc.children[1].text_content(), "after");
}

#[test]
fn test_empty_fenced_block() {
    let doc = from_markdown("```\n```");
    assert_eq!(doc.children, vec![code(None, "")]);
}

#[test]
fn test_fence_tolerates_trailing_space() {
    let doc = from_markdown("```py \nx\n``` ");
    assert_eq!(doc.children, vec![code(Some("py"), "x")]);
}

#[test]
fn test_unterminated_fence_is_text() {
    let doc = from_markdown("```js\nhello");
    let kinds: Vec<_> = doc.children.iter().map(Block::kind).collect();
    assert_eq!(kinds, vec![BlockKind::Paragraph, BlockKind::Paragraph]);
    assert_eq!(
        doc.children[0].inline_children().cloned(),
        Some(vec![
            Inline::Text(TextRun::formatted("`", TextFormats::of(&[TextFormat::Code]))),
            Inline::Text(TextRun::plain("js")),
        ])
    );
    assert_eq!(doc.children[1].text_content(), "hello");
}

#[test]
fn test_text_around_fenced_block() {
    let doc = from_markdown("before\n```\nx\n```\nafter");
    let kinds: Vec<_> = doc.children.iter().map(Block::kind).collect();
    assert_eq!(
        kinds,
        vec![BlockKind::Paragraph, BlockKind::CodeBlock, BlockKind::Paragraph]
    );
}

#[test]
fn test_consecutive_fenced_blocks() {
    let doc = from_markdown("```a\n1\n```\n```b\n2\n```");
    assert_eq!(
        doc.children,
        vec![code(Some("a"), "1"), code(Some("b"), "2")]
    );
}

#[test]
fn test_language_longer_than_ten_is_not_a_fence() {
    let doc = from_markdown("```abcdefghijk\nx\n```");
    let kinds: Vec<_> = doc.children.iter().map(Block::kind).collect();
    assert_eq!(kinds, vec![BlockKind::Paragraph; 3]);
    assert_eq!(doc.children[1].text_content(), "x");
}
