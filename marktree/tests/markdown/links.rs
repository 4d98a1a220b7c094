//! Link extractor tests, through full conversions.

use marktree::{from_markdown, Inline, Link, TextFormat, TextFormats, TextRun};

fn inlines(md: &str) -> Vec<Inline> {
    from_markdown(md).children[0]
        .inline_children()
        .cloned()
        .unwrap_or_default()
}

#[test]
fn test_single_link() {
    assert_eq!(
        inlines("[label](http://x)"),
        vec![Inline::Link(Link::new("http://x", TextRun::plain("label")))]
    );
}

#[test]
fn test_several_links_on_a_line() {
    let output = inlines("[a](1), [b](2) and [c](3).");
    let urls: Vec<_> = output
        .iter()
        .filter_map(Inline::as_link)
        .map(|link| link.url.as_str())
        .collect();
    assert_eq!(urls, vec!["1", "2", "3"]);
    assert_eq!(output.last(), Some(&Inline::Text(TextRun::plain("."))));
}

#[test]
fn test_link_text_inherits_formats() {
    let output = inlines("**[bold link](u)**");
    assert_eq!(
        output,
        vec![Inline::Link(Link::new(
            "u",
            TextRun::formatted("bold link", TextFormats::of(&[TextFormat::Bold]))
        ))]
    );
}

#[test]
fn test_link_before_formatted_text() {
    let output = inlines("[x](y) then *z*");
    assert_eq!(output.len(), 3);
    assert!(output[0].as_link().is_some());
    assert_eq!(output[1], Inline::Text(TextRun::plain(" then ")));
}

#[test]
fn test_link_in_list_item_and_heading() {
    let doc = from_markdown("- [a](b)\n# see [c](d)");
    let marktree::Block::List(list) = &doc.children[0] else {
        panic!("expected list");
    };
    assert!(list.items[0].children[0].as_link().is_some());
    assert!(doc.children[1].inline_children().is_some_and(|c| c[1].as_link().is_some()));
}

#[test]
fn test_incomplete_links_are_text() {
    assert_eq!(
        inlines("[a](b"),
        vec![Inline::Text(TextRun::plain("[a](b"))]
    );
    assert_eq!(
        inlines("[a] (b)"),
        vec![Inline::Text(TextRun::plain("[a] (b)"))]
    );
}

#[test]
fn test_code_span_hides_link() {
    let output = inlines("`[a](b)`");
    assert_eq!(
        output,
        vec![Inline::Text(TextRun::formatted(
            "[a](b)",
            TextFormats::of(&[TextFormat::Code])
        ))]
    );
}
