//! Whole-document import tests, checked through the tag serialization.

use insta::assert_snapshot;
use marktree::formats::tag::{serialize_document, serialize_document_with_params};
use marktree::{from_markdown, Block, BlockKind, Converter, Document};

#[test]
fn test_kitchensink() {
    let md = "# Title\n\
              > quoted *text*\n\
              - one\n    - two [link](http://x)\n\
              1. first\n\
              ---\n\
              ```rs\nlet x = **1**;\n```\n\
              Plain ~~gone~~ `code **not bold**`";

    assert_snapshot!(serialize_document(&from_markdown(md)), @r###"
    <document>
      <heading level="1">
        <text>Title</text>
      </heading>
      <quote>
        <text>quoted </text>
        <text format="italic">text</text>
      </quote>
      <list ordered="false">
        <list-item indent="0">
          <text>one</text>
        </list-item>
        <list-item indent="1">
          <text>two </text>
          <link url="http://x"><text>link</text></link>
        </list-item>
      </list>
      <list ordered="true" start="1">
        <list-item indent="0">
          <text>first</text>
        </list-item>
      </list>
      <horizontal-rule/>
      <code-block language="rs">let x = **1**;</code-block>
      <paragraph>
        <text>Plain </text>
        <text format="strikethrough">gone</text>
        <text> </text>
        <text format="code">code **not bold**</text>
      </paragraph>
    </document>
    "###);
}

#[test]
fn test_nested_formats_without_format_attributes() {
    let doc = from_markdown("**bold _both_ bold**");

    assert_snapshot!(serialize_document_with_params(&doc, false), @r###"
    <document>
      <paragraph>
        <text>bold </text>
        <text>both</text>
        <text> bold</text>
      </paragraph>
    </document>
    "###);
}

#[test]
fn test_nested_formats() {
    let doc = from_markdown("**bold _both_ bold**");

    assert_snapshot!(serialize_document(&doc), @r###"
    <document>
      <paragraph>
        <text format="bold">bold </text>
        <text format="bold,italic">both</text>
        <text format="bold"> bold</text>
      </paragraph>
    </document>
    "###);
}

#[test]
fn test_blank_lines_are_empty_paragraphs() {
    let doc = from_markdown("first\n\nsecond\n");
    let kinds: Vec<_> = doc.children.iter().map(Block::kind).collect();
    assert_eq!(kinds, vec![BlockKind::Paragraph; 4]);
    assert_eq!(doc.text_content(), "first\n\nsecond\n");
}

#[test]
fn test_conversion_replaces_existing_content() {
    let converter = Converter::default();
    let mut doc: Document = from_markdown("# Old heading\n- old item");

    converter.convert_into(&mut doc, "> fresh");

    assert_eq!(doc.children.len(), 1);
    assert_eq!(doc.children[0].kind(), BlockKind::Quote);
    assert_eq!(doc.text_content(), "fresh");
}

#[test]
fn test_cursor_ends_after_last_character() {
    let doc = from_markdown("# Title\n- **item**");
    let cursor = doc.select_end();
    assert_eq!(cursor.path, vec![1, 0, 0]);
    assert_eq!(cursor.offset, 4);
}

#[test]
fn test_convert_with_custom_tables() {
    use marktree::{convert, BlockTransformers, TextFormat, TextTransformer, TextTransformers};

    let texts = TextTransformers::new(vec![TextTransformer::new("==", &[TextFormat::Bold])])
        .expect("valid table");
    let doc = convert("# **a** ==b==", &BlockTransformers::default(), &texts);

    let Block::Heading(heading) = &doc.children[0] else {
        panic!("expected heading");
    };
    let runs: Vec<_> = heading
        .children
        .iter()
        .filter_map(|inline| inline.as_text())
        .map(|run| (run.content.as_str(), run.format.to_string()))
        .collect();
    assert_eq!(runs, vec![("**a** ", String::new()), ("b", "bold".to_string())]);
}

#[test]
fn test_no_block_transformers_keeps_paragraphs() {
    use marktree::{convert, BlockTransformers, TextTransformers};

    let doc = convert(
        "# not a heading\n- not a list",
        &BlockTransformers::new(Vec::new()),
        &TextTransformers::default(),
    );
    assert!(doc.children.iter().all(|b| b.kind() == BlockKind::Paragraph));
    assert_eq!(doc.text_content(), "# not a heading\n- not a list");
}
