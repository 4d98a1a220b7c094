//! Block transformer registry tests

use marktree::{from_markdown, Block, BlockKind, List};

fn kinds(md: &str) -> Vec<BlockKind> {
    from_markdown(md).children.iter().map(Block::kind).collect()
}

fn only_list(md: &str) -> List {
    let doc = from_markdown(md);
    assert_eq!(doc.children.len(), 1, "expected a single block for {md:?}");
    match &doc.children[0] {
        Block::List(list) => list.clone(),
        other => panic!("expected a list, got {other:?}"),
    }
}

#[test]
fn test_heading_levels() {
    for level in 1..=6u8 {
        let md = format!("{} Heading", "#".repeat(level as usize));
        match &from_markdown(&md).children[0] {
            Block::Heading(heading) => assert_eq!(heading.level, level),
            other => panic!("expected heading, got {other:?}"),
        }
    }
}

#[test]
fn test_prefix_needs_whitespace() {
    assert_eq!(kinds("#Title"), vec![BlockKind::Paragraph]);
    assert_eq!(kinds(">quote"), vec![BlockKind::Paragraph]);
    assert_eq!(kinds("-item"), vec![BlockKind::Paragraph]);
    assert_eq!(kinds("1.item"), vec![BlockKind::Paragraph]);
}

#[test]
fn test_quote_keeps_inline_formatting() {
    let doc = from_markdown("> *quiet* words");
    assert_eq!(doc.children[0].kind(), BlockKind::Quote);
    assert_eq!(doc.text_content(), "quiet words");
}

#[test]
fn test_unordered_items_merge() {
    let list = only_list("- a\n- b");
    assert!(!list.ordered);
    assert_eq!(list.start, None);
    let texts: Vec<_> = list.items.iter().map(|item| item.text_content()).collect();
    assert_eq!(texts, vec!["a", "b"]);
}

#[test]
fn test_all_unordered_markers_share_a_list() {
    let list = only_list("- a\n* b\n+ c");
    assert_eq!(list.items.len(), 3);
}

#[test]
fn test_ordered_items_merge_and_keep_first_start() {
    let list = only_list("1. a\n2. b");
    assert!(list.ordered);
    assert_eq!(list.start, Some(1));
    assert_eq!(list.items.len(), 2);

    let list = only_list("7. a\n1. b");
    assert_eq!(list.start, Some(7));
}

#[test]
fn test_switching_list_kind_starts_a_new_list() {
    assert_eq!(
        kinds("- a\n1. b\n- c"),
        vec![BlockKind::List, BlockKind::List, BlockKind::List]
    );
}

#[test]
fn test_blank_line_separates_lists() {
    assert_eq!(
        kinds("- a\n\n- b"),
        vec![BlockKind::List, BlockKind::Paragraph, BlockKind::List]
    );
}

#[test]
fn test_oversized_start_number() {
    let list = only_list("99999999999999999999999. big");
    assert!(list.ordered);
    assert_eq!(list.start, None);
    assert_eq!(list.items[0].text_content(), "big");
}

#[test]
fn test_horizontal_rules() {
    assert_eq!(
        kinds("---\n***\n___\n--- "),
        vec![BlockKind::HorizontalRule; 4]
    );
    assert_eq!(kinds("----"), vec![BlockKind::Paragraph]);
    assert_eq!(kinds("--- x"), vec![BlockKind::Paragraph]);
}

#[test]
fn test_single_line_code_block() {
    let doc = from_markdown("```py print('**hi**')");
    assert_eq!(
        doc.children,
        vec![Block::CodeBlock(marktree::CodeBlock {
            language: Some("py".to_string()),
            content: "print('**hi**')".to_string(),
        })]
    );
}

#[test]
fn test_priority_order() {
    // A heading whose text looks like a list item stays a heading.
    assert_eq!(kinds("# - item"), vec![BlockKind::Heading]);
    // A quote of a heading stays a quote.
    assert_eq!(kinds("> # title"), vec![BlockKind::Quote]);
}
