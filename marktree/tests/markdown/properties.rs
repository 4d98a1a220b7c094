//! Property-based tests for the Markdown import
//!
//! Conversion must be total over arbitrary input, and the block and inline
//! rules must hold for every generated instance, not only hand-picked ones.

use marktree::{from_markdown, Block, TextFormat};
use proptest::prelude::*;

/// Text that contains no block prefix, delimiter or link syntax.
fn plain_text_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ,.]{0,30}"
}

/// Fragments of Markdown syntax, glued together into hostile lines.
fn fragment_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "**", "*", "***", "__", "_", "~~", "`", "```", "```js", "[", "]", "(", ")", "](",
        "# ", "> ", "- ", "1. ", "    ", " ", "\n", "---", "a", "word", "é", "日本",
    ])
}

proptest! {
    #[test]
    fn test_heading_level_and_text(level in 1usize..=6, text in plain_text_strategy()) {
        let doc = from_markdown(&format!("{} {}", "#".repeat(level), text));

        prop_assert_eq!(doc.children.len(), 1);
        match &doc.children[0] {
            Block::Heading(heading) => {
                prop_assert_eq!(heading.level as usize, level);
                prop_assert_eq!(doc.children[0].text_content(), text);
            }
            other => prop_assert!(false, "expected heading, got {:?}", other),
        }
    }

    #[test]
    fn test_list_indent_law(spaces in 0usize..24, ordered in any::<bool>(), text in "[a-z]{1,10}") {
        let marker = if ordered { "3." } else { "-" };
        let doc = from_markdown(&format!("{}{} {}", " ".repeat(spaces), marker, text));

        match &doc.children[0] {
            Block::List(list) => {
                prop_assert_eq!(list.ordered, ordered);
                prop_assert_eq!(list.items[0].indent, spaces / 4);
                prop_assert_eq!(list.items[0].text_content(), text);
            }
            other => prop_assert!(false, "expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_lines_are_kept_verbatim(lines in prop::collection::vec(plain_text_strategy(), 1..8)) {
        let md = lines.join("\n");
        let doc = from_markdown(&md);

        prop_assert_eq!(doc.children.len(), lines.len());
        prop_assert_eq!(doc.text_content(), md);
    }

    #[test]
    fn test_formatted_words_keep_their_characters(
        a in "[a-z]{1,8}",
        b in "[a-z]{1,8}",
        c in "[a-z]{1,8}",
        tag in prop::sample::select(vec!["**", "*", "__", "_", "~~", "`", "***"]),
    ) {
        let doc = from_markdown(&format!("{a} {tag}{b}{tag} {c}"));
        prop_assert_eq!(doc.text_content(), format!("{a} {b} {c}"));
    }

    #[test]
    fn test_repeated_bold_stays_bold(
        x in "[a-z]{1,8}",
        outer in prop::sample::select(vec!["**", "__"]),
        inner in prop::sample::select(vec!["**", "__"]),
    ) {
        prop_assume!(outer != inner);
        let doc = from_markdown(&format!("{outer}{inner}{x}{inner}{outer}"));
        let run = doc.children[0].inline_children().and_then(|c| c[0].as_text()).cloned();

        prop_assert!(run.is_some());
        if let Some(run) = run {
            prop_assert_eq!(&run.content, &x);
            prop_assert!(run.has_format(TextFormat::Bold));
            prop_assert!(!run.has_format(TextFormat::Italic));
        }
    }

    #[test]
    fn test_conversion_is_total(fragments in prop::collection::vec(fragment_strategy(), 0..60)) {
        let md = fragments.concat();
        let doc = from_markdown(&md);
        let line_count = md.split('\n').count();

        prop_assert!(!doc.children.is_empty());
        prop_assert!(doc.children.len() <= line_count);
    }
}
