//! Registry level tests: Markdown in, every output format out.

use insta::assert_snapshot;
use marktree::{FormatError, FormatRegistry};
use std::collections::HashMap;

fn options(key: &str, value: &str) -> HashMap<String, String> {
    HashMap::from([(key.to_string(), value.to_string())])
}

#[test]
fn test_markdown_to_treeviz() {
    let registry = FormatRegistry::default();
    let doc = registry
        .parse("## Setup\n1. install\n2. run `make`\n> done", "markdown")
        .unwrap();

    assert_snapshot!(registry.serialize(&doc, "treeviz").unwrap(), @r###"
    ⧉ Document (3 blocks)
    ├─ § h2 Setup
    │ └─ ◦ "Setup"
    ├─ ☰ 2 items, ordered from 1
    │ ├─ • install
    │ │ └─ ◦ "install"
    │ └─ • run make
    │   ├─ ◦ "run "
    │   └─ ◦ "make" [code]
    └─ " done
      └─ ◦ "done"
    "###);
}

#[test]
fn test_markdown_to_json() {
    let registry = FormatRegistry::default();
    let doc = registry.parse("[a](b)", "markdown").unwrap();
    let json = registry
        .serialize_with_options(&doc, "json", &options("pretty", "false"))
        .unwrap();

    assert_eq!(
        json,
        r#"{"children":[{"type":"paragraph","children":[{"type":"link","url":"b","children":[{"content":"a"}]}]}]}"#
    );
}

#[test]
fn test_tag_without_formats() {
    let registry = FormatRegistry::default();
    let doc = registry.parse("**a**", "markdown").unwrap();
    let output = registry
        .serialize_with_options(&doc, "tag", &options("show-formats", "false"))
        .unwrap();
    assert!(output.contains("<text>a</text>"));
}

#[test]
fn test_treeviz_label_width() {
    let registry = FormatRegistry::default();
    let doc = registry.parse("abcdefghij", "markdown").unwrap();
    let output = registry
        .serialize_with_options(&doc, "treeviz", &options("label-width", "5"))
        .unwrap();
    assert!(output.contains("└─ ¶ abcd…\n"));
    assert!(output.contains("└─ ◦ \"abcd…\"\n"));
}

#[test]
fn test_unknown_format() {
    let registry = FormatRegistry::default();
    let err = registry.parse("x", "rst").unwrap_err();
    assert!(matches!(err, FormatError::FormatNotFound(ref name) if name == "rst"));
    assert_eq!(err.to_string(), "Format 'rst' not found");
}

#[test]
fn test_invalid_option_value() {
    let registry = FormatRegistry::default();
    let doc = registry.parse("x", "markdown").unwrap();
    let result = registry.serialize_with_options(&doc, "treeviz", &options("label-width", "wide"));
    assert!(matches!(result, Err(FormatError::SerializationError(_))));
}
