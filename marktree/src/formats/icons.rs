//! Icon mapping for the treeviz format

/// Get the Unicode icon for a given tree node type
///
/// Unknown node types fall back to `○`.
pub fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Heading" => "§",
        "Paragraph" => "¶",
        "Quote" => "\"",
        "CodeBlock" => "𝒱",
        "List" => "☰",
        "ListItem" => "•",
        "HorizontalRule" => "⎯",
        "Text" => "◦",
        "Link" => "⊕",
        _ => "○",
    }
}
