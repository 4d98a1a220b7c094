//! Markdown to document tree conversion
//!
//!     This crate turns Markdown source into a structured document tree of blocks (paragraphs,
//!     headings, quotes, code blocks, lists, horizontal rules) whose leaves are formatted text
//!     runs and links. The tree can then be rendered by any registered output format.
//!
//!     TLDR:
//!         - Conversion is total: any string produces a tree, malformed markup stays literal text.
//!         - Block and inline syntax are data: ordered transformer tables that can be swapped.
//!         - The tree is plain owned data, serializable with serde.
//!
//! Architecture
//!
//!     The import is line oriented. Each line is first offered to the fenced code scanner, then
//!     becomes a placeholder paragraph which the block registry may rewrite into another block
//!     (or merge into the previous list). The text of the resulting block goes through the
//!     inline engine, which unwraps delimiter pairs into format flags, and the link extractor,
//!     which cuts `[text](url)` spans into link nodes.
//!
//!     This is a pure lib: it powers the marktree cli but makes no assumption about a shell.
//!     It logs through `tracing` and never installs a subscriber.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── tree                    # Document tree and format flags
//!     ├── import
//!     │   ├── format_table.rs     # Delimiter → format table
//!     │   ├── inline.rs           # Inline transformer engine
//!     │   ├── links.rs            # Link extractor
//!     │   ├── blocks.rs           # Block transformer registry
//!     │   ├── fence.rs            # Fenced code scanner
//!     │   └── mod.rs              # Converter (document builder)
//!     ├── formats
//!     │   ├── <format>/mod.rs
//!     │   ├── icons.rs
//!     │   └── common              # Shared parameter parsing
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── markdown
//!         ├── <area>.rs
//!         └── mod.rs
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs mounts them.
//!
//! Formats
//!
//!     - markdown: import only
//!     - json: the tree as serde JSON
//!     - tag: XML-like tags, handy for snapshots
//!     - treeviz: box-drawing tree with icons
//!
pub mod error;
pub mod format;
pub mod formats;
pub mod import;
pub mod registry;
pub mod tree;

pub use error::FormatError;
pub use format::Format;
pub use import::blocks::{BlockTransformer, BlockTransformers};
pub use import::format_table::{TextTransformer, TextTransformers};
pub use import::{Converter, ImportOptions};
pub use registry::FormatRegistry;
pub use tree::{
    Block, BlockKind, CodeBlock, Cursor, Document, Heading, Inline, Link, List, ListItem,
    Paragraph, Quote, TextFormat, TextFormats, TextRun,
};

/// Converts `markdown` with the given transformer tables.
///
/// Tables are cloned into a one-off [`Converter`]; keep a `Converter` around
/// to convert many documents with the same tables.
pub fn convert(markdown: &str, blocks: &BlockTransformers, texts: &TextTransformers) -> Document {
    Converter::new(blocks.clone(), texts.clone()).convert(markdown)
}

/// Converts `markdown` with the default tables and options.
pub fn from_markdown(markdown: &str) -> Document {
    Converter::default().convert(markdown)
}
