//! Document tree produced by the Markdown import.
//!
//! The tree is a plain owned structure: a [`Document`] owns its [`Block`]s,
//! blocks own their [`Inline`] leaves. Every conversion builds it from scratch.

pub mod formats;
pub mod nodes;

pub use formats::{TextFormat, TextFormats};
pub use nodes::{
    inline_text, Block, BlockKind, CodeBlock, Cursor, Document, Heading, Inline, Link, List,
    ListItem, Paragraph, Quote, Split, TextRun,
};
