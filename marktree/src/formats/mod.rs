//! Format implementations
//!
//! This module contains all format implementations. Markdown is the only
//! source format; the others render a converted document tree.

pub mod common;
pub mod icons;
pub mod json;
pub mod markdown;
pub mod tag;
pub mod treeviz;

pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
pub use tag::TagFormat;
pub use treeviz::TreevizFormat;
