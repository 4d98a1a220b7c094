//! Markdown import tests
//!
//! One file per engine area, plus snapshot and property tests over whole documents.

mod blocks;
mod fenced;
mod import;
mod links;
mod properties;
