//! Format flags carried by text runs.

use serde::ser::{Serialize, Serializer};
use std::fmt;

/// A single inline format flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextFormat {
    Bold,
    Italic,
    Strikethrough,
    /// Terminal: runs carrying `Code` are never scanned again.
    Code,
}

impl TextFormat {
    pub const ALL: [TextFormat; 4] = [
        TextFormat::Bold,
        TextFormat::Italic,
        TextFormat::Strikethrough,
        TextFormat::Code,
    ];

    fn bit(self) -> u8 {
        match self {
            TextFormat::Bold => 1,
            TextFormat::Italic => 1 << 1,
            TextFormat::Strikethrough => 1 << 2,
            TextFormat::Code => 1 << 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TextFormat::Bold => "bold",
            TextFormat::Italic => "italic",
            TextFormat::Strikethrough => "strikethrough",
            TextFormat::Code => "code",
        }
    }
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TextFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Set of [`TextFormat`] flags.
///
/// Flags combine freely. Inserting a flag that is already present leaves the
/// set unchanged, so applying the same delimiter twice never clears a format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextFormats(u8);

impl TextFormats {
    pub const NONE: TextFormats = TextFormats(0);

    pub fn of(formats: &[TextFormat]) -> Self {
        let mut set = Self::NONE;
        for format in formats {
            set.insert(*format);
        }
        set
    }

    pub fn contains(self, format: TextFormat) -> bool {
        self.0 & format.bit() != 0
    }

    pub fn insert(&mut self, format: TextFormat) {
        self.0 |= format.bit();
    }

    /// Adds every flag of `other` to this set.
    pub fn apply(&mut self, other: TextFormats) {
        self.0 |= other.0;
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = TextFormat> {
        TextFormat::ALL
            .into_iter()
            .filter(move |format| self.contains(*format))
    }
}

impl fmt::Display for TextFormats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(TextFormat::name).collect();
        f.write_str(&names.join(","))
    }
}

impl Serialize for TextFormats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
