//! Markdown format
//!
//! Import only: Markdown source is turned into a document tree by the
//! line-oriented [`Converter`]. There is no Markdown export.
//!
//! | Markdown                  | Tree                                  |
//! |---------------------------|---------------------------------------|
//! | `# ` .. `###### `         | `Heading { level }`                   |
//! | `> `                      | `Quote`                               |
//! | `- `, `* `, `+ `          | unordered `List` item                 |
//! | `1. `                     | ordered `List` item                   |
//! | ```` ```lang ```` fence   | `CodeBlock { language, content }`     |
//! | `---`, `***`, `___`       | `HorizontalRule`                      |
//! | `**`, `*`, `~~`, `` ` ``  | text run format flags                 |
//! | `[text](url)`             | `Link`                                |

use crate::error::FormatError;
use crate::format::Format;
use crate::import::Converter;
use crate::tree::Document;

/// Format implementation for Markdown import
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormat {
    converter: Converter,
}

impl MarkdownFormat {
    /// Use a converter with custom tables or options.
    pub fn new(converter: Converter) -> Self {
        MarkdownFormat { converter }
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown source (import only)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(self.converter.convert(source))
    }
}
