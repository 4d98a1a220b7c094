//! Shared configuration loader for the marktree toolchain.
//!
//! `defaults/marktree.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MarktreeConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use marktree::ImportOptions;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/marktree.default.toml");

/// Top-level configuration consumed by marktree applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MarktreeConfig {
    pub import: ImportConfig,
    pub convert: ConvertConfig,
}

/// Knobs of the Markdown import.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    pub max_inline_depth: usize,
}

impl From<&ImportConfig> for ImportOptions {
    fn from(config: &ImportConfig) -> Self {
        ImportOptions {
            max_inline_depth: config.max_inline_depth,
        }
    }
}

impl From<ImportConfig> for ImportOptions {
    fn from(config: ImportConfig) -> Self {
        ImportOptions::from(&config)
    }
}

/// Output selection and format-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub default_format: String,
    pub json: JsonConfig,
    pub tag: TagConfig,
    pub treeviz: TreevizConfig,
}

impl ConvertConfig {
    /// Serialization parameters for `format`, as understood by its
    /// `serialize_with_options`. Formats without knobs get an empty map.
    pub fn format_options(&self, format: &str) -> HashMap<String, String> {
        let mut options = HashMap::new();
        match format {
            "json" => {
                options.insert("pretty".to_string(), self.json.pretty.to_string());
            }
            "tag" => {
                options.insert("show-formats".to_string(), self.tag.show_formats.to_string());
            }
            "treeviz" => {
                options.insert(
                    "label-width".to_string(),
                    self.treeviz.label_width.to_string(),
                );
            }
            _ => {}
        }
        options
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfig {
    pub pretty: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagConfig {
    pub show_formats: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreevizConfig {
    pub label_width: usize,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MarktreeConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MarktreeConfig, ConfigError> {
    Loader::new().build()
}
