//! Layered configuration for logica applications.
//!
//! `defaults/logica.default.toml` is embedded into the binary so that docs and runtime
//! behavior stay in sync. Applications layer user files on top of those defaults via
//! [`Loader`] before deserializing into [`LogicaConfig`].

use crate::logic::dictionary::Dictionary;
use crate::logic::formats::FormulaFormat;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/logica.default.toml");

/// Top-level configuration consumed by logica applications.
#[derive(Debug, Clone, Deserialize)]
pub struct LogicaConfig {
    pub output: OutputConfig,
    pub dictionary: DictionaryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: FormulaFormat,
    pub dictionary_format: DictionaryFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DictionaryFormat {
    Json,
    Yaml,
}

/// The dictionary a session starts from (and resets to).
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryConfig {
    pub default: Vec<DictionaryEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryEntry {
    pub label: String,
    pub phrase: String,
}

impl From<&DictionaryConfig> for Dictionary {
    fn from(config: &DictionaryConfig) -> Self {
        config
            .default
            .iter()
            .map(|entry| (entry.label.clone(), entry.phrase.clone()))
            .collect()
    }
}

/// Layers `logica.toml`, `--config` files and command-line flags over the built-in defaults.
///
/// Later layers win: defaults, then files in the order they were added, then overrides.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder()
                .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file if it exists.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Override one key, e.g. `output.format` from `logica parse --format`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<LogicaConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
