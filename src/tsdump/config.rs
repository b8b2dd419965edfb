//! Configuration loading
//!
//! `defaults/tsdump.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Callers layer user files and CLI overrides on
//! top of those defaults via [`Loader`] before deserializing into
//! [`TsdumpConfig`].

use crate::tsdump::building::{ConvertOptions, LinePolicy};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/tsdump.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct TsdumpConfig {
    pub decoding: DecodingConfig,
    pub output: OutputConfig,
}

/// How dump lines are read
#[derive(Debug, Clone, Deserialize)]
pub struct DecodingConfig {
    pub indent_width: usize,
    pub line_policy: LinePolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

impl From<&DecodingConfig> for ConvertOptions {
    fn from(config: &DecodingConfig) -> Self {
        ConvertOptions {
            indent_width: config.indent_width,
            line_policy: config.line_policy,
        }
    }
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
    pub fn build(self) -> Result<TsdumpConfig, ConfigError> {
        let config: TsdumpConfig = self.builder.build()?.try_deserialize()?;
        if config.decoding.indent_width == 0 {
            return Err(ConfigError::Message(
                "decoding.indent_width must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TsdumpConfig, ConfigError> {
    Loader::new().build()
}
