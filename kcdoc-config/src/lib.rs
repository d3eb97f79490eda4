//! Shared configuration loader for the kcdoc toolchain.
//!
//! `defaults/kcdoc.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`KcdocConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/kcdoc.default.toml");

/// Top-level configuration consumed by kcdoc applications.
#[derive(Debug, Clone, Deserialize)]
pub struct KcdocConfig {
    pub output: OutputConfig,
}

/// Where and how the generated document is written.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Destination path for the generated document.
    pub path: String,
    /// Output format name, resolved against the format registry.
    pub format: String,
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
    pub fn build(self) -> Result<KcdocConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_defaults_deserialize() {
        let config = Loader::new().build().unwrap();
        assert_eq!(config.output.path, "docs/KCONFIG.md");
        assert_eq!(config.output.format, "markdown");
    }

    #[test]
    fn overrides_replace_defaults() {
        let config = Loader::new()
            .set_override("output.format", "json")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.output.format, "json");
        assert_eq!(config.output.path, "docs/KCONFIG.md");
    }

    #[test]
    fn user_file_layers_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\npath = \"out/options.md\"").unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(config.output.path, "out/options.md");
        assert_eq!(config.output.format, "markdown");
    }

    #[test]
    fn absent_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/kcdoc.toml")
            .build()
            .unwrap();
        assert_eq!(config.output.format, "markdown");
    }
}
