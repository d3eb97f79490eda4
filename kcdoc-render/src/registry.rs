//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::{JsonFormat, MarkdownFormat};
use kcdoc_parser::ConfigOption;
use std::collections::HashMap;

/// Registry of output formats
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Create a registry with the default formats registered
    pub fn with_defaults() -> Self {
        let mut registry = FormatRegistry::new();
        registry.register(MarkdownFormat);
        registry.register(JsonFormat);
        registry
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Serialize declarations using the specified format
    pub fn serialize(
        &self,
        options: &[ConfigOption],
        format: &str,
    ) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support serialization",
                format
            )));
        }
        fmt.serialize(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_include_markdown_and_json() {
        let registry = FormatRegistry::with_defaults();
        assert!(registry.has("markdown"));
        assert!(registry.has("json"));
        assert_eq!(registry.list_formats(), ["json", "markdown"]);
    }

    #[test]
    fn unknown_format_is_reported() {
        let registry = FormatRegistry::with_defaults();
        let err = registry.serialize(&[], "latex").unwrap_err();
        assert_eq!(err, FormatError::FormatNotFound("latex".to_string()));
    }
}
