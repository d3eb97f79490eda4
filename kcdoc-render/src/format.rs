//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations
//! must implement. The trait provides a uniform interface for serializing a
//! declaration sequence into an output document.

use crate::error::FormatError;
use kcdoc_parser::ConfigOption;

/// Trait for output formats
///
/// Implementors convert a sequence of parsed declarations into a string
/// document. Formats are serialization-only; parsing the Kconfig dialect is
/// the parser crate's job.
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Whether this format supports serialization
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Serialize declarations into an output document
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support serialization should override this method.
    fn serialize(&self, _options: &[ConfigOption]) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
