//! Markdown format implementation
//!
//! The primary output: one Markdown document describing every declaration in
//! encounter order. See [serializer] for the document layout.

pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use kcdoc_parser::ConfigOption;

/// Markdown output format
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown document with one section per declaration"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, options: &[ConfigOption]) -> Result<String, FormatError> {
        Ok(serializer::serialize_to_markdown(options))
    }
}
