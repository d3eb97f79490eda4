//! Source loading utilities
//!
//! This module provides `SourceLoader` - a utility for loading Kconfig source
//! text from files or strings and running the scanner on it. This is used by
//! both production code and tests.
//!
//! Reading a file is the only fallible step of a parse: the scanner itself is
//! total over strings. Invalid UTF-8 input is reported as a decode error and
//! is fatal for the invocation; there is no partial parse of undecodable
//! bytes.

use crate::kconfig::ast::ConfigOption;
use crate::kconfig::scanning;
use std::fs;
use std::io;
use std::path::Path;

/// Error that can occur when loading source text
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading the file
    Io(String),
    /// The file's bytes are not valid UTF-8 text
    Decode(String),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::Io(msg) => write!(f, "IO error: {}", msg),
            LoaderError::Decode(msg) => write!(f, "decode error: {}", msg),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<io::Error> for LoaderError {
    fn from(err: io::Error) -> Self {
        // `read_to_string` reports undecodable bytes as InvalidData.
        if err.kind() == io::ErrorKind::InvalidData {
            LoaderError::Decode(err.to_string())
        } else {
            LoaderError::Io(err.to_string())
        }
    }
}

/// Loader for Kconfig source text.
///
/// # Example
///
/// ```rust
/// use kcdoc_parser::kconfig::loader::SourceLoader;
///
/// let options = SourceLoader::from_string("config FOO\n\tbool\n").parse();
/// assert_eq!(options.len(), 1);
/// ```
#[derive(Debug)]
pub struct SourceLoader {
    source: String,
}

impl SourceLoader {
    /// Load from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(SourceLoader { source })
    }

    /// Load from a string literal.
    pub fn from_string(source: impl Into<String>) -> Self {
        SourceLoader {
            source: source.into(),
        }
    }

    /// The raw source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Run the scanner over the loaded source.
    pub fn parse(&self) -> Vec<ConfigOption> {
        scanning::parse(&self.source)
    }
}
