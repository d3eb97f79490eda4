//! Error types for format operations

/// Error that can occur when selecting or running a format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No format registered under the requested name
    FormatNotFound(String),
    /// The format exists but does not support the requested operation
    NotSupported(String),
    /// Serialization failed inside a format implementation
    SerializationError(String),
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "format not found: {}", name),
            FormatError::NotSupported(msg) => write!(f, "not supported: {}", msg),
            FormatError::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}
