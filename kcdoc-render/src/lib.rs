//! Output formats for parsed Kconfig declarations
//!
//!     This crate turns the parser's declaration records into output
//!     documents. Formats are one-way here: the parser owns reading the
//!     dialect, this crate only serializes what it produced.
//!
//! Architecture
//!
//!     - Format trait: uniform serialization interface for all formats
//!     - FormatRegistry: centralized discovery and selection of formats
//!     - Format implementations: one module per concrete format
//!
//!     This is a pure lib: it powers the kcdoc CLI but is shell agnostic, so
//!     no code here prints, reads env vars or touches process state.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── markdown            # The Markdown document (primary output)
//!     │   └── json                # Raw records as pretty-printed JSON
//!     └── lib.rs
//!
//! Format Selection
//!
//!     Markdown is the primary output. The document layout is fixed byte for
//!     byte: a top-level heading, one block per declaration, horizontal
//!     rules between blocks. It is hand-written
//!     rather than driven through a Markdown AST library because the
//!     document's exact bytes are the contract, and option titles, help text
//!     and defaults pass through verbatim with no escaping of
//!     markup-significant characters (a known fidelity limitation, kept).
//!
//!     JSON exists for tooling: it is the serde view of the record sequence,
//!     so consumers that want the structured metadata skip re-parsing the
//!     rendered Markdown.

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use formats::{JsonFormat, MarkdownFormat};
pub use registry::FormatRegistry;

use kcdoc_parser::ConfigOption;

/// Serialize declarations to the Markdown document. Never fails.
pub fn render_markdown(options: &[ConfigOption]) -> String {
    formats::markdown::serializer::serialize_to_markdown(options)
}
