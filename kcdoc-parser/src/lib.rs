//! # kcdoc-parser
//!
//! A parser for the standalone Kconfig dialect.
//!
//! The dialect is line-oriented: a file is a sequence of `config <NAME>`
//! declaration blocks, each carrying an optional type line (which may embed a
//! quoted title), an optional default line, and an optional indented help
//! block introduced by a bare `help` marker. The parser runs a single forward
//! pass over the lines: every line is first classified into a tagged
//! [`LineClass`](kconfig::line_classification::LineClass), then folded into
//! the in-progress declaration by a [`Scanner`](kconfig::scanning::Scanner).
//!
//! The grammar is deliberately permissive. Unknown keywords, missing
//! attributes, and out-of-order lines never fail a parse; they simply leave
//! the corresponding fields absent. The only fatal condition is input that
//! cannot be decoded as UTF-8 text, surfaced by the
//! [loader](kconfig::loader) before scanning starts.

pub mod kconfig;

pub use kconfig::ast::{ConfigOption, ValueType};
pub use kconfig::loader::{LoaderError, SourceLoader};
pub use kconfig::scanning::{parse, Scanner};
