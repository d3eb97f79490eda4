//! Line Classification
//!
//! Core classification logic for determining line types in the Kconfig
//! dialect. Every source line gets exactly one tag, tested in a fixed
//! precedence order:
//!
//!     1. Header       `config <NAME>`
//!     2. TypeDecl     `bool|int|hex|string|tristate ["<title>"]`
//!     3. DefaultDecl  `default <expr>` (or a bare `default`)
//!     4. HelpMarker   a line that is exactly `help`
//!     5. Indented     any raw line starting with a whitespace character
//!     6. Other        everything else
//!
//! The order matters: an indented `default 5` line inside a help block is a
//! default line, not help text, because DefaultDecl is tested before
//! Indented. Keywords are recognized on the trimmed line; only the Indented
//! test looks at the raw line, since leading whitespace is what separates
//! help-block content from flush-left lines.

use crate::kconfig::ast::ValueType;
use once_cell::sync::Lazy;
use regex::Regex;

/// The classification of a single source line.
///
/// Variants carry the data extracted during classification so the scanner
/// never has to re-tokenize the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// `config <NAME>` declaration header. The name is the trimmed remainder
    /// after the `config` token; a bare `config` with no name is not a
    /// header.
    Header { name: String },

    /// Value-type attribute line, with the optional title text that may
    /// follow the keyword (surrounding double quotes stripped).
    TypeDecl {
        value_type: ValueType,
        title: Option<String>,
    },

    /// `default` attribute line. A bare `default` marker yields an empty
    /// value, which is still a recorded default.
    DefaultDecl { value: String },

    /// A line that is exactly the `help` keyword, introducing a help block.
    HelpMarker,

    /// A raw line starting with whitespace (space or tab). Carries the
    /// trimmed text; only meaningful while inside a help block.
    Indented { text: String },

    /// Anything else, including blank lines and unrecognized keywords.
    Other,
}

static HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^config\s+(\S.*)$").expect("header pattern is valid"));

static DEFAULT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^default(?:\s+(.*))?$").expect("default pattern is valid"));

/// Determine the class of one raw source line (terminator already stripped).
pub fn classify_line(raw: &str) -> LineClass {
    let trimmed = raw.trim();

    if let Some(caps) = HEADER_RE.captures(trimmed) {
        return LineClass::Header {
            name: caps[1].trim().to_string(),
        };
    }

    let (first, rest) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    if let Some(value_type) = ValueType::from_keyword(first) {
        let title = rest.trim().trim_matches('"');
        return LineClass::TypeDecl {
            value_type,
            title: (!title.is_empty()).then(|| title.to_string()),
        };
    }

    if let Some(caps) = DEFAULT_RE.captures(trimmed) {
        let value = caps.get(1).map_or("", |m| m.as_str()).trim();
        return LineClass::DefaultDecl {
            value: value.to_string(),
        };
    }

    if trimmed == "help" {
        return LineClass::HelpMarker;
    }

    if raw.starts_with(|c: char| c.is_whitespace()) {
        return LineClass::Indented {
            text: trimmed.to_string(),
        };
    }

    LineClass::Other
}
