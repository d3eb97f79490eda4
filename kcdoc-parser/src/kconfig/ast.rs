//! Record types for parsed Kconfig declarations
//!
//!     A parse produces a flat, ordered sequence of [ConfigOption] records, one
//!     per `config` declaration block in the source. There is no nesting in this
//!     dialect; the record sequence preserves encounter order, including
//!     duplicate names (later declarations never overwrite earlier ones).
//!
//!     Every field other than the name is optional, and absence is represented
//!     with a real `Option` rather than an empty-string sentinel. The renderer
//!     emits a different representation for "no type given" than it would for
//!     any actual type keyword, so the distinction has to survive the parse.
//!     Help text is the one exception where an empty accumulation collapses to
//!     absent: a `help` marker immediately followed by another declaration
//!     documents nothing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of value-type keywords recognized on attribute lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Bool,
    Int,
    Hex,
    String,
    Tristate,
}

impl ValueType {
    /// Look up a type keyword. Anything outside the closed set is not a type
    /// line and the caller falls through to the next classification.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "bool" => Some(ValueType::Bool),
            "int" => Some(ValueType::Int),
            "hex" => Some(ValueType::Hex),
            "string" => Some(ValueType::String),
            "tristate" => Some(ValueType::Tristate),
            _ => None,
        }
    }

    /// The source keyword for this type, as it appears in declarations and in
    /// rendered output.
    pub fn keyword(&self) -> &'static str {
        match self {
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Hex => "hex",
            ValueType::String => "string",
            ValueType::Tristate => "tristate",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One parsed `config` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigOption {
    /// Identifier from the declaration header. Never empty.
    pub name: String,

    /// Declared value type, if a type line was seen.
    pub value_type: Option<ValueType>,

    /// Human-readable label from the type line, quoting stripped.
    pub title: Option<String>,

    /// Default-value expression, stored as raw trimmed text. Not evaluated or
    /// checked against the declared type. `Some("")` (a bare `default` marker)
    /// is distinct from `None`.
    pub default: Option<String>,

    /// Joined help block. Never `Some("")`; empty help collapses to `None`
    /// when the declaration is sealed.
    pub help: Option<String>,
}

impl ConfigOption {
    /// Start a declaration with only its name; attribute lines fill in the
    /// rest while the block is scanned.
    pub fn new(name: impl Into<String>) -> Self {
        ConfigOption {
            name: name.into(),
            value_type: None,
            title: None,
            default: None,
            help: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_round_trip() {
        for keyword in ["bool", "int", "hex", "string", "tristate"] {
            let value_type = ValueType::from_keyword(keyword).unwrap();
            assert_eq!(value_type.keyword(), keyword);
        }
    }

    #[test]
    fn unknown_keyword_is_not_a_type() {
        assert_eq!(ValueType::from_keyword("boolean"), None);
        assert_eq!(ValueType::from_keyword("menuconfig"), None);
        assert_eq!(ValueType::from_keyword(""), None);
    }

    #[test]
    fn new_option_has_only_a_name() {
        let option = ConfigOption::new("FOO");
        assert_eq!(option.name, "FOO");
        assert_eq!(option.value_type, None);
        assert_eq!(option.title, None);
        assert_eq!(option.default, None);
        assert_eq!(option.help, None);
    }

    #[test]
    fn serde_uses_lowercase_type_keywords() {
        let mut option = ConfigOption::new("FOO");
        option.value_type = Some(ValueType::Tristate);
        let json = serde_json::to_string(&option).unwrap();
        assert!(json.contains("\"tristate\""));
        let back: ConfigOption = serde_json::from_str(&json).unwrap();
        assert_eq!(back, option);
    }
}
