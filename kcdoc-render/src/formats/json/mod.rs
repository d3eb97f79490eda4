//! JSON format implementation
//!
//! Pretty-printed serde view of the record sequence, for tooling that wants
//! the structured metadata instead of the rendered document.

use crate::error::FormatError;
use crate::format::Format;
use kcdoc_parser::ConfigOption;

/// JSON output format
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Parsed declaration records as pretty-printed JSON"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, options: &[ConfigOption]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(options).map_err(|e| {
            FormatError::SerializationError(format!("JSON serialization failed: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kcdoc_parser::parse;

    #[test]
    fn json_round_trips_through_serde() {
        let options = parse("config FOO\n\tbool \"Enable Foo\"\n\tdefault y\n");
        let json = JsonFormat.serialize(&options).unwrap();
        let back: Vec<ConfigOption> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
