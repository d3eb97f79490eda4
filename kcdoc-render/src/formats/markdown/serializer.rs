//! Markdown serialization (declaration records → Markdown document)
//!
//! Document layout, fixed:
//!
//! ```text
//! # Kconfig Options
//!
//! ## `NAME`
//!
//! <title, when present>
//!
//! <help text, when present>
//!
//! - **Type**: `bool`            (or `unspecified` when no type was declared)
//! - **Default**: `y`            (omitted when no default was recorded)
//!
//! ---
//!
//! ```
//!
//! Title, help and default pass through verbatim. Markup-significant
//! characters inside them are not escaped.

use kcdoc_parser::ConfigOption;

/// Serialize declarations to a Markdown document. Pure and infallible; the
/// same input always produces byte-identical output.
pub fn serialize_to_markdown(options: &[ConfigOption]) -> String {
    let mut out = String::from("# Kconfig Options\n\n");

    for option in options {
        out.push_str(&format!("## `{}`\n\n", option.name));

        if let Some(title) = &option.title {
            out.push_str(title);
            out.push_str("\n\n");
        }

        if let Some(help) = &option.help {
            if !help.is_empty() {
                out.push_str(help);
                out.push_str("\n\n");
            }
        }

        let type_keyword = option
            .value_type
            .map(|t| t.keyword())
            .unwrap_or("unspecified");
        out.push_str(&format!("- **Type**: `{}`\n", type_keyword));

        if let Some(default) = &option.default {
            out.push_str(&format!("- **Default**: `{}`\n", default));
        }

        out.push_str("\n---\n\n");
    }

    out
}
