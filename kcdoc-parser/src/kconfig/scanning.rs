//! Scanning
//!
//!     The scanner folds classified lines into sealed declarations. It is a
//!     stateful, single-pass machine with three pieces of state: the
//!     declaration currently being built, the accumulated help lines, and a
//!     flag recording whether the scan position is inside a help block.
//!
//!     A declaration is sealed the moment the next header line is seen, or at
//!     end of input. Sealing joins the accumulated help lines, trims leading
//!     and trailing blank lines from the joined block, and collapses an empty
//!     result to absent help.
//!
//!     The machine is permissive by construction. Lines that match nothing
//!     are dropped; attribute lines outside any declaration are dropped;
//!     malformed attributes leave fields absent. [Scanner::push_line] is the
//!     per-line step, exposed so the state transitions can be tested
//!     line-by-line; [parse] drives it over a whole source text.

use crate::kconfig::ast::ConfigOption;
use crate::kconfig::line_classification::{classify_line, LineClass};

/// Stateful single-pass scanner over classified source lines.
#[derive(Debug, Default)]
pub struct Scanner {
    current: Option<ConfigOption>,
    help_lines: Vec<String>,
    inside_help: bool,
}

impl Scanner {
    pub fn new() -> Self {
        Scanner::default()
    }

    /// Process one raw source line (terminator already stripped).
    ///
    /// Returns the previously in-progress declaration when this line starts a
    /// new one, `None` otherwise.
    pub fn push_line(&mut self, raw: &str) -> Option<ConfigOption> {
        match classify_line(raw) {
            LineClass::Header { name } => {
                let sealed = self.seal_current();
                self.current = Some(ConfigOption::new(name));
                sealed
            }
            // Everything below is ignored until the first header is seen;
            // preamble text and comments are discarded.
            LineClass::TypeDecl { value_type, title } => {
                if let Some(option) = self.current.as_mut() {
                    option.value_type = Some(value_type);
                    // A bare type line keeps whatever title an earlier type
                    // line may have set.
                    if title.is_some() {
                        option.title = title;
                    }
                }
                None
            }
            LineClass::DefaultDecl { value } => {
                if let Some(option) = self.current.as_mut() {
                    // Last write wins when a block carries several defaults.
                    option.default = Some(value);
                }
                None
            }
            LineClass::HelpMarker => {
                if self.current.is_some() {
                    self.inside_help = true;
                }
                None
            }
            LineClass::Indented { text } => {
                if self.current.is_some() && self.inside_help {
                    self.help_lines.push(text);
                }
                None
            }
            LineClass::Other => {
                // A flush-left line terminates a help block and is dropped;
                // it already failed every keyword test above.
                self.inside_help = false;
                None
            }
        }
    }

    /// Seal any in-progress declaration at end of input.
    pub fn finish(mut self) -> Option<ConfigOption> {
        self.seal_current()
    }

    fn seal_current(&mut self) -> Option<ConfigOption> {
        self.inside_help = false;
        let joined = self.help_lines.join("\n");
        self.help_lines.clear();
        let mut option = self.current.take()?;
        let help = joined.trim();
        option.help = (!help.is_empty()).then(|| help.to_string());
        Some(option)
    }
}

/// Parse a full source text into its declarations, in encounter order.
///
/// Infallible over any string input: grammar violations never error, they
/// only leave fields absent.
pub fn parse(source: &str) -> Vec<ConfigOption> {
    let mut scanner = Scanner::new();
    let mut options = Vec::new();
    for line in source.lines() {
        if let Some(sealed) = scanner.push_line(line) {
            options.push(sealed);
        }
    }
    if let Some(last) = scanner.finish() {
        options.push(last);
    }
    options
}
