use crate::Source;
use crate::SourceLocation;

/// An error produced while lexing or parsing a [`Source`].
///
/// The [`Display`](std::fmt::Display) form is the full diagnostic, with the
/// offending line (plus its neighbors) and a caret under the failing
/// column:
///
/// ```text
/// Syntax Error GraphQL (1:6) Unexpected Name "b"
///
/// 1: { a b }
///         ^
/// ```
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct SyntaxError {
    /// The error description without location or highlight,
    /// e.g. `Expected Name, found EOF`.
    description: String,

    /// The fully formatted message, including the highlighted source.
    message: String,

    /// Byte offset into the source body where the error was detected.
    position: usize,

    location: SourceLocation,

    source_name: String,
}

impl SyntaxError {
    pub fn new(source: &Source, position: usize, description: impl Into<String>) -> Self {
        let description = description.into();
        let location = source.location_at(position);
        let message = format!(
            "Syntax Error {} ({}:{}) {}\n\n{}",
            source.name(),
            location.line,
            location.column,
            description,
            highlight_source_at_location(source, location),
        );
        Self {
            description,
            message,
            position,
            location,
            source_name: source.name().to_string(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }
}

/// Renders the line containing `location` plus the lines immediately
/// before and after it, each prefixed by its (right-aligned) line number,
/// with a caret under the failing column.
fn highlight_source_at_location(source: &Source, location: SourceLocation) -> String {
    let line = location.line;
    let prev_line_num = (line - 1).to_string();
    let line_num = line.to_string();
    let next_line_num = (line + 1).to_string();
    let pad_len = next_line_num.len();
    let lines = source.lines();

    let mut highlight = String::new();
    if line >= 2 {
        highlight.push_str(&format!(
            "{prev_line_num:>pad_len$}: {}\n",
            lines.get(line - 2).unwrap_or(&""),
        ));
    }
    highlight.push_str(&format!(
        "{line_num:>pad_len$}: {}\n",
        lines.get(line - 1).unwrap_or(&""),
    ));
    highlight.push_str(&" ".repeat(1 + pad_len + location.column));
    highlight.push_str("^\n");
    if line < lines.len() {
        highlight.push_str(&format!(
            "{next_line_num:>pad_len$}: {}\n",
            lines[line],
        ));
    }
    highlight
}
