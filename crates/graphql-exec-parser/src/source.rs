use crate::SourceLocation;

/// The name given to a [`Source`] when the caller doesn't provide one.
pub const DEFAULT_SOURCE_NAME: &str = "GraphQL";

/// The text of a GraphQL request (or schema) along with a name used to
/// identify it in error messages.
///
/// Offsets handed to a `Source` are byte offsets into [`Source::body`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Source {
    body: String,
    name: String,
}

impl Source {
    pub fn new(body: impl Into<String>, name: Option<&str>) -> Self {
        Self {
            body: body.into(),
            name: name.unwrap_or(DEFAULT_SOURCE_NAME).to_string(),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the character starting at the given byte offset, if any.
    ///
    /// Offsets that don't land on a character boundary yield `None`.
    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.body.get(offset..)?.chars().next()
    }

    /// Maps a byte offset to a 1-based (line, column) pair.
    ///
    /// `\n`, `\r`, `\r\n`, U+2028 and U+2029 all terminate a line. Columns
    /// count characters rather than bytes. Offsets past the end of the body
    /// are clamped to the end.
    pub fn location_at(&self, offset: usize) -> SourceLocation {
        let mut line = 1;
        let mut column = 1;
        let mut last_char_was_cr = false;
        for (idx, ch) in self.body.char_indices() {
            if idx >= offset {
                break;
            }
            match ch {
                // Second half of a `\r\n` pair.
                '\n' if last_char_was_cr => {
                    last_char_was_cr = false;
                },
                '\n' | '\u{2028}' | '\u{2029}' => {
                    line += 1;
                    column = 1;
                    last_char_was_cr = false;
                },
                '\r' => {
                    line += 1;
                    column = 1;
                    last_char_was_cr = true;
                },
                _ => {
                    column += 1;
                    last_char_was_cr = false;
                },
            }
        }
        SourceLocation::new(line, column)
    }

    /// Splits the body into lines using the same terminators as
    /// [`Source::location_at`].
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = vec![];
        let mut line_start = 0;
        let mut chars = self.body.char_indices().peekable();
        while let Some((idx, ch)) = chars.next() {
            match ch {
                '\r' => {
                    lines.push(&self.body[line_start..idx]);
                    line_start = idx + 1;
                    if let Some((next_idx, '\n')) = chars.peek().copied() {
                        chars.next();
                        line_start = next_idx + 1;
                    }
                },
                '\n' | '\u{2028}' | '\u{2029}' => {
                    lines.push(&self.body[line_start..idx]);
                    line_start = idx + ch.len_utf8();
                },
                _ => (),
            }
        }
        lines.push(&self.body[line_start..]);
        lines
    }
}

impl std::convert::From<&str> for Source {
    fn from(body: &str) -> Self {
        Self::new(body, None)
    }
}

impl std::convert::From<String> for Source {
    fn from(body: String) -> Self {
        Self::new(body, None)
    }
}
