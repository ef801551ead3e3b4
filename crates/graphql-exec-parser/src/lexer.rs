//! Converts a [`Source`] into a stream of [`GraphQLToken`]s.
//!
//! The lexer is pull-based: the parser asks for one token at a time via
//! [`Lexer::next_token`]. Insignificant characters (whitespace, commas, line
//! terminators, BOMs) and `#` comments are skipped between tokens.

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::Source;
use crate::SyntaxError;

/// Pull-based GraphQL lexer over a borrowed [`Source`].
///
/// # Usage
///
/// ```rust
/// use graphql_exec_parser::token::GraphQLTokenKind;
/// use graphql_exec_parser::Lexer;
/// use graphql_exec_parser::Source;
///
/// let source = Source::from("{ name }");
/// let mut lexer = Lexer::new(&source);
/// assert_eq!(lexer.next_token(0).unwrap().kind, GraphQLTokenKind::BraceL);
/// assert_eq!(lexer.next_token(0).unwrap().value, "name");
/// assert_eq!(lexer.next_token(0).unwrap().kind, GraphQLTokenKind::BraceR);
/// assert_eq!(lexer.next_token(0).unwrap().kind, GraphQLTokenKind::Eof);
/// ```
pub struct Lexer<'src> {
    source: &'src Source,

    /// End offset of the most recently lexed token.
    prev_position: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src Source) -> Self {
        Self {
            source,
            prev_position: 0,
        }
    }

    /// Lexes the next token.
    ///
    /// A `reset_position` of `0` continues from the end of the previously
    /// lexed token; any other value restarts lexing at that byte offset.
    pub fn next_token(&mut self, reset_position: usize) -> Result<GraphQLToken, SyntaxError> {
        let from_position =
            if reset_position == 0 {
                self.prev_position
            } else {
                reset_position
            };
        let token = self.read_token(from_position)?;
        self.prev_position = token.end;
        Ok(token)
    }

    pub fn source(&self) -> &'src Source {
        self.source
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn body(&self) -> &'src str {
        self.source.body()
    }

    fn peek_char(&self, position: usize) -> Option<char> {
        self.source.char_at(position)
    }

    fn peek_byte(&self, position: usize) -> Option<u8> {
        self.body().as_bytes().get(position).copied()
    }

    fn syntax_error(&self, position: usize, description: impl Into<String>) -> SyntaxError {
        SyntaxError::new(self.source, position, description)
    }

    /// Skips insignificant characters and comments starting at
    /// `start_position`, returning the offset of the next significant
    /// character (or the body length).
    fn position_after_whitespace(&self, start_position: usize) -> usize {
        let body = self.body();
        let mut position = start_position;
        while let Some(ch) = self.peek_char(position) {
            match ch {
                ' ' | ',' | '\u{00A0}' | '\u{2028}' | '\u{2029}' | '\u{FEFF}' => {
                    position += ch.len_utf8();
                },
                ch if (ch as u32) > 8 && (ch as u32) < 14 => {
                    position += 1;
                },
                '#' => {
                    position = skip_comment(body, position + 1);
                },
                _ => break,
            }
        }
        position
    }

    // =========================================================================
    // Token readers
    // =========================================================================

    fn read_token(&self, from_position: usize) -> Result<GraphQLToken, SyntaxError> {
        let position = self.position_after_whitespace(from_position);
        let Some(ch) = self.peek_char(position) else {
            let end = self.body().len();
            return Ok(GraphQLToken::new(GraphQLTokenKind::Eof, end, end, ""));
        };

        let punctuator = |kind| Ok(GraphQLToken::new(kind, position, position + 1, ""));
        match ch {
            '!' => punctuator(GraphQLTokenKind::Bang),
            '$' => punctuator(GraphQLTokenKind::Dollar),
            '&' => punctuator(GraphQLTokenKind::Amp),
            '(' => punctuator(GraphQLTokenKind::ParenL),
            ')' => punctuator(GraphQLTokenKind::ParenR),
            '.' => {
                if self.peek_byte(position + 1) == Some(b'.')
                    && self.peek_byte(position + 2) == Some(b'.') {
                    Ok(GraphQLToken::new(GraphQLTokenKind::Spread, position, position + 3, ""))
                } else {
                    Err(self.syntax_error(
                        position,
                        format!("Unexpected character {}.", print_char(Some(ch))),
                    ))
                }
            },
            ':' => punctuator(GraphQLTokenKind::Colon),
            '=' => punctuator(GraphQLTokenKind::Equals),
            '@' => punctuator(GraphQLTokenKind::At),
            '[' => punctuator(GraphQLTokenKind::BracketL),
            ']' => punctuator(GraphQLTokenKind::BracketR),
            '{' => punctuator(GraphQLTokenKind::BraceL),
            '|' => punctuator(GraphQLTokenKind::Pipe),
            '}' => punctuator(GraphQLTokenKind::BraceR),
            ch if is_name_start(ch) => Ok(self.read_name(position)),
            '-' | '0'..='9' => self.read_number(position),
            '"' => self.read_string(position),
            _ => Err(self.syntax_error(
                position,
                format!("Unexpected character {}.", print_char(Some(ch))),
            )),
        }
    }

    /// Reads a name token: `[_A-Za-z][_0-9A-Za-z]*`.
    fn read_name(&self, start: usize) -> GraphQLToken {
        let bytes = self.body().as_bytes();
        let mut end = start + 1;
        while end < bytes.len() && is_name_continue(bytes[end] as char) {
            end += 1;
        }
        GraphQLToken::new(GraphQLTokenKind::Name, start, end, &self.body()[start..end])
    }

    /// Reads an int or float token.
    ///
    /// ```text
    /// Int:   -?(0|[1-9][0-9]*)
    /// Float: -?(0|[1-9][0-9]*)(\.[0-9]+)?((E|e)(+|-)?[0-9]+)?
    /// ```
    fn read_number(&self, start: usize) -> Result<GraphQLToken, SyntaxError> {
        let mut position = start;
        let mut is_float = false;

        if self.peek_byte(position) == Some(b'-') {
            position += 1;
        }

        if self.peek_byte(position) == Some(b'0') {
            position += 1;
            if let Some(next @ b'0'..=b'9') = self.peek_byte(position) {
                return Err(self.syntax_error(
                    position,
                    format!(
                        "Invalid number, unexpected digit after 0: {}.",
                        print_char(Some(next as char)),
                    ),
                ));
            }
        } else {
            position = self.read_digits(position)?;
        }

        if self.peek_byte(position) == Some(b'.') {
            is_float = true;
            position = self.read_digits(position + 1)?;
        }

        if let Some(b'e' | b'E') = self.peek_byte(position) {
            is_float = true;
            position += 1;
            if let Some(b'+' | b'-') = self.peek_byte(position) {
                position += 1;
            }
            position = self.read_digits(position)?;
        }

        let kind =
            if is_float {
                GraphQLTokenKind::Float
            } else {
                GraphQLTokenKind::Int
            };
        Ok(GraphQLToken::new(kind, start, position, &self.body()[start..position]))
    }

    /// Consumes one or more digits starting at `start` and returns the offset
    /// just past the last one.
    fn read_digits(&self, start: usize) -> Result<usize, SyntaxError> {
        let bytes = self.body().as_bytes();
        if !bytes.get(start).is_some_and(u8::is_ascii_digit) {
            return Err(self.syntax_error(
                start,
                format!(
                    "Invalid number, expected digit but got: {}.",
                    print_char(self.peek_char(start)),
                ),
            ));
        }
        let mut position = start + 1;
        while bytes.get(position).is_some_and(u8::is_ascii_digit) {
            position += 1;
        }
        Ok(position)
    }

    /// Reads a `"`-delimited string, decoding escape sequences.
    fn read_string(&self, start: usize) -> Result<GraphQLToken, SyntaxError> {
        let body = self.body();
        let mut position = start + 1;
        let mut chunk_start = position;
        let mut value = String::new();

        loop {
            let ch = match self.peek_char(position) {
                None | Some('\n' | '\r' | '\u{2028}' | '\u{2029}') => {
                    return Err(self.syntax_error(position, "Unterminated string."));
                },
                Some('"') => break,
                Some(ch) => ch,
            };
            position += ch.len_utf8();
            if ch != '\\' {
                continue;
            }

            value.push_str(&body[chunk_start..position - 1]);
            let escape_position = position;
            match self.peek_byte(position) {
                Some(b'"') => value.push('"'),
                Some(b'/') => value.push('/'),
                Some(b'\\') => value.push('\\'),
                Some(b'b') => value.push('\u{0008}'),
                Some(b'f') => value.push('\u{000C}'),
                Some(b'n') => value.push('\n'),
                Some(b'r') => value.push('\r'),
                Some(b't') => value.push('\t'),
                Some(b'u') => {
                    let (decoded, consumed) = self
                        .read_unicode_escape(position + 1)
                        .ok_or_else(|| self.syntax_error(
                            escape_position,
                            "Bad character escape sequence.",
                        ))?;
                    value.push(decoded);
                    position += consumed;
                },
                _ => {
                    return Err(self.syntax_error(
                        escape_position,
                        "Bad character escape sequence.",
                    ));
                },
            }
            position += 1;
            chunk_start = position;
        }

        value.push_str(&body[chunk_start..position]);
        Ok(GraphQLToken::new(GraphQLTokenKind::String, start, position + 1, value))
    }

    /// Decodes the four hex digits of a `\uXXXX` escape starting at
    /// `position`. A high surrogate must be immediately followed by a
    /// `\uXXXX` low surrogate; the pair decodes to a single char.
    ///
    /// Returns the decoded char and the number of bytes consumed after the
    /// `u`.
    fn read_unicode_escape(&self, position: usize) -> Option<(char, usize)> {
        let code = self.read_hex4(position)?;
        if let Some(ch) = char::from_u32(code) {
            return Some((ch, 4));
        }
        let is_high_surrogate = (0xD800..0xDC00).contains(&code);
        if is_high_surrogate
            && self.peek_byte(position + 4) == Some(b'\\')
            && self.peek_byte(position + 5) == Some(b'u') {
            let low = self.read_hex4(position + 6)?;
            if (0xDC00..0xE000).contains(&low) {
                let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                return char::from_u32(combined).map(|ch| (ch, 10));
            }
        }
        None
    }

    fn read_hex4(&self, position: usize) -> Option<u32> {
        let digits = self.body().get(position..position + 4)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok()
    }
}

/// Returns the offset of the line terminator that ends the comment starting
/// at `position` (or the body length).
fn skip_comment(body: &str, position: usize) -> usize {
    let bytes = body.as_bytes();
    let mut search_from = position;
    // U+2028 and U+2029 are encoded as E2 80 A8 and E2 80 A9.
    while let Some(offset) = memchr::memchr3(b'\n', b'\r', 0xE2, &bytes[search_from..]) {
        let found = search_from + offset;
        if bytes[found] != 0xE2
            || (bytes.get(found + 1) == Some(&0x80)
                && matches!(bytes.get(found + 2), Some(0xA8 | 0xA9))) {
            return found;
        }
        search_from = found + 1;
    }
    bytes.len()
}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Formats a char for inclusion in an error message: `EOF` at end of input,
/// `"\u000A"`-style escapes for control characters, otherwise the quoted
/// char.
fn print_char(ch: Option<char>) -> String {
    match ch {
        None => "EOF".to_string(),
        Some(ch) if (ch as u32) < 0x20 => format!("\"\\u{:04X}\"", ch as u32),
        Some(ch) => format!("\"{ch}\""),
    }
}
