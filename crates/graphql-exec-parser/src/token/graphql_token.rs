use crate::token::GraphQLTokenKind;

/// A single lexed token.
///
/// `start` and `end` are byte offsets into the
/// [`Source`](crate::Source) body (`end` is exclusive). `value` is empty for
/// punctuation, holds the raw lexeme for names and numbers, and holds the
/// decoded text (escapes already applied) for strings.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken {
    pub kind: GraphQLTokenKind,
    pub start: usize,
    pub end: usize,
    pub value: String,
}

impl GraphQLToken {
    pub fn new(
        kind: GraphQLTokenKind,
        start: usize,
        end: usize,
        value: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            start,
            end,
            value: value.into(),
        }
    }

    /// Describes this token for syntax error messages, e.g. `Name "foo"` or
    /// `EOF`.
    pub fn description(&self) -> String {
        if self.value.is_empty() {
            self.kind.description().to_string()
        } else {
            format!("{} \"{}\"", self.kind.description(), self.value)
        }
    }
}
