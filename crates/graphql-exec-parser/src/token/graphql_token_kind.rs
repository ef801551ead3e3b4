/// The kind of a lexed [`GraphQLToken`](crate::token::GraphQLToken).
///
/// See
/// [Lexical Tokens](https://spec.graphql.org/October2021/#sec-Language.Source-Text.Lexical-Tokens)
/// in the GraphQL spec.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTokenKind {
    Eof,
    Bang,
    Dollar,
    Amp,
    ParenL,
    ParenR,
    Spread,
    Colon,
    Equals,
    At,
    BracketL,
    BracketR,
    BraceL,
    Pipe,
    BraceR,
    Name,
    Int,
    Float,
    String,
}

impl GraphQLTokenKind {
    /// The human-readable description used in syntax error messages.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Eof => "EOF",
            Self::Bang => "!",
            Self::Dollar => "$",
            Self::Amp => "&",
            Self::ParenL => "(",
            Self::ParenR => ")",
            Self::Spread => "...",
            Self::Colon => ":",
            Self::Equals => "=",
            Self::At => "@",
            Self::BracketL => "[",
            Self::BracketR => "]",
            Self::BraceL => "{",
            Self::Pipe => "|",
            Self::BraceR => "}",
            Self::Name => "Name",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::String => "String",
        }
    }

    /// Whether tokens of this kind carry a non-empty
    /// [`GraphQLToken::value`](crate::token::GraphQLToken::value).
    pub fn has_value(&self) -> bool {
        matches!(self, Self::Name | Self::Int | Self::Float | Self::String)
    }
}

impl std::fmt::Display for GraphQLTokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
