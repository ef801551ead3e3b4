//! Various test utils.

use crate::ast;
use crate::parse;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::Lexer;
use crate::ParseOptions;
use crate::ParseParams;
use crate::Source;
use crate::SyntaxError;

/// Lexes all of `body`, returning the tokens up to (and including) EOF.
pub fn lex_all(body: &str) -> Result<Vec<GraphQLToken>, SyntaxError> {
    let source = Source::from(body);
    let mut lexer = Lexer::new(&source);
    let mut tokens = vec![];
    loop {
        let token = lexer.next_token(0)?;
        let is_eof = token.kind == GraphQLTokenKind::Eof;
        tokens.push(token);
        if is_eof {
            return Ok(tokens);
        }
    }
}

/// Lexes the first token of `body`.
pub fn lex_one(body: &str) -> Result<GraphQLToken, SyntaxError> {
    let source = Source::from(body);
    Lexer::new(&source).next_token(0)
}

/// Parses `body` without location info, for structural comparisons.
pub fn parse_without_locations(body: &str) -> ast::Document {
    let params = ParseParams::from(body).with_options(ParseOptions {
        no_location: true,
        no_source: true,
    });
    parse(params).unwrap()
}

/// Returns the only operation in `doc`.
pub fn only_operation(doc: &ast::Document) -> &ast::OperationDefinition {
    let mut operations = doc.operations();
    let op = operations.next().expect("expected an operation");
    assert!(operations.next().is_none(), "expected exactly one operation");
    op
}

/// Returns the field selections of `selection_set`, panicking on fragments.
pub fn fields(selection_set: &ast::SelectionSet) -> Vec<&ast::Field> {
    selection_set
        .selections
        .iter()
        .map(|selection| match selection {
            ast::Selection::Field(field) => field,
            other => panic!("expected a field, got {other:?}"),
        })
        .collect()
}
