//! Source handling, lexing, parsing, AST traversal and printing for GraphQL
//! documents, covering both executable documents and the schema definition
//! language.
//!
//! The typical entry point is [`parse()`]:
//!
//! ```rust
//! use graphql_exec_parser::parse;
//! use graphql_exec_parser::ParseParams;
//!
//! let document = parse(ParseParams::from("{ hello }")).unwrap();
//! assert_eq!(document.definitions.len(), 1);
//! ```

pub mod ast;
mod lexer;
mod parse_options;
mod parser;
mod printer;
mod source;
mod source_location;
mod syntax_error;
pub mod token;
pub mod visitor;

pub use lexer::Lexer;
pub use parse_options::ParseOptions;
pub use parse_options::ParseParams;
pub use parser::parse;
pub use parser::parse_type;
pub use parser::parse_value;
pub use parser::GraphQLParser;
pub use printer::print;
pub use printer::print_value;
pub use source::Source;
pub use source::DEFAULT_SOURCE_NAME;
pub use source_location::SourceLocation;
pub use syntax_error::SyntaxError;

#[cfg(test)]
mod tests;
