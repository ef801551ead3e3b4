//! A GraphQL execution engine.
//!
//! [`do_request()`] takes a request (query text or a parsed document, plus
//! operation name, variables and a root value), validates it against a
//! [`Schema`](schema::Schema) and executes it, producing a [`Response`]
//! in the canonical wire shape:
//!
//! ```rust
//! use graphql_exec::Params;
//! use graphql_exec::Value;
//! use graphql_exec::do_request;
//! use graphql_exec::schema::SchemaBuilder;
//! use std::sync::Arc;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let schema = SchemaBuilder::new()
//!     .load_str("type Query { hello: String }")
//!     .unwrap()
//!     .resolver("Query", "hello", |_params| Ok(Value::from("world").into()))
//!     .build()
//!     .unwrap();
//! let response = do_request(Params::new(Arc::new(schema), "{ hello }")).await;
//! assert_eq!(
//!     serde_json::to_string(&response).unwrap(),
//!     r#"{"data":{"hello":"world"}}"#,
//! );
//! # });
//! ```
//!
//! The building blocks are re-exported from `graphql-exec-core` at the
//! crate root and from `graphql-exec-parser` under [`parser`].

mod do_request;
mod params;
mod request;
mod response;
mod subscribe;

pub use do_request::do_request;
pub use graphql_exec_core::*;
pub use params::Params;
pub use request::Request;
pub use response::Response;
pub use subscribe::subscribe;

/// Source handling, parsing, AST traversal and printing.
pub mod parser {
    pub use graphql_exec_parser::*;
}

#[cfg(test)]
mod tests;
