//! The runtime half of the `graphql-exec` engine: the type system and
//! schema builder, introspection, input coercion, the validator and the
//! executor.
//!
//! A [`Schema`](schema::Schema) is built once (in code with
//! [`SchemaBuilder`](schema::SchemaBuilder) or from SDL) and then shared
//! read-only between any number of concurrent requests. Each request is
//! [validated](validation::validate) and then [executed](execute), with
//! resolvers producing [`Value`]s.
//!
//! ```rust
//! use graphql_exec_core::ExecuteParams;
//! use graphql_exec_core::execute;
//! use graphql_exec_core::schema::SchemaBuilder;
//! use graphql_exec_parser::parse;
//! use graphql_exec_parser::ParseParams;
//! use std::sync::Arc;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let schema = SchemaBuilder::new()
//!     .load_str("type Query { hello: String }")
//!     .unwrap()
//!     .build()
//!     .unwrap();
//! let document = parse(ParseParams::from("{ hello }")).unwrap();
//! let params = ExecuteParams::new(Arc::new(schema), Arc::new(document))
//!     .with_root_value(graphql_exec_core::Value::object([("hello", "world".into())]));
//! let result = execute(params).await;
//! assert_eq!(result.data.unwrap().to_json_string(), r#"{"hello":"world"}"#);
//! # });
//! ```

pub mod error;
pub mod execution;
mod extension;
mod introspection;
mod request_context;
pub mod resolver;
pub mod schema;
mod type_info;
pub mod types;
pub mod validation;
mod value;
pub mod values;

pub use execution::execute;
pub use execution::query_complexity;
pub use execution::subscribe;
pub use execution::ExecuteParams;
pub use execution::ExecutionResult;
pub use extension::Extension;
pub use request_context::RequestContext;
pub use type_info::TypeInfo;
pub use value::Value;

#[cfg(test)]
mod tests;
