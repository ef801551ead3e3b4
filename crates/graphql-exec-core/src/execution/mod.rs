//! Executing a validated operation against a schema.
//!
//! [`execute()`] runs queries and mutations, [`subscribe()`] turns a
//! subscription into a stream of results and [`query_complexity()`]
//! estimates an operation's cost before running it.

mod collect_fields;
mod complete_value;
mod execute;
mod execute_params;
mod execution_context;
mod execution_result;
mod query_complexity;
mod subscribe;

pub use execute::execute;
pub use execute_params::ExecuteParams;
pub use execution_context::select_operation;
pub use execution_result::ExecutionResult;
pub use query_complexity::query_complexity;
pub use subscribe::subscribe;

pub(crate) use collect_fields::GroupedFields;
pub(crate) use collect_fields::collect_fields;
pub(crate) use complete_value::complete_value;
pub(crate) use execute::Interrupt;
pub(crate) use execute::child_path;
pub(crate) use execute::execute_fields;
pub(crate) use execute::execute_operation;
pub(crate) use execution_context::ExecutionContext;
pub(crate) use execution_context::FieldInfo;
