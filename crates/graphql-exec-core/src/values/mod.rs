//! Coercion of literals, variables and arguments into runtime [`Value`]s.
//!
//! [`Value`]: crate::Value

mod argument_values;
mod ast_from_value;
mod coerce_input_value;
mod coerce_variable_values;
mod is_valid_literal_value;
mod value_from_ast;

pub use argument_values::argument_values;
pub use ast_from_value::ast_from_value;
pub use coerce_input_value::coerce_input_value;
pub use coerce_variable_values::coerce_variable_values;
pub use is_valid_literal_value::is_valid_literal_value;
pub use value_from_ast::value_from_ast;
