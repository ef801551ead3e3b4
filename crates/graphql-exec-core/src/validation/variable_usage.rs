use crate::types::TypeAnnotation;
use graphql_exec_parser::ast;

/// A `$variable` reference and the input type expected at its position
/// (`None` when the position's type is unknown).
#[derive(Clone, Debug)]
pub struct VariableUsage<'a> {
    pub variable: &'a ast::Variable,
    pub type_: Option<TypeAnnotation>,
}
