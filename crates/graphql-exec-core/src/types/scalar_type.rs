use crate::types::GraphQLNamedType;
use crate::Value;
use graphql_exec_parser::ast;
use inherent::inherent;
use std::sync::Arc;

pub(crate) type CoerceFn = dyn Fn(&Value) -> Option<Value> + Send + Sync;
pub(crate) type ParseLiteralFn = dyn Fn(&ast::Value) -> Option<Value> + Send + Sync;

/// A leaf type with custom coercion.
///
/// Each coercion function returns `None` when the input can't be
/// represented by this scalar. They're never called with `null`.
///
/// - `serialize`: resolver output to response value.
/// - `parse_value`: variable input to internal value.
/// - `parse_literal`: query literal to internal value. Variables have
///   already been substituted.
#[derive(Clone)]
pub struct ScalarType {
    pub(super) name: String,
    pub(super) description: Option<String>,
    pub(super) serialize: Arc<CoerceFn>,
    pub(super) parse_value: Arc<CoerceFn>,
    pub(super) parse_literal: Arc<ParseLiteralFn>,
}

impl ScalarType {
    pub fn serialize(&self, value: &Value) -> Option<Value> {
        (self.serialize)(value)
    }

    pub fn parse_value(&self, value: &Value) -> Option<Value> {
        (self.parse_value)(value)
    }

    pub fn parse_literal(&self, literal: &ast::Value) -> Option<Value> {
        (self.parse_literal)(literal)
    }

    /// Whether this is one of `Int`, `Float`, `String`, `Boolean` or `ID`.
    pub fn is_builtin(&self) -> bool {
        is_builtin_scalar_name(&self.name)
    }
}

#[inherent]
impl GraphQLNamedType for ScalarType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl std::fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarType")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

pub(crate) fn is_builtin_scalar_name(name: &str) -> bool {
    matches!(name, "Int" | "Float" | "String" | "Boolean" | "ID")
}
