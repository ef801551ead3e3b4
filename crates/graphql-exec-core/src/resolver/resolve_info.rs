use crate::error::PathSegment;
use crate::schema::Schema;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::Value;
use graphql_exec_parser::ast;
use indexmap::IndexMap;

/// Details about the field being resolved and the request it belongs to.
#[derive(Clone, Copy, Debug)]
pub struct ResolveInfo<'r> {
    pub field_name: &'r str,

    /// Every occurrence of this field that was merged under one response
    /// key, in document order.
    pub field_nodes: &'r [&'r ast::Field],

    pub return_type: &'r TypeAnnotation,
    pub parent_type: &'r ObjectType,
    pub path: &'r [PathSegment],
    pub schema: &'r Schema,
    pub document: &'r ast::Document,
    pub operation: &'r ast::OperationDefinition,
    pub root_value: &'r Value,
    pub variable_values: &'r IndexMap<String, Value>,
}
