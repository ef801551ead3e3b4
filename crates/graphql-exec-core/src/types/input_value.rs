use crate::types::TypeAnnotation;
use crate::Value;
use graphql_exec_parser::ast;

/// A field argument, directive argument or input object field.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValue {
    name: String,
    description: Option<String>,
    type_annotation: TypeAnnotation,
    default_value: Option<Value>,
    // Set by schema definitions; turned into `default_value` once every
    // type of the schema is known.
    pub(crate) default_literal: Option<ast::Value>,
}

impl InputValue {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            name: name.into(),
            description: None,
            type_annotation,
            default_value: None,
            default_literal: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the (already coerced) value used when no value is provided.
    pub fn with_default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub(crate) fn with_default_literal(mut self, literal: ast::Value) -> Self {
        self.default_literal = Some(literal);
        self
    }

    pub(crate) fn set_default_value(&mut self, value: Value) {
        self.default_value = Some(value);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }
}
