use crate::types::ScalarType;
use crate::types::scalar_type::CoerceFn;
use crate::types::scalar_type::ParseLiteralFn;
use crate::Value;
use graphql_exec_parser::ast;
use std::sync::Arc;

/// Builds a custom [`ScalarType`].
///
/// Coercion functions that aren't provided pass values through unchanged,
/// and literals are converted structurally (enum literals become strings).
pub struct ScalarTypeBuilder {
    name: String,
    description: Option<String>,
    serialize: Option<Arc<CoerceFn>>,
    parse_value: Option<Arc<CoerceFn>>,
    parse_literal: Option<Arc<ParseLiteralFn>>,
}

impl ScalarTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            serialize: None,
            parse_value: None,
            parse_literal: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn serialize<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> Option<Value> + Send + Sync + 'static,
    {
        self.serialize = Some(Arc::new(f));
        self
    }

    pub fn parse_value<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> Option<Value> + Send + Sync + 'static,
    {
        self.parse_value = Some(Arc::new(f));
        self
    }

    pub fn parse_literal<F>(mut self, f: F) -> Self
    where
        F: Fn(&ast::Value) -> Option<Value> + Send + Sync + 'static,
    {
        self.parse_literal = Some(Arc::new(f));
        self
    }

    pub fn build(self) -> ScalarType {
        ScalarType {
            name: self.name,
            description: self.description,
            serialize: self.serialize.unwrap_or_else(|| Arc::new(identity)),
            parse_value: self.parse_value.unwrap_or_else(|| Arc::new(identity)),
            parse_literal: self.parse_literal.unwrap_or_else(|| Arc::new(literal_to_value)),
        }
    }
}

fn identity(value: &Value) -> Option<Value> {
    Some(value.clone())
}

/// Structural conversion of a constant literal.
fn literal_to_value(literal: &ast::Value) -> Option<Value> {
    Some(match literal {
        ast::Value::Variable(_) => return None,
        ast::Value::Int(int) => Value::Int(int.value.parse().ok()?),
        ast::Value::Float(float) => Value::Float(float.value.parse().ok()?),
        ast::Value::String(string) => Value::String(string.value.clone()),
        ast::Value::Boolean(boolean) => Value::Boolean(boolean.value),
        ast::Value::Null(_) => Value::Null,
        ast::Value::Enum(enum_value) => Value::String(enum_value.value.clone()),
        ast::Value::List(list) =>
            Value::List(list.values.iter().map(literal_to_value).collect::<Option<_>>()?),
        ast::Value::Object(object) => Value::Object(
            object.fields
                .iter()
                .map(|field| Some((field.name.value.clone(), literal_to_value(&field.value)?)))
                .collect::<Option<_>>()?,
        ),
    })
}
