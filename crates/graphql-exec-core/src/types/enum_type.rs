use crate::types::EnumValue;
use crate::types::GraphQLNamedType;
use crate::Value;
use graphql_exec_parser::ast;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums)
/// defined within some [`Schema`](crate::schema::Schema).
///
/// Enum values are exchanged with clients by name and with resolvers by
/// their internal [`EnumValue::value()`].
#[derive(Clone, Debug)]
pub struct EnumType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) values: IndexMap<String, EnumValue>,
}

impl EnumType {
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }

    /// Internal value to the name sent in a response.
    pub fn serialize(&self, value: &Value) -> Option<Value> {
        self.values
            .values()
            .find(|enum_value| enum_value.value() == value)
            .map(|enum_value| Value::String(enum_value.name().to_string()))
    }

    /// A name supplied in variables to its internal value.
    pub fn parse_value(&self, value: &Value) -> Option<Value> {
        value.as_str()
            .and_then(|name| self.values.get(name))
            .map(|enum_value| enum_value.value().clone())
    }

    /// An enum literal to its internal value.
    pub fn parse_literal(&self, literal: &ast::Value) -> Option<Value> {
        match literal {
            ast::Value::Enum(enum_literal) => self.values
                .get(&enum_literal.value)
                .map(|enum_value| enum_value.value().clone()),
            _ => None,
        }
    }
}

#[inherent]
impl GraphQLNamedType for EnumType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
