//! `Int`, `Float`, `String`, `Boolean` and `ID`.
//!
//! Result and variable coercion is lenient (booleans count as 1/0,
//! numeric strings are parsed, anything scalar stringifies), while literal
//! coercion only accepts the literal kinds the GraphQL spec allows.

use crate::types::ScalarType;
use crate::types::ScalarTypeBuilder;
use crate::Value;
use graphql_exec_parser::ast;

/// The largest integer a JSON number can carry without losing precision.
pub const MAX_SAFE_INT: i64 = 9_007_199_254_740_991;
pub const MIN_SAFE_INT: i64 = -MAX_SAFE_INT;

fn safe_int(value: i64) -> Option<Value> {
    (MIN_SAFE_INT..=MAX_SAFE_INT).contains(&value).then_some(Value::Int(value))
}

fn float_to_int(value: f64) -> Option<Value> {
    if !value.is_finite() {
        return None;
    }
    safe_int(value.trunc() as i64)
}

fn coerce_int(value: &Value) -> Option<Value> {
    match value {
        Value::Boolean(b) => Some(Value::Int(i64::from(*b))),
        Value::Int(i) => safe_int(*i),
        Value::Float(f) => float_to_int(*f),
        Value::String(s) => float_to_int(s.trim().parse::<f64>().ok()?),
        _ => None,
    }
}

fn coerce_float(value: &Value) -> Option<Value> {
    match value {
        Value::Boolean(b) => Some(Value::Float(if *b { 1.0 } else { 0.0 })),
        Value::Int(i) => Some(Value::Float(*i as f64)),
        Value::Float(f) if f.is_finite() => Some(Value::Float(*f)),
        Value::String(s) => s.trim().parse::<f64>().ok()
            .filter(|f| f.is_finite())
            .map(Value::Float),
        _ => None,
    }
}

fn coerce_string(value: &Value) -> Option<Value> {
    match value {
        Value::String(s) => Some(Value::String(s.clone())),
        Value::Boolean(b) => Some(Value::String(b.to_string())),
        Value::Int(i) => Some(Value::String(i.to_string())),
        Value::Float(f) => Some(Value::String(f.to_string())),
        _ => None,
    }
}

fn coerce_boolean(value: &Value) -> Option<Value> {
    match value {
        Value::Boolean(b) => Some(Value::Boolean(*b)),
        Value::Int(i) => Some(Value::Boolean(*i != 0)),
        Value::Float(f) => Some(Value::Boolean(*f != 0.0)),
        Value::String(s) => Some(Value::Boolean(!matches!(s.as_str(), "" | "false"))),
        _ => None,
    }
}

impl ScalarType {
    pub fn int() -> Self {
        ScalarTypeBuilder::new("Int")
            .description(
                "The `Int` scalar type represents non-fractional signed whole \
                numeric values between -(2^53 - 1) and 2^53 - 1.",
            )
            .serialize(coerce_int)
            .parse_value(coerce_int)
            .parse_literal(|literal| match literal {
                ast::Value::Int(int) => int.value.parse::<i64>().ok().map(Value::Int),
                _ => None,
            })
            .build()
    }

    pub fn float() -> Self {
        ScalarTypeBuilder::new("Float")
            .description(
                "The `Float` scalar type represents signed double-precision \
                fractional values as specified by \
                [IEEE 754](http://en.wikipedia.org/wiki/IEEE_floating_point).",
            )
            .serialize(coerce_float)
            .parse_value(coerce_float)
            .parse_literal(|literal| match literal {
                ast::Value::Int(ast::IntValue { value, .. })
                | ast::Value::Float(ast::FloatValue { value, .. }) =>
                    value.parse::<f64>().ok().map(Value::Float),
                _ => None,
            })
            .build()
    }

    pub fn string() -> Self {
        ScalarTypeBuilder::new("String")
            .description(
                "The `String` scalar type represents textual data, represented \
                as UTF-8 character sequences.",
            )
            .serialize(coerce_string)
            .parse_value(coerce_string)
            .parse_literal(|literal| match literal {
                ast::Value::String(string) => Some(Value::String(string.value.clone())),
                _ => None,
            })
            .build()
    }

    pub fn boolean() -> Self {
        ScalarTypeBuilder::new("Boolean")
            .description("The `Boolean` scalar type represents `true` or `false`.")
            .serialize(coerce_boolean)
            .parse_value(coerce_boolean)
            .parse_literal(|literal| match literal {
                ast::Value::Boolean(boolean) => Some(Value::Boolean(boolean.value)),
                _ => None,
            })
            .build()
    }

    pub fn id() -> Self {
        ScalarTypeBuilder::new("ID")
            .description(
                "The `ID` scalar type represents a unique identifier, often \
                used to refetch an object or as key for a cache. Accepts string \
                or integer input and always serializes as a string.",
            )
            .serialize(coerce_string)
            .parse_value(coerce_string)
            .parse_literal(|literal| match literal {
                ast::Value::Int(ast::IntValue { value, .. })
                | ast::Value::String(ast::StringValue { value, .. }) =>
                    Some(Value::String(value.clone())),
                _ => None,
            })
            .build()
    }

    /// The built-in scalar named `name`, if there is one.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "Int" => Some(Self::int()),
            "Float" => Some(Self::float()),
            "String" => Some(Self::string()),
            "Boolean" => Some(Self::boolean()),
            "ID" => Some(Self::id()),
            _ => None,
        }
    }
}
