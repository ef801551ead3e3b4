use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::Value;
use graphql_exec_parser::ast;

/// Produces a literal representing `value` as an input of `type_annotation`,
/// e.g. for printing default values. Returns `None` for values the type
/// can't represent.
pub fn ast_from_value(
    schema: &Schema,
    value: &Value,
    type_annotation: &TypeAnnotation,
) -> Option<ast::Value> {
    if value.is_null() {
        return type_annotation.nullable().then(|| ast::Value::Null(ast::NullValue { loc: None }));
    }

    match type_annotation {
        TypeAnnotation::List { inner, .. } => match value {
            Value::List(items) => Some(ast::Value::List(ast::ListValue {
                values: items.iter()
                    .map(|item| ast_from_value(schema, item, inner))
                    .collect::<Option<_>>()?,
                loc: None,
            })),
            _ => ast_from_value(schema, value, inner),
        },

        TypeAnnotation::Named { name, .. } => match schema.get_type(name)? {
            GraphQLType::InputObject(input_type) => {
                let fields = value.as_object()?;
                let mut literal_fields = vec![];
                for (field_name, field_def) in input_type.fields() {
                    let Some(field_value) = fields.get(field_name) else {
                        continue;
                    };
                    literal_fields.push(ast::ObjectField {
                        name: ast::Name::new(field_name.as_str()),
                        value: ast_from_value(schema, field_value, field_def.type_annotation())?,
                        loc: None,
                    });
                }
                Some(ast::Value::Object(ast::ObjectValue { fields: literal_fields, loc: None }))
            },
            GraphQLType::Enum(enum_type) => {
                let Value::String(enum_name) = enum_type.serialize(value)? else {
                    return None;
                };
                Some(ast::Value::Enum(ast::EnumValue { value: enum_name, loc: None }))
            },
            GraphQLType::Scalar(scalar) => Some(match scalar.serialize(value)? {
                Value::Boolean(b) => ast::Value::Boolean(ast::BooleanValue { value: b, loc: None }),
                Value::Int(i) => ast::Value::Int(ast::IntValue { value: i.to_string(), loc: None }),
                Value::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 =>
                    ast::Value::Int(ast::IntValue { value: format!("{f}"), loc: None }),
                Value::Float(f) =>
                    ast::Value::Float(ast::FloatValue { value: f.to_string(), loc: None }),
                Value::String(s) if name == "ID" && is_integer_string(&s) =>
                    ast::Value::Int(ast::IntValue { value: s, loc: None }),
                Value::String(s) =>
                    ast::Value::String(ast::StringValue { value: s, loc: None }),
                _ => return None,
            }),
            GraphQLType::Object(_) | GraphQLType::Interface(_) | GraphQLType::Union(_) => None,
        },
    }
}

fn is_integer_string(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'))
}
