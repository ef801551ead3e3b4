use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::Value;
use graphql_exec_parser::ast;
use indexmap::IndexMap;

/// Coerces a literal to `type_annotation`, returning `None` when the
/// literal isn't valid for the type.
///
/// Variables are looked up in `variables`; with no variables (as for
/// schema default values) any variable makes the literal invalid. A
/// variable absent from `variables` counts as a missing value: object
/// fields fall back to their defaults and nullable list items become
/// `null`.
pub fn value_from_ast(
    schema: &Schema,
    type_annotation: &TypeAnnotation,
    literal: &ast::Value,
    variables: Option<&IndexMap<String, Value>>,
) -> Option<Value> {
    if let ast::Value::Variable(variable) = literal {
        let value = variables?.get(&variable.name.value)?;
        if value.is_null() && !type_annotation.nullable() {
            return None;
        }
        // Variable values were coerced to their declared type, which the
        // validator has checked to fit this position.
        return Some(value.clone());
    }

    if let ast::Value::Null(_) = literal {
        return type_annotation.nullable().then_some(Value::Null);
    }

    match type_annotation {
        TypeAnnotation::List { inner, .. } => {
            let ast::Value::List(list) = literal else {
                return value_from_ast(schema, inner, literal, variables).map(|v| Value::List(vec![v]));
            };
            let mut items = Vec::with_capacity(list.values.len());
            for item in &list.values {
                if is_missing_variable(item, variables) {
                    if !inner.nullable() {
                        return None;
                    }
                    items.push(Value::Null);
                    continue;
                }
                items.push(value_from_ast(schema, inner, item, variables)?);
            }
            Some(Value::List(items))
        },

        TypeAnnotation::Named { name, .. } => match schema.get_type(name)? {
            GraphQLType::Scalar(scalar) => scalar.parse_literal(literal),
            GraphQLType::Enum(enum_type) => enum_type.parse_literal(literal),
            GraphQLType::InputObject(input_type) => {
                let ast::Value::Object(object) = literal else {
                    return None;
                };
                if object.fields.iter().any(|f| input_type.field(&f.name.value).is_none()) {
                    return None;
                }
                let mut fields = IndexMap::with_capacity(input_type.fields().len());
                for (field_name, field_def) in input_type.fields() {
                    let field_literal = object.fields.iter()
                        .find(|f| &f.name.value == field_name)
                        .map(|f| &f.value)
                        .filter(|value| !is_missing_variable(value, variables));
                    match field_literal {
                        Some(field_literal) => {
                            let value = value_from_ast(
                                schema,
                                field_def.type_annotation(),
                                field_literal,
                                variables,
                            )?;
                            fields.insert(field_name.clone(), value);
                        },
                        None => {
                            if let Some(default_value) = field_def.default_value() {
                                fields.insert(field_name.clone(), default_value.clone());
                            } else if !field_def.type_annotation().nullable() {
                                return None;
                            }
                        },
                    }
                }
                Some(Value::Object(fields))
            },
            GraphQLType::Object(_) | GraphQLType::Interface(_) | GraphQLType::Union(_) => None,
        },
    }
}

fn is_missing_variable(literal: &ast::Value, variables: Option<&IndexMap<String, Value>>) -> bool {
    match (literal, variables) {
        (ast::Value::Variable(variable), Some(variables)) =>
            !variables.contains_key(&variable.name.value),
        _ => false,
    }
}
