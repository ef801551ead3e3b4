use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use graphql_exec_parser::ast;
use graphql_exec_parser::print_value;

/// Explains why `literal` can't be coerced to `type_annotation`. An empty
/// list means the literal is valid.
///
/// Variables are always accepted here; whether they fit their position is
/// checked separately.
pub fn is_valid_literal_value(
    schema: &Schema,
    type_annotation: &TypeAnnotation,
    literal: &ast::Value,
) -> Vec<String> {
    match literal {
        ast::Value::Variable(_) => return vec![],
        ast::Value::Null(_) if !type_annotation.nullable() =>
            return vec![format!("Expected \"{type_annotation}\", found null.")],
        ast::Value::Null(_) => return vec![],
        _ => (),
    }

    match type_annotation {
        TypeAnnotation::List { inner, .. } => match literal {
            ast::Value::List(list) => list.values.iter()
                .enumerate()
                .flat_map(|(i, item)| {
                    is_valid_literal_value(schema, inner, item)
                        .into_iter()
                        .map(move |problem| format!("In element #{i}: {problem}"))
                })
                .collect(),
            _ => is_valid_literal_value(schema, inner, literal),
        },

        TypeAnnotation::Named { name, .. } => match schema.get_type(name) {
            Some(GraphQLType::InputObject(input_type)) => {
                let ast::Value::Object(object) = literal else {
                    return vec![format!("Expected \"{name}\", found not an object.")];
                };
                let mut problems = vec![];
                for field in &object.fields {
                    if input_type.field(&field.name.value).is_none() {
                        problems.push(format!("In field \"{}\": Unknown field.", field.name.value));
                    }
                }
                for (field_name, field_def) in input_type.fields() {
                    let field_literal = object.fields.iter().find(|f| &f.name.value == field_name);
                    let field_problems = match field_literal {
                        Some(field) =>
                            is_valid_literal_value(schema, field_def.type_annotation(), &field.value),
                        None if field_def.default_value().is_none()
                            && !field_def.type_annotation().nullable() =>
                            vec![format!("Expected \"{}\", found null.", field_def.type_annotation())],
                        None => vec![],
                    };
                    problems.extend(field_problems.into_iter().map(|problem| {
                        format!("In field \"{field_name}\": {problem}")
                    }));
                }
                problems
            },
            Some(GraphQLType::Scalar(scalar)) => match scalar.parse_literal(literal) {
                Some(_) => vec![],
                None => vec![format!("Expected type \"{name}\", found {}.", print_value(literal))],
            },
            Some(GraphQLType::Enum(enum_type)) => match enum_type.parse_literal(literal) {
                Some(_) => vec![],
                None => vec![format!("Expected type \"{name}\", found {}.", print_value(literal))],
            },
            // Unknown and output types are reported by other rules.
            _ => vec![],
        },
    }
}
