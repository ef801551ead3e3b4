use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;

/// Coerces an external (e.g. JSON-decoded) value to `type_annotation`. On
/// failure returns one message per problem found.
pub fn coerce_input_value(
    schema: &Schema,
    type_annotation: &TypeAnnotation,
    value: &Value,
) -> Result<Value, Vec<String>> {
    if value.is_null() {
        if type_annotation.nullable() {
            return Ok(Value::Null);
        }
        return Err(vec![format!("Expected non-null value of type \"{type_annotation}\", found null.")]);
    }

    match type_annotation {
        TypeAnnotation::List { inner, .. } => match value {
            Value::List(items) => {
                let mut coerced = Vec::with_capacity(items.len());
                let mut problems = vec![];
                for (i, item) in items.iter().enumerate() {
                    match coerce_input_value(schema, inner, item) {
                        Ok(item) => coerced.push(item),
                        Err(item_problems) => problems.extend(
                            item_problems.into_iter().map(|p| format!("In element #{i}: {p}")),
                        ),
                    }
                }
                if problems.is_empty() { Ok(Value::List(coerced)) } else { Err(problems) }
            },
            _ => coerce_input_value(schema, inner, value).map(|item| Value::List(vec![item])),
        },

        TypeAnnotation::Named { name, .. } => {
            let invalid = || vec![format!("Expected type \"{name}\", found {value}.")];
            match schema.get_type(name) {
                Some(GraphQLType::Scalar(scalar)) => scalar.parse_value(value).ok_or_else(invalid),
                Some(GraphQLType::Enum(enum_type)) =>
                    enum_type.parse_value(value).ok_or_else(invalid),
                Some(GraphQLType::InputObject(input_type)) => {
                    let Value::Object(fields) = value else {
                        return Err(vec![format!("Expected \"{name}\" to be an object, found {value}.")]);
                    };
                    let mut problems = vec![];
                    for field_name in fields.keys() {
                        if input_type.field(field_name).is_none() {
                            problems.push(format!("Field \"{field_name}\" is not defined by type \"{name}\"."));
                        }
                    }
                    let mut coerced = IndexMap::with_capacity(input_type.fields().len());
                    for (field_name, field_def) in input_type.fields() {
                        let field_type = field_def.type_annotation();
                        match fields.get(field_name) {
                            Some(field_value) => match coerce_input_value(schema, field_type, field_value) {
                                Ok(field_value) => {
                                    coerced.insert(field_name.clone(), field_value);
                                },
                                Err(field_problems) => problems.extend(
                                    field_problems.into_iter()
                                        .map(|p| format!("In field \"{field_name}\": {p}")),
                                ),
                            },
                            None => {
                                if let Some(default_value) = field_def.default_value() {
                                    coerced.insert(field_name.clone(), default_value.clone());
                                } else if !field_type.nullable() {
                                    problems.push(format!(
                                        "Field \"{name}.{field_name}\" of required type \
                                        \"{field_type}\" was not provided."
                                    ));
                                }
                            },
                        }
                    }
                    if problems.is_empty() { Ok(Value::Object(coerced)) } else { Err(problems) }
                },
                _ => Err(vec![format!("Type \"{name}\" is not an input type.")]),
            }
        },
    }
}
