use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::collections::HashSet;

pub(super) struct InputObjectTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    schema: &'a Schema,
    type_: &'a InputObjectType,
}
impl<'a> InputObjectTypeValidator<'a> {
    pub fn new(type_: &'a InputObjectType, schema: &'a Schema) -> Self {
        Self {
            errors: vec![],
            schema,
            type_,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        self.validate_fields_recursive(
            &self.type_.name,
            &self.type_.fields,
            &mut vec![],
            HashSet::from([self.type_.name.as_str()]),
        );
        self.errors
    }

    fn validate_fields_recursive(
        &mut self,
        type_name: &'a str,
        fields: &'a IndexMap<String, InputValue>,
        path: &mut Vec<(&'a str, Option<&'a str>)>,
        seen_type_names: HashSet<&'a str>,
    ) {
        // Only the type being validated reports problems with its own
        // fields; nested types report theirs when they are validated.
        let is_root = path.is_empty();
        for (field_name, field) in fields {
            let innermost_type_name = field.type_annotation().innermost_name();
            let Some(innermost_type) = self.schema.get_type(innermost_type_name) else {
                if is_root {
                    self.errors.push(TypeValidationError::UndefinedTypeName {
                        referenced_by: format!("{type_name}.{field_name}"),
                        undefined_type_name: innermost_type_name.to_string(),
                    });
                }
                continue;
            };

            if !innermost_type.is_input_type() {
                if is_root {
                    self.errors.push(TypeValidationError::InvalidInputFieldWithOutputType {
                        field_name: field_name.to_string(),
                        invalid_type_name: innermost_type_name.to_string(),
                        parent_type_name: type_name.to_string(),
                    });
                }
                continue;
            }

            // Look for input-type cycles that aren't broken by at least one
            // nullable type.
            if annot_contains_cycle_breaking_nullable_type(field.type_annotation()) {
                continue;
            }
            path.push((type_name, Some(field_name)));
            if innermost_type_name == self.type_.name {
                let mut circular_field_path = path.iter()
                    .map(|(type_name, field_name)| match field_name {
                        Some(field_name) => format!("{type_name}.{field_name}"),
                        None => type_name.to_string(),
                    })
                    .collect::<Vec<_>>();
                circular_field_path.push(innermost_type_name.to_string());
                self.errors.push(TypeValidationError::CircularInputFieldChain {
                    circular_field_path,
                });
            } else if let GraphQLType::InputObject(input_obj_type) = innermost_type
                && !seen_type_names.contains(innermost_type_name) {
                let mut seen_type_names = seen_type_names.clone();
                seen_type_names.insert(innermost_type_name);
                self.validate_fields_recursive(
                    innermost_type_name,
                    &input_obj_type.fields,
                    path,
                    seen_type_names,
                );
            }
            path.pop();
        }
    }
}

fn annot_contains_cycle_breaking_nullable_type(type_annot: &TypeAnnotation) -> bool {
    match type_annot {
        TypeAnnotation::List { inner, nullable } =>
            *nullable || annot_contains_cycle_breaking_nullable_type(inner),
        TypeAnnotation::Named { nullable, .. } => *nullable,
    }
}
