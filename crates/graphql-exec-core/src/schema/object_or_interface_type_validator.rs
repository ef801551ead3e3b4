use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::Field;
use crate::types::GraphQLType;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Checks the fields of an object or interface type, and (for objects) that
/// every declared interface is correctly implemented.
pub(super) struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    fields: &'a IndexMap<String, Field>,
    interface_names: &'a [String],
    schema: &'a Schema,
    type_name: &'a str,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn new(
        type_name: &'a str,
        fields: &'a IndexMap<String, Field>,
        interface_names: &'a [String],
        schema: &'a Schema,
    ) -> Self {
        Self {
            errors: vec![],
            fields,
            interface_names,
            schema,
            type_name,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        let mut verified_interface_names = HashSet::new();
        for iface_name in self.interface_names {
            if !verified_interface_names.insert(iface_name.as_str()) {
                continue;
            }
            self.validate_interface_impl(iface_name);
        }

        for (field_name, field) in self.fields {
            // All fields on an object or interface type must be declared with
            // an output type.
            let innermost_type_name = field.type_annotation().innermost_name();
            match self.schema.get_type(innermost_type_name) {
                Some(innermost_type) if !innermost_type.is_output_type() =>
                    self.errors.push(
                        TypeValidationError::InvalidOutputFieldWithInputType {
                            field_name: field_name.to_string(),
                            input_type_name: innermost_type_name.to_string(),
                            parent_type_name: self.type_name.to_string(),
                        }
                    ),
                Some(_) => (),
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    referenced_by: format!("{}.{field_name}", self.type_name),
                    undefined_type_name: innermost_type_name.to_string(),
                }),
            }

            for (argument_name, argument) in field.arguments() {
                // Arguments must be declared with an input type.
                let innermost_type_name = argument.type_annotation().innermost_name();
                match self.schema.get_type(innermost_type_name) {
                    Some(innermost_type) if !innermost_type.is_input_type() =>
                        self.errors.push(
                            TypeValidationError::InvalidArgumentWithOutputOnlyType {
                                argument_name: argument_name.to_string(),
                                output_only_type_name: innermost_type_name.to_string(),
                                parent_name: format!("{}.{field_name}", self.type_name),
                            }
                        ),
                    Some(_) => (),
                    None => self.errors.push(TypeValidationError::UndefinedTypeName {
                        referenced_by: format!(
                            "{}.{field_name}({argument_name}:)",
                            self.type_name,
                        ),
                        undefined_type_name: innermost_type_name.to_string(),
                    }),
                }
            }
        }

        self.errors
    }

    fn validate_interface_impl(&mut self, iface_name: &str) {
        let type_name = self.type_name;

        let iface = match self.schema.get_type(iface_name) {
            Some(GraphQLType::Interface(iface)) => iface,
            Some(non_iface_type) => {
                self.errors.push(TypeValidationError::ImplementsNonInterfaceType {
                    type_name: type_name.to_string(),
                    non_interface_type_name: non_iface_type.name().to_string(),
                });
                return;
            },
            None => {
                self.errors.push(TypeValidationError::ImplementsUndefinedInterface {
                    type_name: type_name.to_string(),
                    undefined_interface_name: iface_name.to_string(),
                });
                return;
            },
        };

        for (field_name, iface_field) in iface.fields() {
            let Some(type_field) = self.fields.get(field_name) else {
                self.errors.push(TypeValidationError::MissingInterfaceSpecifiedField {
                    field_name: field_name.to_string(),
                    interface_name: iface_name.to_string(),
                    type_name: type_name.to_string(),
                });
                continue;
            };

            // For each argument defined on this field in the interface, there
            // must be an equivalently-typed argument on the implementing
            // field.
            for (argument_name, iface_argument) in iface_field.arguments() {
                let Some(type_argument) = type_field.argument(argument_name) else {
                    self.errors.push(
                        TypeValidationError::MissingInterfaceSpecifiedFieldArgument {
                            field_name: field_name.to_string(),
                            interface_name: iface_name.to_string(),
                            missing_argument_name: argument_name.to_string(),
                            type_name: type_name.to_string(),
                        }
                    );
                    continue;
                };

                if type_argument.type_annotation() != iface_argument.type_annotation() {
                    self.errors.push(
                        TypeValidationError::InvalidInterfaceSpecifiedFieldArgumentType {
                            argument_name: argument_name.to_string(),
                            expected_argument_type: iface_argument.type_annotation().clone(),
                            field_name: field_name.to_string(),
                            interface_name: iface_name.to_string(),
                            invalid_argument_type: type_argument.type_annotation().clone(),
                            type_name: type_name.to_string(),
                        }
                    );
                }
            }

            // Arguments the implementing field adds must be optional: either
            // nullable or defaulted.
            for (argument_name, argument) in type_field.arguments() {
                if iface_field.argument(argument_name).is_some() {
                    continue;
                }
                let has_default =
                    argument.default_value().is_some()
                    || argument.default_literal.is_some();
                if !argument.type_annotation().nullable() && !has_default {
                    self.errors.push(
                        TypeValidationError::InvalidRequiredAdditionalArgumentOnInterfaceSpecifiedField {
                            argument_name: argument_name.to_string(),
                            field_name: field_name.to_string(),
                            interface_name: iface_name.to_string(),
                            type_name: type_name.to_string(),
                        }
                    );
                }
            }

            let type_field_annot = type_field.type_annotation();
            let iface_field_annot = iface_field.type_annotation();
            if !type_field_annot.is_subtype_of(self.schema, iface_field_annot) {
                self.errors.push(TypeValidationError::InvalidInterfaceSpecifiedFieldType {
                    expected_field_type: iface_field_annot.clone(),
                    field_name: field_name.to_string(),
                    interface_name: iface_name.to_string(),
                    invalid_field_type: type_field_annot.clone(),
                    type_name: type_name.to_string(),
                });
            }
        }
    }
}
