use crate::types::TypeAnnotation;

/// A structural problem with one type of a schema, found once every type
/// is known.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TypeValidationError {
    #[error(
        "Input object fields may declare their types as a reference to an \
        input object type only if it does not create a circular chain of types \
        that cannot be broken with at least one nullable field. Unbroken \
        input-object cycle found: {}",
        circular_field_path.join(" -> "),
    )]
    CircularInputFieldChain {
        circular_field_path: Vec<String>,
    },

    #[error(
        "The `{type_name}` type implements `{non_interface_type_name}`, which \
        is not an interface type"
    )]
    ImplementsNonInterfaceType {
        type_name: String,
        non_interface_type_name: String,
    },

    #[error(
        "The `{type_name}` type implements `{undefined_interface_name}`, which \
        is not defined in the schema"
    )]
    ImplementsUndefinedInterface {
        type_name: String,
        undefined_interface_name: String,
    },

    #[error(
        "Input fields can not be declared with a non-input type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is a non-input type."
    )]
    InvalidInputFieldWithOutputType {
        field_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Output fields can not be declared with an input type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input-type"
    )]
    InvalidOutputFieldWithInputType {
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Arguments can only be declared with input types: The \
        `{parent_name}.{argument_name}` argument was declared with the \
        `{output_only_type_name}` type, which is not an input type."
    )]
    InvalidArgumentWithOutputOnlyType {
        argument_name: String,
        output_only_type_name: String,
        parent_name: String,
    },

    #[error(
        "Invalid argument type: The `{type_name}.{field_name}` field \
        defines the `{argument_name}` argument with a type of \
        `{invalid_argument_type}`, but `{interface_name}.{field_name}` \
        defines this argument with type `{expected_argument_type}`"
    )]
    InvalidInterfaceSpecifiedFieldArgumentType {
        argument_name: String,
        expected_argument_type: TypeAnnotation,
        field_name: String,
        interface_name: String,
        invalid_argument_type: TypeAnnotation,
        type_name: String,
    },

    #[error(
        "Invalid interface-specified field type: The \
        `{type_name}.{field_name}` field's type is defined as \
        `{invalid_field_type}` which is incompatible with \
        `{interface_name}.{field_name}` whose type is defined as \
        `{expected_field_type}`."
    )]
    InvalidInterfaceSpecifiedFieldType {
        expected_field_type: TypeAnnotation,
        field_name: String,
        interface_name: String,
        invalid_field_type: TypeAnnotation,
        type_name: String,
    },

    #[error(
        "Additional arguments defined on interface-specified fields must not \
        be required: `{type_name}.{field_name}` requires `{argument_name}`, \
        which `{interface_name}.{field_name}` does not define"
    )]
    InvalidRequiredAdditionalArgumentOnInterfaceSpecifiedField {
        argument_name: String,
        field_name: String,
        interface_name: String,
        type_name: String,
    },

    #[error(
        "Invalid union member type: The `{union_type_name}` type defines one \
        of its members as `{member_type_name}`, but union members can only be \
        object types."
    )]
    InvalidUnionMemberTypeKind {
        member_type_name: String,
        union_type_name: String,
    },

    #[error(
        "The `{type_name}` type implements the `{interface_name}` interface, \
        but does not define a field named `{field_name}`"
    )]
    MissingInterfaceSpecifiedField {
        field_name: String,
        interface_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type implements the `{interface_name}` interface \
        which defines a `{missing_argument_name}` argument on the \
        `{field_name}` field, but `{type_name}.{field_name}` has no \
        `{missing_argument_name}` argument"
    )]
    MissingInterfaceSpecifiedFieldArgument {
        field_name: String,
        interface_name: String,
        missing_argument_name: String,
        type_name: String,
    },

    #[error(
        "There is no type defined with the name `{undefined_type_name}` \
        (referenced by `{referenced_by}`)"
    )]
    UndefinedTypeName {
        referenced_by: String,
        undefined_type_name: String,
    },
}
