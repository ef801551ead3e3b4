use crate::schema::TypeValidationError;
use graphql_exec_parser::ast::OperationType;
use graphql_exec_parser::SyntaxError;

/// Why a schema couldn't be built.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SchemaBuildError {
    #[error("Multiple arguments named `{argument_name}` were defined on `{parent_name}`")]
    DuplicateArgumentDefinition {
        argument_name: String,
        parent_name: String,
    },

    #[error("Multiple directives were defined with the name `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
    },

    #[error(
        "Multiple enum values named `{value_name}` were defined on the \
        `{enum_name}` enum"
    )]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
    },

    #[error("Multiple fields named `{field_name}` were defined on the `{type_name}` type")]
    DuplicateFieldDefinition {
        field_name: String,
        type_name: String,
    },

    #[error("The {operation} root operation type was defined more than once")]
    DuplicateOperationDefinition {
        operation: OperationType,
    },

    #[error("Multiple GraphQL types were defined with the name `{type_name}`")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("The `{type_name}` union includes `{member_name}` more than once")]
    DuplicatedUnionMember {
        member_name: String,
        type_name: String,
    },

    #[error("The `{type_name}` union must define one or more member types")]
    EmptyUnion {
        type_name: String,
    },

    #[error("The `{type_name}` enum must define one or more values")]
    EnumWithNoValues {
        type_name: String,
    },

    #[error("Attempted to extend `{type_name}`, which is not defined")]
    ExtensionOfUndefinedType {
        type_name: String,
    },

    #[error("Attempted to extend `{type_name}`, which is not an object type")]
    InvalidExtensionType {
        type_name: String,
    },

    #[error("Invalid default value for `{parent_name}.{input_name}`: {message}")]
    InvalidDefaultValue {
        input_name: String,
        message: String,
        parent_name: String,
    },

    #[error("Unknown directive location `{location}` on `@{directive_name}`")]
    InvalidDirectiveLocation {
        directive_name: String,
        location: String,
    },

    #[error(
        "Names starting with `__` are reserved for introspection: `{name}` \
        can't be used"
    )]
    InvalidDunderPrefixedName {
        name: String,
    },

    #[error("`{value_name}` can't be used as a value of the `{enum_name}` enum")]
    InvalidEnumValueName {
        enum_name: String,
        value_name: String,
    },

    #[error("Names must match /^[_a-zA-Z][_a-zA-Z0-9]*$/ but `{name}` does not")]
    InvalidName {
        name: String,
    },

    #[error(
        "An `is_type_of` function was registered for `{type_name}`, which is \
        not an object type"
    )]
    IsTypeOfForNonObjectType {
        type_name: String,
    },

    #[error("The {operation} root type `{type_name}` must be an object type")]
    InvalidRootOperationType {
        operation: OperationType,
        type_name: String,
    },

    #[error("Attempted to build a schema that has no query root type defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "The {operation1} and {operation2} root operations both use the \
        `{type_name}` type, but every root operation type must be distinct"
    )]
    NonUniqueOperationTypes {
        operation1: OperationType,
        operation2: OperationType,
        type_name: String,
    },

    #[error("Error parsing schema document: {0}")]
    ParseError(#[from] SyntaxError),

    #[error("Attempted to redefine the built-in `@{directive_name}` directive")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
    },

    #[error(
        "A resolver was registered for `{type_name}.{field_name}`, but no \
        such field is defined"
    )]
    ResolverForUndefinedField {
        field_name: String,
        type_name: String,
    },

    #[error(
        "A type resolver was registered for `{type_name}`, which is not an \
        interface or union type"
    )]
    TypeResolverForNonAbstractType {
        type_name: String,
    },

    #[error("The {operation} root type `{type_name}` is not defined")]
    UndefinedRootOperationType {
        operation: OperationType,
        type_name: String,
    },

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}
