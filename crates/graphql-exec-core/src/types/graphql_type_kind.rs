use crate::types::GraphQLType;
use crate::types::TypeAnnotation;

/// The kind of a type, as reported by `__Type.kind` in introspection.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl GraphQLTypeKind {
    /// The `__TypeKind` enum value name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
        }
    }

    pub fn all() -> [Self; 8] {
        [
            Self::Scalar,
            Self::Object,
            Self::Interface,
            Self::Union,
            Self::Enum,
            Self::InputObject,
            Self::List,
            Self::NonNull,
        ]
    }

    /// The kind of the outermost level of `annotation`, given the kind of
    /// the named type at its core.
    pub fn of_annotation(annotation: &TypeAnnotation, named_kind: Self) -> Self {
        if !annotation.nullable() {
            Self::NonNull
        } else if annotation.list_item().is_some() {
            Self::List
        } else {
            named_kind
        }
    }
}

impl std::convert::From<&GraphQLType> for GraphQLTypeKind {
    fn from(value: &GraphQLType) -> Self {
        match value {
            GraphQLType::Scalar(_) => Self::Scalar,
            GraphQLType::Object(_) => Self::Object,
            GraphQLType::Interface(_) => Self::Interface,
            GraphQLType::Union(_) => Self::Union,
            GraphQLType::Enum(_) => Self::Enum,
            GraphQLType::InputObject(_) => Self::InputObject,
        }
    }
}

impl std::fmt::Display for GraphQLTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
