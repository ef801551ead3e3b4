use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;

/// Any named type defined within a [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug)]
pub enum GraphQLType {
    Scalar(ScalarType),
    Object(ObjectType),
    Interface(InterfaceType),
    Union(UnionType),
    Enum(EnumType),
    InputObject(InputObjectType),
}

impl GraphQLType {
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Union(t) => t.name(),
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Scalar(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Union(t) => t.description(),
            Self::Enum(t) => t.description(),
            Self::InputObject(t) => t.description(),
        }
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        GraphQLTypeKind::from(self)
    }

    /// Scalars, enums and input objects can be used for arguments and
    /// variables.
    pub fn is_input_type(&self) -> bool {
        matches!(self, Self::Scalar(_) | Self::Enum(_) | Self::InputObject(_))
    }

    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Scalar(_) | Self::Enum(_))
    }

    /// Objects, interfaces and unions: the types that take a selection set.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Interface(_) | Self::Union(_))
    }

    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Union(_))
    }

    /// The output fields of an object or interface type.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            Self::Object(t) => Some(t.fields()),
            Self::Interface(t) => Some(t.fields()),
            _ => None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().and_then(|fields| fields.get(name))
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        match self {
            Self::Scalar(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Self::Object(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        match self {
            Self::Interface(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        match self {
            Self::Union(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            Self::Enum(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        match self {
            Self::InputObject(t) => Some(t),
            _ => None,
        }
    }
}
