use crate::schema::SchemaBuildError;
use crate::types::EnumTypeBuilder;
use crate::types::GraphQLType;
use crate::types::InputObjectTypeBuilder;
use crate::types::InterfaceTypeBuilder;
use crate::types::ObjectTypeBuilder;
use crate::types::ScalarType;
use crate::types::UnionTypeBuilder;

/// A type waiting to be added to a schema. See
/// [`SchemaBuilder::register_type()`](crate::schema::SchemaBuilder::register_type).
#[derive(Debug)]
pub enum TypeBuilder {
    Scalar(ScalarType),
    Object(ObjectTypeBuilder),
    Interface(InterfaceTypeBuilder),
    Union(UnionTypeBuilder),
    Enum(EnumTypeBuilder),
    InputObject(InputObjectTypeBuilder),
}

impl TypeBuilder {
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

    /// Resolves field thunks and checks the type in isolation.
    pub(crate) fn build(self) -> Result<GraphQLType, SchemaBuildError> {
        Ok(match self {
            Self::Scalar(t) => GraphQLType::Scalar(t),
            Self::Object(t) => GraphQLType::Object(t.build()?),
            Self::Interface(t) => GraphQLType::Interface(t.build()?),
            Self::Union(t) => GraphQLType::Union(t.build()?),
            Self::Enum(t) => GraphQLType::Enum(t.build()?),
            Self::InputObject(t) => GraphQLType::InputObject(t.build()?),
        })
    }
}

impl From<ScalarType> for TypeBuilder {
    fn from(value: ScalarType) -> Self {
        Self::Scalar(value)
    }
}

impl From<ObjectTypeBuilder> for TypeBuilder {
    fn from(value: ObjectTypeBuilder) -> Self {
        Self::Object(value)
    }
}

impl From<InterfaceTypeBuilder> for TypeBuilder {
    fn from(value: InterfaceTypeBuilder) -> Self {
        Self::Interface(value)
    }
}

impl From<UnionTypeBuilder> for TypeBuilder {
    fn from(value: UnionTypeBuilder) -> Self {
        Self::Union(value)
    }
}

impl From<EnumTypeBuilder> for TypeBuilder {
    fn from(value: EnumTypeBuilder) -> Self {
        Self::Enum(value)
    }
}

impl From<InputObjectTypeBuilder> for TypeBuilder {
    fn from(value: InputObjectTypeBuilder) -> Self {
        Self::InputObject(value)
    }
}
