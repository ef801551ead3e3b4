use crate::types::Field;
use crate::types::GraphQLNamedType;
use indexmap::IndexMap;

/// Accessors shared by the types that declare output fields.
pub trait ObjectOrInterfaceTypeTrait: GraphQLNamedType {
    /// This type's fields, in definition order (fields added by type
    /// extensions come after the original definition's).
    fn fields(&self) -> &IndexMap<String, Field>;

    fn field(&self, name: &str) -> Option<&Field>;
}
