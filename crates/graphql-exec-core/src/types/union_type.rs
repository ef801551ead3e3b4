use crate::resolver::TypeResolveFn;
use crate::types::GraphQLNamedType;
use inherent::inherent;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug)]
pub struct UnionType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) members: Vec<String>,
    pub(crate) resolve_type: Option<TypeResolveFn>,
}

impl UnionType {
    /// The names of this union's member types, in declaration order.
    pub fn member_names(&self) -> &[String] {
        &self.members
    }

    pub fn resolve_type(&self) -> Option<&TypeResolveFn> {
        self.resolve_type.as_ref()
    }
}

#[inherent]
impl GraphQLNamedType for UnionType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
