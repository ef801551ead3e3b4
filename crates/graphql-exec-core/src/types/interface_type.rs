use crate::resolver::TypeResolveFn;
use crate::types::Field;
use crate::types::GraphQLNamedType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug)]
pub struct InterfaceType {
    pub(crate) data: ObjectOrInterfaceTypeData,
    pub(crate) resolve_type: Option<TypeResolveFn>,
}

impl InterfaceType {
    pub fn resolve_type(&self) -> Option<&TypeResolveFn> {
        self.resolve_type.as_ref()
    }
}

#[inherent]
impl GraphQLNamedType for InterfaceType {
    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn description(&self) -> Option<&str> {
        self.data.description.as_deref()
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.data.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.data.fields.get(name)
    }
}
