use crate::resolver::IsTypeOfFn;
use crate::types::Field;
use crate::types::GraphQLNamedType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug)]
pub struct ObjectType {
    pub(crate) data: ObjectOrInterfaceTypeData,
    pub(crate) interfaces: Vec<String>,
    pub(crate) is_type_of: Option<IsTypeOfFn>,
}

impl ObjectType {
    /// The names of the interfaces this type implements, in declaration
    /// order.
    pub fn interface_names(&self) -> &[String] {
        &self.interfaces
    }

    pub fn implements(&self, interface_name: &str) -> bool {
        self.interfaces.iter().any(|name| name == interface_name)
    }

    pub fn is_type_of(&self) -> Option<&IsTypeOfFn> {
        self.is_type_of.as_ref()
    }
}

#[inherent]
impl GraphQLNamedType for ObjectType {
    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn description(&self) -> Option<&str> {
        self.data.description.as_deref()
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.data.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.data.fields.get(name)
    }
}
