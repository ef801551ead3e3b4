use crate::types::GraphQLNamedType;
use crate::types::InputValue;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug)]
pub struct InputObjectType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, InputValue>,
}

impl InputObjectType {
    pub fn fields(&self) -> &IndexMap<String, InputValue> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&InputValue> {
        self.fields.get(name)
    }
}

#[inherent]
impl GraphQLNamedType for InputObjectType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
