use crate::types::Field;
use indexmap::IndexMap;

/// State shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, Field>,
}

impl ObjectOrInterfaceTypeData {
    pub(crate) fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.get_mut(name)
    }
}
