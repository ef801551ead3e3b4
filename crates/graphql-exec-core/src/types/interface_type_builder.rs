use crate::resolver::ResolveInfo;
use crate::resolver::TypeResolveFn;
use crate::schema::SchemaBuildError;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ThunkedList;
use crate::types::object_type_builder::fields_by_name;
use crate::Value;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Builds an [`InterfaceType`]. See
/// [`ObjectTypeBuilder`](crate::types::ObjectTypeBuilder) for how fields
/// and field thunks work.
#[derive(Debug)]
pub struct InterfaceTypeBuilder {
    name: String,
    description: Option<String>,
    fields: ThunkedList<Field>,
    resolve_type: Option<TypeResolveFn>,
}

impl InterfaceTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: ThunkedList::new(),
            resolve_type: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, thunk: impl FnOnce() -> Vec<Field> + Send + 'static) -> Self {
        self.fields.push_thunk(thunk);
        self
    }

    /// Names the concrete object type of a resolved value.
    pub fn resolve_type<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value, &ResolveInfo<'_>) -> Option<String> + Send + Sync + 'static,
    {
        self.resolve_type = Some(TypeResolveFn::new(f));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn build(self) -> Result<InterfaceType> {
        let fields = fields_by_name(&self.name, self.fields.resolve())?;
        Ok(InterfaceType {
            data: ObjectOrInterfaceTypeData {
                name: self.name,
                description: self.description,
                fields,
            },
            resolve_type: self.resolve_type,
        })
    }
}
