use crate::resolver::IsTypeOfFn;
use crate::resolver::ResolveInfo;
use crate::schema::SchemaBuildError;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ThunkedList;
use crate::Value;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Builds an [`ObjectType`].
///
/// Fields may be given directly or through thunks, so that types can refer
/// to each other (or to themselves) in any order:
///
/// ```rust
/// use graphql_exec_core::types::Field;
/// use graphql_exec_core::types::ObjectTypeBuilder;
/// use graphql_exec_core::types::TypeAnnotation;
///
/// let person = ObjectTypeBuilder::new("Person")
///     .field(Field::new("name", TypeAnnotation::named("String")))
///     .fields(|| vec![
///         Field::new("friends", TypeAnnotation::list(TypeAnnotation::named("Person"))),
///     ]);
/// # let _ = person;
/// ```
#[derive(Debug)]
pub struct ObjectTypeBuilder {
    name: String,
    description: Option<String>,
    interfaces: Vec<String>,
    fields: ThunkedList<Field>,
    is_type_of: Option<IsTypeOfFn>,
}

impl ObjectTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            interfaces: vec![],
            fields: ThunkedList::new(),
            is_type_of: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn interface(mut self, interface_name: impl Into<String>) -> Self {
        self.interfaces.push(interface_name.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds the fields produced by `thunk`, called once when the schema is
    /// built.
    pub fn fields(mut self, thunk: impl FnOnce() -> Vec<Field> + Send + 'static) -> Self {
        self.fields.push_thunk(thunk);
        self
    }

    pub fn is_type_of<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value, &ResolveInfo<'_>) -> bool + Send + Sync + 'static,
    {
        self.is_type_of = Some(IsTypeOfFn::new(f));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn build(self) -> Result<ObjectType> {
        let fields = fields_by_name(&self.name, self.fields.resolve())?;
        Ok(ObjectType {
            data: ObjectOrInterfaceTypeData {
                name: self.name,
                description: self.description,
                fields,
            },
            interfaces: self.interfaces,
            is_type_of: self.is_type_of,
        })
    }
}

pub(crate) fn fields_by_name(
    type_name: &str,
    fields: Vec<Field>,
) -> Result<IndexMap<String, Field>> {
    let mut by_name = IndexMap::with_capacity(fields.len());
    for field in fields {
        if by_name.contains_key(field.name()) {
            return Err(SchemaBuildError::DuplicateFieldDefinition {
                type_name: type_name.to_string(),
                field_name: field.name().to_string(),
            });
        }
        by_name.insert(field.name().to_string(), field);
    }
    Ok(by_name)
}
