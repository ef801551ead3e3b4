use crate::schema::SchemaBuildError;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::ThunkedList;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Builds an [`InputObjectType`]. Like object fields, input fields can be
/// supplied through thunks.
#[derive(Debug)]
pub struct InputObjectTypeBuilder {
    name: String,
    description: Option<String>,
    fields: ThunkedList<InputValue>,
}

impl InputObjectTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: ThunkedList::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: InputValue) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, thunk: impl FnOnce() -> Vec<InputValue> + Send + 'static) -> Self {
        self.fields.push_thunk(thunk);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn build(self) -> Result<InputObjectType> {
        let mut fields = IndexMap::new();
        for field in self.fields.resolve() {
            if fields.contains_key(field.name()) {
                return Err(SchemaBuildError::DuplicateFieldDefinition {
                    type_name: self.name,
                    field_name: field.name().to_string(),
                });
            }
            fields.insert(field.name().to_string(), field);
        }
        Ok(InputObjectType {
            name: self.name,
            description: self.description,
            fields,
        })
    }
}
