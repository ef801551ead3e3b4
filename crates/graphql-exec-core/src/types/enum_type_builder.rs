use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::EnumValue;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Builds an [`EnumType`].
#[derive(Debug)]
pub struct EnumTypeBuilder {
    name: String,
    description: Option<String>,
    values: Vec<EnumValue>,
}

impl EnumTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: vec![],
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn value(mut self, value: EnumValue) -> Self {
        self.values.push(value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn build(self) -> Result<EnumType> {
        if self.values.is_empty() {
            return Err(SchemaBuildError::EnumWithNoValues { type_name: self.name });
        }
        let mut values = IndexMap::with_capacity(self.values.len());
        for value in self.values {
            if matches!(value.name(), "true" | "false" | "null") {
                return Err(SchemaBuildError::InvalidEnumValueName {
                    enum_name: self.name,
                    value_name: value.name().to_string(),
                });
            }
            if values.contains_key(value.name()) {
                return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                    enum_name: self.name,
                    value_name: value.name().to_string(),
                });
            }
            values.insert(value.name().to_string(), value);
        }
        Ok(EnumType {
            name: self.name,
            description: self.description,
            values,
        })
    }
}
