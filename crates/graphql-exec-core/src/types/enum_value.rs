use crate::types::DeprecationState;
use crate::Value;

/// One value of an [`EnumType`](crate::types::EnumType).
///
/// `value` is the internal representation resolvers produce and receive.
/// It defaults to the value's name as a string.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    name: String,
    description: Option<String>,
    value: Value,
    deprecation_reason: Option<String>,
}

impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: Value::String(name.clone()),
            name,
            description: None,
            deprecation_reason: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_deprecation_reason(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        DeprecationState::from_reason(self.deprecation_reason.as_deref())
    }
}
