use crate::resolver::ResolveFn;
use crate::resolver::SubscribeFn;
use crate::types::DeprecationState;
use crate::types::InputValue;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// An output field of an object or interface type.
#[derive(Clone, Debug)]
pub struct Field {
    name: String,
    description: Option<String>,
    arguments: IndexMap<String, InputValue>,
    type_annotation: TypeAnnotation,
    deprecation_reason: Option<String>,
    resolve: Option<ResolveFn>,
    subscribe: Option<SubscribeFn>,
    cost: u64,
}

impl Field {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            name: name.into(),
            description: None,
            arguments: IndexMap::new(),
            type_annotation,
            deprecation_reason: None,
            resolve: None,
            subscribe: None,
            cost: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_argument(mut self, argument: InputValue) -> Self {
        self.arguments.insert(argument.name().to_string(), argument);
        self
    }

    pub fn with_deprecation_reason(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn with_resolver(mut self, resolve: ResolveFn) -> Self {
        self.resolve = Some(resolve);
        self
    }

    pub fn with_subscriber(mut self, subscribe: SubscribeFn) -> Self {
        self.subscribe = Some(subscribe);
        self
    }

    /// The weight of this field in [`query_complexity()`](crate::query_complexity).
    pub fn with_cost(mut self, cost: u64) -> Self {
        self.cost = cost;
        self
    }

    pub(crate) fn set_resolver(&mut self, resolve: ResolveFn) {
        self.resolve = Some(resolve);
    }

    pub(crate) fn set_subscriber(&mut self, subscribe: SubscribeFn) {
        self.subscribe = Some(subscribe);
    }

    pub(crate) fn arguments_mut(&mut self) -> impl Iterator<Item = &mut InputValue> {
        self.arguments.values_mut()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The arguments of this field, in definition order.
    pub fn arguments(&self) -> &IndexMap<String, InputValue> {
        &self.arguments
    }

    pub fn argument(&self, name: &str) -> Option<&InputValue> {
        self.arguments.get(name)
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        DeprecationState::from_reason(self.deprecation_reason.as_deref())
    }

    pub fn resolver(&self) -> Option<&ResolveFn> {
        self.resolve.as_ref()
    }

    pub fn subscriber(&self) -> Option<&SubscribeFn> {
        self.subscribe.as_ref()
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }
}
