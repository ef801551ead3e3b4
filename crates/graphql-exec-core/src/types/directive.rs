use crate::types::DirectiveLocation;
use crate::types::InputValue;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;

/// A directive definition: `directive @name(args) [repeatable] on LOCATIONS`.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    name: String,
    description: Option<String>,
    locations: Vec<DirectiveLocation>,
    arguments: IndexMap<String, InputValue>,
    repeatable: bool,
}

impl Directive {
    pub fn new(name: impl Into<String>, locations: Vec<DirectiveLocation>) -> Self {
        Self {
            name: name.into(),
            description: None,
            locations,
            arguments: IndexMap::new(),
            repeatable: false,
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

    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
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

    pub fn locations(&self) -> &[DirectiveLocation] {
        &self.locations
    }

    pub fn arguments(&self) -> &IndexMap<String, InputValue> {
        &self.arguments
    }

    pub fn argument(&self, name: &str) -> Option<&InputValue> {
        self.arguments.get(name)
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    // =========================================================================
    // Built-in directives
    // =========================================================================

    /// `@skip(if: Boolean!)`
    pub fn skip() -> Self {
        Self::new("skip", vec![
            DirectiveLocation::Field,
            DirectiveLocation::FragmentSpread,
            DirectiveLocation::InlineFragment,
        ])
        .with_description(
            "Directs the executor to skip this field or fragment when the `if` \
            argument is true.",
        )
        .with_argument(
            InputValue::new("if", TypeAnnotation::named("Boolean").non_null())
                .with_description("Skipped when true."),
        )
    }

    /// `@include(if: Boolean!)`
    pub fn include() -> Self {
        Self::new("include", vec![
            DirectiveLocation::Field,
            DirectiveLocation::FragmentSpread,
            DirectiveLocation::InlineFragment,
        ])
        .with_description(
            "Directs the executor to include this field or fragment only when \
            the `if` argument is true.",
        )
        .with_argument(
            InputValue::new("if", TypeAnnotation::named("Boolean").non_null())
                .with_description("Included when true."),
        )
    }

    /// `@deprecated(reason: String = "No longer supported")`
    pub fn deprecated() -> Self {
        Self::new("deprecated", vec![
            DirectiveLocation::FieldDefinition,
            DirectiveLocation::EnumValue,
        ])
        .with_description("Marks an element of a GraphQL schema as no longer supported.")
        .with_argument(
            InputValue::new("reason", TypeAnnotation::named("String"))
                .with_description(
                    "Explains why this element was deprecated, usually also \
                    including a suggestion for how to access supported similar \
                    data. Formatted in [Markdown](https://daringfireball.net/projects/markdown/).",
                )
                .with_default_value(Value::from(DEFAULT_DEPRECATION_REASON)),
        )
    }

    pub fn builtins() -> [Self; 3] {
        [Self::include(), Self::skip(), Self::deprecated()]
    }
}

pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";
