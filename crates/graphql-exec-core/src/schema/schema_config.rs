use crate::extension::Extension;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::ObjectTypeBuilder;
use crate::types::TypeBuilder;
use std::sync::Arc;

/// Everything needed to build a [`Schema`] in one value.
///
/// An alternative to chaining [`SchemaBuilder`] calls when the parts of a
/// schema are assembled in different places.
pub struct SchemaConfig {
    pub query: ObjectTypeBuilder,
    pub mutation: Option<ObjectTypeBuilder>,
    pub subscription: Option<ObjectTypeBuilder>,
    /// Types that aren't reachable through the root types' builders.
    pub types: Vec<TypeBuilder>,
    /// Custom directives. `@include`, `@skip` and `@deprecated` are always
    /// present.
    pub directives: Vec<Directive>,
    pub extensions: Vec<Arc<dyn Extension>>,
}

impl SchemaConfig {
    pub fn new(query: ObjectTypeBuilder) -> Self {
        Self {
            query,
            mutation: None,
            subscription: None,
            types: vec![],
            directives: vec![],
            extensions: vec![],
        }
    }

    pub fn build(self) -> Result<Schema, SchemaBuildError> {
        Schema::try_from(self)
    }
}

impl TryFrom<SchemaConfig> for Schema {
    type Error = SchemaBuildError;

    fn try_from(config: SchemaConfig) -> Result<Self, Self::Error> {
        let mut builder = SchemaBuilder::new().query(config.query);
        if let Some(mutation) = config.mutation {
            builder = builder.mutation(mutation);
        }
        if let Some(subscription) = config.subscription {
            builder = builder.subscription(subscription);
        }
        for type_ in config.types {
            builder = builder.register_type(type_);
        }
        for directive in config.directives {
            builder = builder.directive(directive);
        }
        for extension in config.extensions {
            builder = builder.shared_extension(extension);
        }
        builder.build()
    }
}

impl std::fmt::Debug for SchemaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaConfig")
            .field("query", &self.query)
            .field("mutation", &self.mutation)
            .field("subscription", &self.subscription)
            .field("types", &self.types)
            .field("directives", &self.directives)
            .field("extensions", &self.extensions.len())
            .finish()
    }
}
