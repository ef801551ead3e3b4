use crate::error::CoercionError;
use crate::extension::Extension;
use crate::introspection;
use crate::types::Directive;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::values;
use crate::Value;
use graphql_exec_parser::ast;
use graphql_exec_parser::ast::OperationType;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

/// A built, immutable GraphQL schema.
///
/// Schemas are built with a [`SchemaBuilder`](crate::schema::SchemaBuilder)
/// (or from a [`SchemaConfig`](crate::schema::SchemaConfig)) and are then
/// shared freely between requests, typically behind an `Arc`.
pub struct Schema {
    pub(crate) query_type: String,
    pub(crate) mutation_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
    pub(crate) directives: IndexMap<String, Directive>,
    pub(crate) implementations: HashMap<String, Vec<String>>,
    pub(crate) possible_types: HashMap<String, Vec<String>>,
    pub(crate) possible_type_sets: HashMap<String, HashSet<String>>,
    pub(crate) extensions: Vec<Arc<dyn Extension>>,
    pub(crate) typename_field: Field,
    pub(crate) schema_field: Field,
    pub(crate) type_field: Field,
}

impl Schema {
    pub(crate) fn new(
        query_type: String,
        mutation_type: Option<String>,
        subscription_type: Option<String>,
        types: IndexMap<String, GraphQLType>,
        directives: IndexMap<String, Directive>,
        extensions: Vec<Arc<dyn Extension>>,
    ) -> Self {
        // Both indexes keep the order in which object types were registered.
        let mut implementations: HashMap<String, Vec<String>> = HashMap::new();
        let mut possible_types: HashMap<String, Vec<String>> = HashMap::new();
        for type_ in types.values() {
            match type_ {
                GraphQLType::Object(obj_type) => {
                    for iface_name in obj_type.interface_names() {
                        let impls = implementations.entry(iface_name.clone()).or_default();
                        if !impls.contains(&obj_type.data.name) {
                            impls.push(obj_type.data.name.clone());
                        }
                    }
                },
                GraphQLType::Union(union_type) => {
                    possible_types.insert(
                        union_type.name.clone(),
                        union_type.members.clone(),
                    );
                },
                _ => (),
            }
        }
        for (iface_name, impls) in &implementations {
            possible_types.insert(iface_name.clone(), impls.clone());
        }
        let possible_type_sets = possible_types.iter()
            .map(|(name, members)| (name.clone(), members.iter().cloned().collect()))
            .collect();

        let (typename_field, schema_field, type_field) = introspection::meta_fields();
        Self {
            query_type,
            mutation_type,
            subscription_type,
            types,
            directives,
            implementations,
            possible_types,
            possible_type_sets,
            extensions,
            typename_field,
            schema_field,
            type_field,
        }
    }

    // =========================================================================
    // Root operation types
    // =========================================================================

    pub fn query_type_name(&self) -> &str {
        &self.query_type
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type.as_deref()
    }

    /// The root object type for operations of the given kind, if the schema
    /// supports that kind of operation.
    pub fn root_type(&self, operation: OperationType) -> Option<&ObjectType> {
        let type_name = match operation {
            OperationType::Query => Some(self.query_type.as_str()),
            OperationType::Mutation => self.mutation_type.as_deref(),
            OperationType::Subscription => self.subscription_type.as_deref(),
        }?;
        self.get_type(type_name).and_then(GraphQLType::as_object)
    }

    // =========================================================================
    // Types and directives
    // =========================================================================

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Every named type of the schema (including built-in scalars and
    /// introspection types) in registration order.
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directives.get(name)
    }

    pub fn directives(&self) -> &IndexMap<String, Directive> {
        &self.directives
    }

    pub fn extensions(&self) -> &[Arc<dyn Extension>] {
        &self.extensions
    }

    /// The definition of `field_name` on the named composite type,
    /// including the implicit `__typename` field and (on the query root)
    /// the `__schema` and `__type` fields.
    pub fn field_def(&self, parent_type_name: &str, field_name: &str) -> Option<&Field> {
        let parent_type = self.get_type(parent_type_name)?;
        match field_name {
            "__typename" if parent_type.is_composite() => Some(&self.typename_field),
            "__schema" if parent_type_name == self.query_type => Some(&self.schema_field),
            "__type" if parent_type_name == self.query_type => Some(&self.type_field),
            _ => parent_type.field(field_name),
        }
    }

    // =========================================================================
    // Abstract types
    // =========================================================================

    /// The object types that implement the named interface.
    pub fn implementations(&self, interface_name: &str) -> &[String] {
        self.implementations.get(interface_name).map_or(&[], Vec::as_slice)
    }

    /// The object types a value of the named type may have at runtime: the
    /// type itself for objects, members for unions, implementations for
    /// interfaces.
    pub fn possible_types<'a>(&'a self, type_name: &'a str) -> Vec<&'a str> {
        match self.get_type(type_name) {
            Some(GraphQLType::Object(_)) => vec![type_name],
            Some(GraphQLType::Interface(_) | GraphQLType::Union(_)) => self.possible_types
                .get(type_name)
                .map(|names| names.iter().map(String::as_str).collect())
                .unwrap_or_default(),
            _ => vec![],
        }
    }

    /// Whether `object_type_name` is one of the possible types of the
    /// abstract type named `abstract_type_name`.
    pub fn is_possible_type(&self, abstract_type_name: &str, object_type_name: &str) -> bool {
        self.possible_type_sets
            .get(abstract_type_name)
            .is_some_and(|names| names.contains(object_type_name))
    }

    /// Whether two composite types can have a runtime object type in
    /// common.
    pub fn types_overlap(&self, type_a: &str, type_b: &str) -> bool {
        if type_a == type_b {
            return true;
        }
        let possible_a = self.possible_types(type_a);
        self.possible_types(type_b)
            .into_iter()
            .any(|name| possible_a.contains(&name))
    }

    // =========================================================================
    // Literal coercion
    // =========================================================================

    /// Checks that `literal` can be coerced to `type_annotation`. On failure
    /// returns one message per problem found.
    pub fn is_valid_literal(
        &self,
        type_annotation: &TypeAnnotation,
        literal: &ast::Value,
    ) -> Result<(), Vec<String>> {
        let problems = values::is_valid_literal_value(self, type_annotation, literal);
        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }

    /// Coerces an optional literal to `type_annotation`, resolving variables
    /// from `variables`. A missing literal is `null` for nullable types and
    /// an error for non-null ones.
    pub fn coerce_value(
        &self,
        type_annotation: &TypeAnnotation,
        literal: Option<&ast::Value>,
        variables: &IndexMap<String, Value>,
    ) -> Result<Value, CoercionError> {
        let Some(literal) = literal else {
            if type_annotation.nullable() {
                return Ok(Value::Null);
            }
            return Err(CoercionError::new(
                format!("Expected non-null value of type \"{type_annotation}\" but got nothing."),
                vec![],
            ));
        };
        values::value_from_ast(self, type_annotation, literal, Some(variables)).ok_or_else(|| {
            CoercionError::new(
                format!(
                    "Expected value of type \"{type_annotation}\" but got: {}.",
                    graphql_exec_parser::print_value(literal),
                ),
                crate::error::locations_of([literal.loc()]),
            )
        })
    }
}

impl std::fmt::Debug for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("query_type", &self.query_type)
            .field("mutation_type", &self.mutation_type)
            .field("subscription_type", &self.subscription_type)
            .field("types", &self.types.keys().collect::<Vec<_>>())
            .field("directives", &self.directives.keys().collect::<Vec<_>>())
            .field("extensions", &self.extensions.len())
            .finish()
    }
}
