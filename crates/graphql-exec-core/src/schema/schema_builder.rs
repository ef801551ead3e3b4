use crate::error::BoxError;
use crate::extension::Extension;
use crate::introspection;
use crate::resolver::EventStream;
use crate::resolver::IsTypeOfFn;
use crate::resolver::ResolveInfo;
use crate::resolver::ResolveParams;
use crate::resolver::Resolved;
use crate::resolver::SubscribeFn;
use crate::resolver::ResolveFn;
use crate::resolver::TypeResolveFn;
use crate::schema::InputObjectTypeValidator;
use crate::schema::ObjectOrInterfaceTypeValidator;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::schema::UnionTypeValidator;
use crate::types::Directive;
use crate::types::DirectiveLocation;
use crate::types::EnumTypeBuilder;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectTypeBuilder;
use crate::types::InputValue;
use crate::types::InterfaceTypeBuilder;
use crate::types::ObjectTypeBuilder;
use crate::types::ScalarType;
use crate::types::ScalarTypeBuilder;
use crate::types::TypeAnnotation;
use crate::types::TypeBuilder;
use crate::types::UnionTypeBuilder;
use crate::types::DEFAULT_DEPRECATION_REASON;
use crate::types::is_builtin_scalar_name;
use crate::values;
use crate::Value;
use graphql_exec_parser::ast;
use graphql_exec_parser::ast::OperationType;
use graphql_exec_parser::parse;
use graphql_exec_parser::ParseParams;
use graphql_exec_parser::Source;
use indexmap::IndexMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_DIRECTIVE_NAMES: [&str; 3] = ["include", "skip", "deprecated"];

/// Utility for building a [`Schema`].
///
/// Types can be registered in code, loaded from schema definition language,
/// or both. Resolvers for SDL-defined fields are attached by type and field
/// name:
///
/// ```rust
/// use graphql_exec_core::schema::SchemaBuilder;
/// use graphql_exec_core::Value;
///
/// let schema = SchemaBuilder::new()
///     .load_str("type Query { hello: String }")
///     .unwrap()
///     .resolver("Query", "hello", |_params| Ok(Value::from("world").into()))
///     .build()
///     .unwrap();
/// assert_eq!(schema.query_type_name(), "Query");
/// ```
pub struct SchemaBuilder {
    directive_defs: Vec<Directive>,
    extensions: Vec<Arc<dyn Extension>>,
    is_type_of_fns: Vec<(String, IsTypeOfFn)>,
    mutation_type: Option<String>,
    query_type: Option<String>,
    resolvers: Vec<(String, String, ResolveFn)>,
    sdl_scalars: IndexMap<String, ScalarType>,
    str_load_counter: u16,
    subscribers: Vec<(String, String, SubscribeFn)>,
    subscription_type: Option<String>,
    type_extensions: Vec<ObjectTypeExtension>,
    type_resolvers: Vec<(String, TypeResolveFn)>,
    types: Vec<TypeBuilder>,
}

/// Fields and interfaces added to an object type by `extend type`.
#[derive(Debug)]
struct ObjectTypeExtension {
    type_name: String,
    interfaces: Vec<String>,
    fields: Vec<Field>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            directive_defs: vec![],
            extensions: vec![],
            is_type_of_fns: vec![],
            mutation_type: None,
            query_type: None,
            resolvers: vec![],
            sdl_scalars: IndexMap::new(),
            str_load_counter: 0,
            subscribers: vec![],
            subscription_type: None,
            type_extensions: vec![],
            type_resolvers: vec![],
            types: vec![],
        }
    }

    // =========================================================================
    // Code-first registration
    // =========================================================================

    /// Registers `type_` and makes it the query root type.
    pub fn query(mut self, type_: ObjectTypeBuilder) -> Self {
        self.query_type = Some(type_.name().to_string());
        self.register_type(type_)
    }

    /// Registers `type_` and makes it the mutation root type.
    pub fn mutation(mut self, type_: ObjectTypeBuilder) -> Self {
        self.mutation_type = Some(type_.name().to_string());
        self.register_type(type_)
    }

    /// Registers `type_` and makes it the subscription root type.
    pub fn subscription(mut self, type_: ObjectTypeBuilder) -> Self {
        self.subscription_type = Some(type_.name().to_string());
        self.register_type(type_)
    }

    /// Adds a named type to the schema. Registering a scalar replaces an
    /// SDL `scalar` declaration of the same name.
    pub fn register_type(mut self, type_: impl Into<TypeBuilder>) -> Self {
        self.types.push(type_.into());
        self
    }

    /// Adds a custom directive definition.
    pub fn directive(mut self, directive: Directive) -> Self {
        self.directive_defs.push(directive);
        self
    }

    pub fn extension(self, extension: impl Extension + 'static) -> Self {
        self.shared_extension(Arc::new(extension))
    }

    /// Adds an extension that is also held elsewhere.
    pub fn shared_extension(mut self, extension: Arc<dyn Extension>) -> Self {
        self.extensions.push(extension);
        self
    }

    // =========================================================================
    // Behavior for SDL-defined types
    // =========================================================================

    /// Sets the resolver of `type_name.field_name`.
    pub fn resolver<F>(
        mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        f: F,
    ) -> Self
    where
        F: for<'r> Fn(ResolveParams<'r>) -> std::result::Result<Resolved, BoxError>
            + Send
            + Sync
            + 'static,
    {
        self.resolvers.push((type_name.into(), field_name.into(), ResolveFn::new(f)));
        self
    }

    /// Sets the function creating the event stream of the subscription
    /// field `type_name.field_name`.
    pub fn subscriber<F>(
        mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        f: F,
    ) -> Self
    where
        F: for<'r> Fn(ResolveParams<'r>) -> std::result::Result<EventStream, BoxError>
            + Send
            + Sync
            + 'static,
    {
        self.subscribers.push((type_name.into(), field_name.into(), SubscribeFn::new(f)));
        self
    }

    /// Sets how values of the interface or union `type_name` map to their
    /// runtime object type.
    pub fn type_resolver<F>(mut self, type_name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Value, &ResolveInfo<'_>) -> Option<String> + Send + Sync + 'static,
    {
        self.type_resolvers.push((type_name.into(), TypeResolveFn::new(f)));
        self
    }

    pub fn is_type_of<F>(mut self, type_name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Value, &ResolveInfo<'_>) -> bool + Send + Sync + 'static,
    {
        self.is_type_of_fns.push((type_name.into(), IsTypeOfFn::new(f)));
        self
    }

    // =========================================================================
    // Schema definition language
    // =========================================================================

    /// Loads every type-system definition in `content`.
    pub fn load_str(mut self, content: &str) -> Result<Self> {
        let ctr = self.str_load_counter;
        self.str_load_counter = ctr.wrapping_add(1);
        let source = Source::new(content, Some(&format!("str://{ctr}")));
        let document = parse(ParseParams::from(source))?;
        self.load_document(&document)
    }

    pub fn load_document(mut self, document: &ast::Document) -> Result<Self> {
        for def in &document.definitions {
            self.visit_ast_def(def)?;
        }
        Ok(self)
    }

    fn visit_ast_def(&mut self, def: &ast::Definition) -> Result<()> {
        match def {
            ast::Definition::Operation(_) | ast::Definition::Fragment(_) => {
                log::warn!("Ignoring an executable definition in a schema document");
                Ok(())
            },
            ast::Definition::Schema(schema_def) => self.visit_ast_schemablock_def(schema_def),
            ast::Definition::Scalar(scalar_def) => self.visit_ast_scalar_def(scalar_def),
            ast::Definition::Object(obj_def) => {
                let type_ = object_type_from_ast(obj_def)?;
                self.types.push(type_.into());
                Ok(())
            },
            ast::Definition::Interface(iface_def) => {
                let mut type_ = InterfaceTypeBuilder::new(&iface_def.name.value);
                for field_def in &iface_def.fields {
                    type_ = type_.field(field_from_ast(&iface_def.name.value, field_def)?);
                }
                self.types.push(type_.into());
                Ok(())
            },
            ast::Definition::Union(union_def) => {
                let mut type_ = UnionTypeBuilder::new(&union_def.name.value);
                for member in &union_def.types {
                    type_ = type_.member(&member.name.value);
                }
                self.types.push(type_.into());
                Ok(())
            },
            ast::Definition::Enum(enum_def) => {
                let mut type_ = EnumTypeBuilder::new(&enum_def.name.value);
                for value_def in &enum_def.values {
                    let mut value = EnumValue::new(&value_def.name.value);
                    if let Some(reason) = deprecation_reason(&value_def.directives) {
                        value = value.with_deprecation_reason(reason);
                    }
                    type_ = type_.value(value);
                }
                self.types.push(type_.into());
                Ok(())
            },
            ast::Definition::InputObject(input_def) => {
                let mut type_ = InputObjectTypeBuilder::new(&input_def.name.value);
                for field_def in &input_def.fields {
                    type_ = type_.field(input_value_from_ast(field_def));
                }
                self.types.push(type_.into());
                Ok(())
            },
            ast::Definition::TypeExtension(ext) => {
                let definition = &ext.definition;
                let type_name = &definition.name.value;
                self.type_extensions.push(ObjectTypeExtension {
                    type_name: type_name.clone(),
                    interfaces: definition.interfaces.iter()
                        .map(|iface| iface.name.value.clone())
                        .collect(),
                    fields: definition.fields.iter()
                        .map(|field_def| field_from_ast(type_name, field_def))
                        .collect::<Result<_>>()?,
                });
                Ok(())
            },
            ast::Definition::Directive(directive_def) =>
                self.visit_ast_directive_def(directive_def),
        }
    }

    fn visit_ast_directive_def(&mut self, def: &ast::DirectiveDefinition) -> Result<()> {
        let directive_name = &def.name.value;
        if BUILTIN_DIRECTIVE_NAMES.contains(&directive_name.as_str()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name: directive_name.to_string(),
            });
        }

        let mut locations = Vec::with_capacity(def.locations.len());
        for location in &def.locations {
            let location = DirectiveLocation::from_name(&location.value).ok_or_else(|| {
                SchemaBuildError::InvalidDirectiveLocation {
                    directive_name: directive_name.to_string(),
                    location: location.value.clone(),
                }
            })?;
            locations.push(location);
        }

        let mut directive = Directive::new(directive_name, locations);
        for argument in arguments_from_ast(&format!("@{directive_name}"), &def.arguments)? {
            directive = directive.with_argument(argument);
        }
        if def.repeatable {
            directive = directive.repeatable();
        }
        self.directive_defs.push(directive);
        Ok(())
    }

    fn visit_ast_scalar_def(&mut self, def: &ast::ScalarDefinition) -> Result<()> {
        let type_name = &def.name.value;
        if is_builtin_scalar_name(type_name) {
            return Ok(());
        }
        if self.sdl_scalars.contains_key(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
            });
        }
        self.sdl_scalars.insert(
            type_name.to_string(),
            ScalarTypeBuilder::new(type_name).build(),
        );
        Ok(())
    }

    fn visit_ast_schemablock_def(&mut self, schema_def: &ast::SchemaDefinition) -> Result<()> {
        for operation_type_def in &schema_def.operation_types {
            let operation = operation_type_def.operation;
            let root_type = match operation {
                OperationType::Query => &mut self.query_type,
                OperationType::Mutation => &mut self.mutation_type,
                OperationType::Subscription => &mut self.subscription_type,
            };
            if root_type.is_some() {
                return Err(SchemaBuildError::DuplicateOperationDefinition { operation });
            }
            *root_type = Some(operation_type_def.named_type.name.value.clone());
        }
        Ok(())
    }

    // =========================================================================
    // Building
    // =========================================================================

    /// Resolves every field thunk, checks the assembled type graph and
    /// returns the finished schema.
    pub fn build(self) -> Result<Schema> {
        log::debug!(
            "Building schema from {} type definition(s) and {} SDL scalar(s)",
            self.types.len(),
            self.sdl_scalars.len(),
        );

        let mut types = IndexMap::new();
        for type_builder in self.types {
            let type_name = type_builder.name().to_string();
            validate_name(&type_name)?;
            let replaces_sdl_scalar =
                matches!(type_builder, TypeBuilder::Scalar(_))
                && self.sdl_scalars.contains_key(&type_name);
            if types.contains_key(&type_name)
                || is_builtin_scalar_name(&type_name)
                || (self.sdl_scalars.contains_key(&type_name) && !replaces_sdl_scalar) {
                return Err(SchemaBuildError::DuplicateTypeDefinition { type_name });
            }
            types.insert(type_name, type_builder.build()?);
        }
        for (type_name, scalar) in self.sdl_scalars {
            if !types.contains_key(&type_name) {
                validate_name(&type_name)?;
                types.insert(type_name, GraphQLType::Scalar(scalar));
            }
        }
        for scalar_name in ["String", "Int", "Float", "Boolean", "ID"] {
            if let Some(scalar) = ScalarType::builtin(scalar_name) {
                types.entry(scalar_name.to_string()).or_insert(GraphQLType::Scalar(scalar));
            }
        }

        apply_type_extensions(&mut types, self.type_extensions)?;
        for (type_name, field_name, resolve) in self.resolvers {
            field_mut(&mut types, &type_name, &field_name)?.set_resolver(resolve);
        }
        for (type_name, field_name, subscribe) in self.subscribers {
            field_mut(&mut types, &type_name, &field_name)?.set_subscriber(subscribe);
        }
        for (type_name, resolve_type) in self.type_resolvers {
            match types.get_mut(&type_name) {
                Some(GraphQLType::Interface(iface)) => iface.resolve_type = Some(resolve_type),
                Some(GraphQLType::Union(union_type)) =>
                    union_type.resolve_type = Some(resolve_type),
                _ => return Err(SchemaBuildError::TypeResolverForNonAbstractType { type_name }),
            }
        }
        for (type_name, is_type_of) in self.is_type_of_fns {
            match types.get_mut(&type_name) {
                Some(GraphQLType::Object(obj_type)) => obj_type.is_type_of = Some(is_type_of),
                _ => return Err(SchemaBuildError::IsTypeOfForNonObjectType { type_name }),
            }
        }
        validate_member_names(&types)?;

        for type_builder in introspection::types() {
            types.insert(type_builder.name().to_string(), type_builder.build()?);
        }

        let mut directives = IndexMap::new();
        for directive in Directive::builtins() {
            directives.insert(directive.name().to_string(), directive);
        }
        for directive in self.directive_defs {
            let directive_name = directive.name().to_string();
            if BUILTIN_DIRECTIVE_NAMES.contains(&directive_name.as_str()) {
                return Err(SchemaBuildError::RedefinitionOfBuiltinDirective { directive_name });
            }
            validate_name(&directive_name)?;
            if directives.contains_key(&directive_name) {
                return Err(SchemaBuildError::DuplicateDirectiveDefinition { directive_name });
            }
            for argument_name in directive.arguments().keys() {
                validate_name(argument_name)?;
            }
            directives.insert(directive_name, directive);
        }

        let query_type = resolve_root_type(&types, OperationType::Query, self.query_type)?
            .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type =
            resolve_root_type(&types, OperationType::Mutation, self.mutation_type)?;
        let subscription_type =
            resolve_root_type(&types, OperationType::Subscription, self.subscription_type)?;
        let roots = [
            (OperationType::Query, Some(&query_type)),
            (OperationType::Mutation, mutation_type.as_ref()),
            (OperationType::Subscription, subscription_type.as_ref()),
        ];
        for (i, (operation1, type1)) in roots.iter().enumerate() {
            for (operation2, type2) in &roots[i + 1..] {
                if let (Some(type1), Some(type2)) = (type1, type2)
                    && type1 == type2 {
                    return Err(SchemaBuildError::NonUniqueOperationTypes {
                        operation1: *operation1,
                        operation2: *operation2,
                        type_name: type1.to_string(),
                    });
                }
            }
        }

        let mut schema = Schema::new(
            query_type,
            mutation_type,
            subscription_type,
            types,
            directives,
            self.extensions,
        );
        validate_types(&schema)?;
        resolve_default_values(&mut schema)?;

        log::debug!(
            "Built schema with {} types and {} directives",
            schema.types.len(),
            schema.directives.len(),
        );
        Ok(schema)
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SchemaBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaBuilder")
            .field("query_type", &self.query_type)
            .field("mutation_type", &self.mutation_type)
            .field("subscription_type", &self.subscription_type)
            .field("types", &self.types)
            .field("sdl_scalars", &self.sdl_scalars.keys().collect::<Vec<_>>())
            .field("type_extensions", &self.type_extensions)
            .field("directive_defs", &self.directive_defs)
            .field("extensions", &self.extensions.len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// SDL conversion
// =============================================================================

fn object_type_from_ast(def: &ast::ObjectDefinition) -> Result<ObjectTypeBuilder> {
    let mut type_ = ObjectTypeBuilder::new(&def.name.value);
    for iface in &def.interfaces {
        type_ = type_.interface(&iface.name.value);
    }
    for field_def in &def.fields {
        type_ = type_.field(field_from_ast(&def.name.value, field_def)?);
    }
    Ok(type_)
}

fn field_from_ast(type_name: &str, def: &ast::FieldDefinition) -> Result<Field> {
    let mut field = Field::new(&def.name.value, TypeAnnotation::from_ast(&def.field_type));
    let parent_name = format!("{type_name}.{}", def.name.value);
    for argument in arguments_from_ast(&parent_name, &def.arguments)? {
        field = field.with_argument(argument);
    }
    if let Some(reason) = deprecation_reason(&def.directives) {
        field = field.with_deprecation_reason(reason);
    }
    Ok(field)
}

fn arguments_from_ast(
    parent_name: &str,
    defs: &[ast::InputValueDefinition],
) -> Result<Vec<InputValue>> {
    let mut arguments: Vec<InputValue> = Vec::with_capacity(defs.len());
    for def in defs {
        if arguments.iter().any(|arg| arg.name() == def.name.value) {
            return Err(SchemaBuildError::DuplicateArgumentDefinition {
                argument_name: def.name.value.clone(),
                parent_name: parent_name.to_string(),
            });
        }
        arguments.push(input_value_from_ast(def));
    }
    Ok(arguments)
}

fn input_value_from_ast(def: &ast::InputValueDefinition) -> InputValue {
    let input_value = InputValue::new(&def.name.value, TypeAnnotation::from_ast(&def.value_type));
    match &def.default_value {
        Some(literal) => input_value.with_default_literal(literal.clone()),
        None => input_value,
    }
}

/// The reason given by a `@deprecated` annotation, if there is one.
fn deprecation_reason(directives: &[ast::Directive]) -> Option<String> {
    let directive = directives.iter().find(|d| d.name.value == "deprecated")?;
    let reason = directive.arguments.iter()
        .find(|arg| arg.name.value == "reason")
        .and_then(|arg| match &arg.value {
            ast::Value::String(s) => Some(s.value.clone()),
            _ => None,
        });
    Some(reason.unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string()))
}

// =============================================================================
// Build helpers
// =============================================================================

fn apply_type_extensions(
    types: &mut IndexMap<String, GraphQLType>,
    extensions: Vec<ObjectTypeExtension>,
) -> Result<()> {
    for ext in extensions {
        let obj_type = match types.get_mut(&ext.type_name) {
            Some(GraphQLType::Object(obj_type)) => obj_type,
            Some(_) => return Err(SchemaBuildError::InvalidExtensionType {
                type_name: ext.type_name,
            }),
            None => return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name: ext.type_name,
            }),
        };
        for iface_name in ext.interfaces {
            if !obj_type.implements(&iface_name) {
                obj_type.interfaces.push(iface_name);
            }
        }
        for field in ext.fields {
            if obj_type.data.fields.contains_key(field.name()) {
                return Err(SchemaBuildError::DuplicateFieldDefinition {
                    field_name: field.name().to_string(),
                    type_name: ext.type_name,
                });
            }
            obj_type.data.fields.insert(field.name().to_string(), field);
        }
    }
    Ok(())
}

fn field_mut<'a>(
    types: &'a mut IndexMap<String, GraphQLType>,
    type_name: &str,
    field_name: &str,
) -> Result<&'a mut Field> {
    let field = match types.get_mut(type_name) {
        Some(GraphQLType::Object(obj_type)) => obj_type.data.field_mut(field_name),
        Some(GraphQLType::Interface(iface)) => iface.data.field_mut(field_name),
        _ => None,
    };
    field.ok_or_else(|| SchemaBuildError::ResolverForUndefinedField {
        field_name: field_name.to_string(),
        type_name: type_name.to_string(),
    })
}

fn resolve_root_type(
    types: &IndexMap<String, GraphQLType>,
    operation: OperationType,
    explicit_type_name: Option<String>,
) -> Result<Option<String>> {
    let Some(type_name) = explicit_type_name else {
        let default_type_name = match operation {
            OperationType::Query => "Query",
            OperationType::Mutation => "Mutation",
            OperationType::Subscription => "Subscription",
        };
        return Ok(match types.get(default_type_name) {
            Some(GraphQLType::Object(_)) => Some(default_type_name.to_string()),
            _ => None,
        });
    };
    match types.get(&type_name) {
        Some(GraphQLType::Object(_)) => Ok(Some(type_name)),
        Some(_) => Err(SchemaBuildError::InvalidRootOperationType { operation, type_name }),
        None => Err(SchemaBuildError::UndefinedRootOperationType { operation, type_name }),
    }
}

/// Whether `name` matches `/^[_a-zA-Z][_a-zA-Z0-9]*$/`.
pub(crate) fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

fn validate_name(name: &str) -> Result<()> {
    if !is_valid_name(name) {
        return Err(SchemaBuildError::InvalidName { name: name.to_string() });
    }
    if name.starts_with("__") {
        return Err(SchemaBuildError::InvalidDunderPrefixedName { name: name.to_string() });
    }
    Ok(())
}

/// Checks the names of fields, arguments and input fields. Enum value
/// names are checked by the enum builder.
fn validate_member_names(types: &IndexMap<String, GraphQLType>) -> Result<()> {
    for type_ in types.values() {
        match type_ {
            GraphQLType::Object(_) | GraphQLType::Interface(_) => {
                for field in type_.fields().into_iter().flat_map(|fields| fields.values()) {
                    validate_name(field.name())?;
                    for argument_name in field.arguments().keys() {
                        validate_name(argument_name)?;
                    }
                }
            },
            GraphQLType::InputObject(input_type) => {
                for field_name in input_type.fields.keys() {
                    validate_name(field_name)?;
                }
            },
            GraphQLType::Enum(enum_type) => {
                for value_name in enum_type.values.keys() {
                    if !is_valid_name(value_name) {
                        return Err(SchemaBuildError::InvalidName { name: value_name.clone() });
                    }
                }
            },
            GraphQLType::Scalar(_) | GraphQLType::Union(_) => (),
        }
    }
    Ok(())
}

fn validate_types(schema: &Schema) -> Result<()> {
    let mut errors = vec![];
    for type_ in schema.types.values() {
        match type_ {
            GraphQLType::Enum(_) | GraphQLType::Scalar(_) => (),

            GraphQLType::InputObject(type_) => errors.append(
                &mut InputObjectTypeValidator::new(type_, schema).validate()
            ),

            GraphQLType::Interface(type_) => errors.append(
                &mut ObjectOrInterfaceTypeValidator::new(
                    &type_.data.name,
                    &type_.data.fields,
                    &[],
                    schema,
                ).validate()
            ),

            GraphQLType::Object(type_) => errors.append(
                &mut ObjectOrInterfaceTypeValidator::new(
                    &type_.data.name,
                    &type_.data.fields,
                    &type_.interfaces,
                    schema,
                ).validate()
            ),

            GraphQLType::Union(type_) => errors.append(
                &mut UnionTypeValidator::new(type_, schema).validate()
            ),
        }
    }

    for directive in schema.directives.values() {
        for (argument_name, argument) in directive.arguments() {
            let innermost_type_name = argument.type_annotation().innermost_name();
            match schema.get_type(innermost_type_name) {
                Some(type_) if !type_.is_input_type() => errors.push(
                    TypeValidationError::InvalidArgumentWithOutputOnlyType {
                        argument_name: argument_name.to_string(),
                        output_only_type_name: innermost_type_name.to_string(),
                        parent_name: format!("@{}", directive.name()),
                    }
                ),
                Some(_) => (),
                None => errors.push(TypeValidationError::UndefinedTypeName {
                    referenced_by: format!("@{}({argument_name}:)", directive.name()),
                    undefined_type_name: innermost_type_name.to_string(),
                }),
            }
        }
    }

    if !errors.is_empty() {
        return Err(SchemaBuildError::TypeValidationErrors { errors });
    }
    Ok(())
}

/// Where a default literal was declared.
enum DefaultValueSite {
    FieldArgument {
        type_name: String,
        field_name: String,
        argument_name: String,
    },
    InputField {
        type_name: String,
        field_name: String,
    },
    DirectiveArgument {
        directive_name: String,
        argument_name: String,
    },
}

/// Coerces the default literals of SDL-defined arguments and input fields
/// now that every type is known.
fn resolve_default_values(schema: &mut Schema) -> Result<()> {
    let mut resolved = vec![];
    for type_ in schema.types.values() {
        match type_ {
            GraphQLType::Object(_) | GraphQLType::Interface(_) => {
                for field in type_.fields().into_iter().flat_map(|fields| fields.values()) {
                    for argument in field.arguments().values() {
                        let parent_name = format!("{}.{}", type_.name(), field.name());
                        if let Some(value) = coerce_default(schema, &parent_name, argument)? {
                            resolved.push((DefaultValueSite::FieldArgument {
                                type_name: type_.name().to_string(),
                                field_name: field.name().to_string(),
                                argument_name: argument.name().to_string(),
                            }, value));
                        }
                    }
                }
            },
            GraphQLType::InputObject(input_type) => {
                for field in input_type.fields.values() {
                    if let Some(value) = coerce_default(schema, &input_type.name, field)? {
                        resolved.push((DefaultValueSite::InputField {
                            type_name: input_type.name.clone(),
                            field_name: field.name().to_string(),
                        }, value));
                    }
                }
            },
            _ => (),
        }
    }
    for directive in schema.directives.values() {
        for argument in directive.arguments().values() {
            let parent_name = format!("@{}", directive.name());
            if let Some(value) = coerce_default(schema, &parent_name, argument)? {
                resolved.push((DefaultValueSite::DirectiveArgument {
                    directive_name: directive.name().to_string(),
                    argument_name: argument.name().to_string(),
                }, value));
            }
        }
    }

    for (site, value) in resolved {
        let input_value = match site {
            DefaultValueSite::FieldArgument { type_name, field_name, argument_name } => {
                let field = match schema.types.get_mut(&type_name) {
                    Some(GraphQLType::Object(obj_type)) => obj_type.data.field_mut(&field_name),
                    Some(GraphQLType::Interface(iface)) => iface.data.field_mut(&field_name),
                    _ => None,
                };
                field.and_then(|field| {
                    field.arguments_mut().find(|arg| arg.name() == argument_name)
                })
            },
            DefaultValueSite::InputField { type_name, field_name } =>
                match schema.types.get_mut(&type_name) {
                    Some(GraphQLType::InputObject(input_type)) =>
                        input_type.fields.get_mut(&field_name),
                    _ => None,
                },
            DefaultValueSite::DirectiveArgument { directive_name, argument_name } =>
                schema.directives.get_mut(&directive_name).and_then(|directive| {
                    directive.arguments_mut().find(|arg| arg.name() == argument_name)
                }),
        };
        if let Some(input_value) = input_value {
            input_value.set_default_value(value);
        }
    }
    Ok(())
}

fn coerce_default(
    schema: &Schema,
    parent_name: &str,
    input_value: &InputValue,
) -> Result<Option<Value>> {
    let Some(literal) = &input_value.default_literal else {
        return Ok(None);
    };
    if input_value.default_value().is_some() {
        return Ok(None);
    }
    let type_annotation = input_value.type_annotation();
    values::value_from_ast(schema, type_annotation, literal, None)
        .map(Some)
        .ok_or_else(|| SchemaBuildError::InvalidDefaultValue {
            input_name: input_value.name().to_string(),
            message: format!(
                "Expected value of type \"{type_annotation}\" but got: {}.",
                graphql_exec_parser::print_value(literal),
            ),
            parent_name: parent_name.to_string(),
        })
}
