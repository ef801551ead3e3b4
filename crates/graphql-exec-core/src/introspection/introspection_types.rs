use crate::error::BoxError;
use crate::introspection::Introspected;
use crate::introspection::list_of;
use crate::resolver::ResolveFn;
use crate::resolver::ResolveParams;
use crate::resolver::Resolved;
use crate::schema::Schema;
use crate::types::DeprecationState;
use crate::types::DirectiveLocation;
use crate::types::EnumTypeBuilder;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputValue;
use crate::types::ObjectTypeBuilder;
use crate::types::TypeAnnotation;
use crate::types::TypeBuilder;
use crate::values::ast_from_value;
use crate::Value;
use graphql_exec_parser::print_value;

type ResolveResult = Result<Resolved, BoxError>;

/// The introspection types every schema carries.
pub(crate) fn types() -> Vec<TypeBuilder> {
    vec![
        schema_type().into(),
        type_type().into(),
        type_kind_enum().into(),
        field_type().into(),
        input_value_type().into(),
        enum_value_type().into(),
        directive_type().into(),
        directive_location_enum().into(),
    ]
}

fn named(name: &str) -> TypeAnnotation {
    TypeAnnotation::named(name)
}

fn non_null(name: &str) -> TypeAnnotation {
    TypeAnnotation::named(name).non_null()
}

/// `[name!]!`
fn non_null_list(name: &str) -> TypeAnnotation {
    TypeAnnotation::list(non_null(name)).non_null()
}

/// `[name!]`
fn nullable_list(name: &str) -> TypeAnnotation {
    TypeAnnotation::list(non_null(name))
}

fn field<F>(name: &str, type_annotation: TypeAnnotation, resolve: F) -> Field
where
    F: for<'r> Fn(ResolveParams<'r>) -> ResolveResult + Send + Sync + 'static,
{
    Field::new(name, type_annotation).with_resolver(ResolveFn::new(resolve))
}

fn include_deprecated_arg() -> InputValue {
    InputValue::new("includeDeprecated", named("Boolean")).with_default_value(false)
}

fn include_deprecated(params: ResolveParams<'_>) -> bool {
    params.arg("includeDeprecated").and_then(Value::as_bool).unwrap_or(false)
}

fn deprecation_fields<F>(state: F) -> [Field; 2]
where
    F: for<'a> Fn(&'a Introspected) -> Option<DeprecationState<'a>> + Copy + Send + Sync + 'static,
{
    [
        field("isDeprecated", non_null("Boolean"), move |params| {
            let deprecated = state(Introspected::of(params)?)
                .is_some_and(|state| state.is_deprecated());
            Ok(Value::from(deprecated).into())
        }),
        field("deprecationReason", named("String"), move |params| {
            let reason = state(Introspected::of(params)?).and_then(|state| state.reason());
            Ok(Value::from(reason).into())
        }),
    ]
}

// =============================================================================
// __Schema
// =============================================================================

fn schema_type() -> ObjectTypeBuilder {
    ObjectTypeBuilder::new("__Schema")
        .description(
            "A GraphQL Schema defines the capabilities of a GraphQL server. It \
            exposes all available types and directives on the server, as well \
            as the entry points for query, mutation, and subscription operations.",
        )
        .field(
            field("types", non_null_list("__Type"), |params| {
                let schema = params.info.schema;
                Ok(list_of(schema.types().keys().map(|name| {
                    Introspected::Type(TypeAnnotation::named(name))
                })).into())
            })
            .with_description("A list of all types supported by this server."),
        )
        .field(
            field("queryType", non_null("__Type"), |params| {
                let name = params.info.schema.query_type_name();
                Ok(Introspected::Type(TypeAnnotation::named(name)).into_value().into())
            })
            .with_description("The type that query operations will be rooted at."),
        )
        .field(
            field("mutationType", named("__Type"), |params| {
                Ok(root_type_value(params.info.schema.mutation_type_name()).into())
            })
            .with_description(
                "If this server supports mutation, the type that mutation \
                operations will be rooted at.",
            ),
        )
        .field(
            field("subscriptionType", named("__Type"), |params| {
                Ok(root_type_value(params.info.schema.subscription_type_name()).into())
            })
            .with_description(
                "If this server support subscription, the type that \
                subscription operations will be rooted at.",
            ),
        )
        .field(
            field("directives", non_null_list("__Directive"), |params| {
                let directives = params.info.schema.directives().values().cloned();
                Ok(list_of(directives.map(Introspected::Directive)).into())
            })
            .with_description("A list of all directives supported by this server."),
        )
}

fn root_type_value(type_name: Option<&str>) -> Value {
    type_name.map_or(Value::Null, |name| {
        Introspected::Type(TypeAnnotation::named(name)).into_value()
    })
}

// =============================================================================
// __Type
// =============================================================================

/// The named type behind an introspected `__Type`, if it isn't a wrapper.
fn named_type<'r>(schema: &'r Schema, annotation: &TypeAnnotation) -> Option<&'r GraphQLType> {
    match annotation {
        TypeAnnotation::Named { name, nullable: true } => schema.get_type(name),
        _ => None,
    }
}

fn introspected_type(params: ResolveParams<'_>) -> Result<&TypeAnnotation, BoxError> {
    match Introspected::of(params)? {
        Introspected::Type(annotation) => Ok(annotation),
        _ => Err("Expected an introspected type".into()),
    }
}

fn type_type() -> ObjectTypeBuilder {
    ObjectTypeBuilder::new("__Type")
        .description(
            "The fundamental unit of any GraphQL Schema is the type. There are \
            many kinds of types in GraphQL as represented by the `__TypeKind` enum.",
        )
        .field(field("kind", non_null("__TypeKind"), |params| {
            let annotation = introspected_type(params)?;
            let named_kind = params.info.schema
                .get_type(annotation.innermost_name())
                .map_or(GraphQLTypeKind::Scalar, GraphQLType::kind);
            let kind = GraphQLTypeKind::of_annotation(annotation, named_kind);
            Ok(Value::from(kind.name()).into())
        }))
        .field(field("name", named("String"), |params| {
            let annotation = introspected_type(params)?;
            let name = named_type(params.info.schema, annotation).map(GraphQLType::name);
            Ok(Value::from(name).into())
        }))
        .field(field("description", named("String"), |params| {
            let annotation = introspected_type(params)?;
            let description = named_type(params.info.schema, annotation)
                .and_then(GraphQLType::description);
            Ok(Value::from(description).into())
        }))
        .field(
            field("fields", nullable_list("__Field"), |params| {
                let annotation = introspected_type(params)?;
                let include_deprecated = include_deprecated(params);
                let Some(fields) = named_type(params.info.schema, annotation)
                    .and_then(GraphQLType::fields) else {
                    return Ok(Value::Null.into());
                };
                Ok(list_of(fields.values()
                    .filter(|f| include_deprecated || !f.deprecation_state().is_deprecated())
                    .cloned()
                    .map(Introspected::Field)
                ).into())
            })
            .with_argument(include_deprecated_arg()),
        )
        .field(field("interfaces", nullable_list("__Type"), |params| {
            let annotation = introspected_type(params)?;
            Ok(match named_type(params.info.schema, annotation) {
                Some(GraphQLType::Object(obj_type)) => list_of(
                    obj_type.interface_names()
                        .iter()
                        .map(|name| Introspected::Type(TypeAnnotation::named(name))),
                ),
                Some(GraphQLType::Interface(_)) => Value::List(vec![]),
                _ => Value::Null,
            }.into())
        }))
        .field(field("possibleTypes", nullable_list("__Type"), |params| {
            let annotation = introspected_type(params)?;
            let schema = params.info.schema;
            Ok(match named_type(schema, annotation) {
                Some(type_) if type_.is_abstract() => list_of(
                    schema.possible_types(type_.name())
                        .into_iter()
                        .map(|name| Introspected::Type(TypeAnnotation::named(name))),
                ),
                _ => Value::Null,
            }.into())
        }))
        .field(
            field("enumValues", nullable_list("__EnumValue"), |params| {
                let annotation = introspected_type(params)?;
                let include_deprecated = include_deprecated(params);
                let Some(enum_type) = named_type(params.info.schema, annotation)
                    .and_then(GraphQLType::as_enum) else {
                    return Ok(Value::Null.into());
                };
                Ok(list_of(enum_type.values()
                    .values()
                    .filter(|v| include_deprecated || !v.deprecation_state().is_deprecated())
                    .cloned()
                    .map(Introspected::EnumValue)
                ).into())
            })
            .with_argument(include_deprecated_arg()),
        )
        .field(field("inputFields", nullable_list("__InputValue"), |params| {
            let annotation = introspected_type(params)?;
            let Some(input_type) = named_type(params.info.schema, annotation)
                .and_then(GraphQLType::as_input_object) else {
                return Ok(Value::Null.into());
            };
            Ok(list_of(input_type.fields().values().cloned().map(Introspected::InputValue)).into())
        }))
        .field(field("ofType", named("__Type"), |params| {
            let annotation = introspected_type(params)?;
            let of_type = if !annotation.nullable() {
                Some(annotation.as_nullable())
            } else {
                annotation.list_item().cloned()
            };
            Ok(of_type.map_or(Value::Null, |t| Introspected::Type(t).into_value()).into())
        }))
}

fn type_kind_enum() -> EnumTypeBuilder {
    let mut builder = EnumTypeBuilder::new("__TypeKind")
        .description("An enum describing what kind of type a given `__Type` is.");
    for kind in GraphQLTypeKind::all() {
        builder = builder.value(EnumValue::new(kind.name()));
    }
    builder
}

// =============================================================================
// __Field, __InputValue, __EnumValue
// =============================================================================

fn field_type() -> ObjectTypeBuilder {
    fn introspected_field(params: ResolveParams<'_>) -> Result<&Field, BoxError> {
        match Introspected::of(params)? {
            Introspected::Field(field) => Ok(field),
            _ => Err("Expected an introspected field".into()),
        }
    }

    let [is_deprecated, deprecation_reason] = deprecation_fields(|source| match source {
        Introspected::Field(field) => Some(field.deprecation_state()),
        _ => None,
    });
    ObjectTypeBuilder::new("__Field")
        .description(
            "Object and Interface types are described by a list of Fields, each \
            of which has a name, potentially a list of arguments, and a return type.",
        )
        .field(field("name", non_null("String"), |params| {
            Ok(Value::from(introspected_field(params)?.name()).into())
        }))
        .field(field("description", named("String"), |params| {
            Ok(Value::from(introspected_field(params)?.description()).into())
        }))
        .field(field("args", non_null_list("__InputValue"), |params| {
            let arguments = introspected_field(params)?.arguments().values().cloned();
            Ok(list_of(arguments.map(Introspected::InputValue)).into())
        }))
        .field(field("type", non_null("__Type"), |params| {
            let annotation = introspected_field(params)?.type_annotation().clone();
            Ok(Introspected::Type(annotation).into_value().into())
        }))
        .field(is_deprecated)
        .field(deprecation_reason)
}

fn input_value_type() -> ObjectTypeBuilder {
    fn introspected_input_value(params: ResolveParams<'_>) -> Result<&InputValue, BoxError> {
        match Introspected::of(params)? {
            Introspected::InputValue(input_value) => Ok(input_value),
            _ => Err("Expected an introspected input value".into()),
        }
    }

    ObjectTypeBuilder::new("__InputValue")
        .description(
            "Arguments provided to Fields or Directives and the input fields of \
            an InputObject are represented as Input Values which describe their \
            type and optionally a default value.",
        )
        .field(field("name", non_null("String"), |params| {
            Ok(Value::from(introspected_input_value(params)?.name()).into())
        }))
        .field(field("description", named("String"), |params| {
            Ok(Value::from(introspected_input_value(params)?.description()).into())
        }))
        .field(field("type", non_null("__Type"), |params| {
            let annotation = introspected_input_value(params)?.type_annotation().clone();
            Ok(Introspected::Type(annotation).into_value().into())
        }))
        .field(
            field("defaultValue", named("String"), |params| {
                let input_value = introspected_input_value(params)?;
                let printed = input_value.default_value()
                    .and_then(|value| {
                        ast_from_value(params.info.schema, value, input_value.type_annotation())
                    })
                    .map(|literal| print_value(&literal));
                Ok(Value::from(printed).into())
            })
            .with_description(
                "A GraphQL-formatted string representing the default value for \
                this input value.",
            ),
        )
}

fn enum_value_type() -> ObjectTypeBuilder {
    fn introspected_enum_value(params: ResolveParams<'_>) -> Result<&EnumValue, BoxError> {
        match Introspected::of(params)? {
            Introspected::EnumValue(enum_value) => Ok(enum_value),
            _ => Err("Expected an introspected enum value".into()),
        }
    }

    let [is_deprecated, deprecation_reason] = deprecation_fields(|source| match source {
        Introspected::EnumValue(enum_value) => Some(enum_value.deprecation_state()),
        _ => None,
    });
    ObjectTypeBuilder::new("__EnumValue")
        .description(
            "One possible value for a given Enum. Enum values are unique values, \
            not a placeholder for a string or numeric value. However an Enum \
            value is returned in a JSON response as a string.",
        )
        .field(field("name", non_null("String"), |params| {
            Ok(Value::from(introspected_enum_value(params)?.name()).into())
        }))
        .field(field("description", named("String"), |params| {
            Ok(Value::from(introspected_enum_value(params)?.description()).into())
        }))
        .field(is_deprecated)
        .field(deprecation_reason)
}

// =============================================================================
// __Directive
// =============================================================================

fn directive_type() -> ObjectTypeBuilder {
    fn introspected_directive(
        params: ResolveParams<'_>,
    ) -> Result<&crate::types::Directive, BoxError> {
        match Introspected::of(params)? {
            Introspected::Directive(directive) => Ok(directive),
            _ => Err("Expected an introspected directive".into()),
        }
    }

    ObjectTypeBuilder::new("__Directive")
        .description(
            "A Directive provides a way to describe alternate runtime execution \
            and type validation behavior in a GraphQL document.",
        )
        .field(field("name", non_null("String"), |params| {
            Ok(Value::from(introspected_directive(params)?.name()).into())
        }))
        .field(field("description", named("String"), |params| {
            Ok(Value::from(introspected_directive(params)?.description()).into())
        }))
        .field(field("locations", non_null_list("__DirectiveLocation"), |params| {
            let locations = introspected_directive(params)?.locations()
                .iter()
                .map(|location| Value::from(location.name()))
                .collect::<Vec<_>>();
            Ok(Value::List(locations).into())
        }))
        .field(field("args", non_null_list("__InputValue"), |params| {
            let arguments = introspected_directive(params)?.arguments().values().cloned();
            Ok(list_of(arguments.map(Introspected::InputValue)).into())
        }))
        .field(field("isRepeatable", non_null("Boolean"), |params| {
            Ok(Value::from(introspected_directive(params)?.is_repeatable()).into())
        }))
}

fn directive_location_enum() -> EnumTypeBuilder {
    let mut builder = EnumTypeBuilder::new("__DirectiveLocation")
        .description(
            "A Directive can be adjacent to many parts of the GraphQL language, a \
            __DirectiveLocation describes one such possible adjacencies.",
        );
    for location in DirectiveLocation::all() {
        builder = builder.value(EnumValue::new(location.name()));
    }
    builder
}
