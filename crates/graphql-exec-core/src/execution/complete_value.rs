use crate::error::FieldError;
use crate::error::PathSegment;
use crate::error::locations_of;
use crate::execution::ExecutionContext;
use crate::execution::FieldInfo;
use crate::execution::Interrupt;
use crate::execution::child_path;
use crate::execution::collect_fields;
use crate::execution::execute_fields;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::Value;
use futures::future::BoxFuture;
use futures::future::join_all;
use futures::FutureExt;

/// Completes a resolved value against `return_type`.
///
/// A `null` in a non-null position is recorded as an error and turned
/// into [`Interrupt::NullPropagation`]; a nullable position absorbs any
/// propagation coming from below it and becomes `null`.
pub(crate) fn complete_value<'f>(
    ctx: &'f ExecutionContext,
    field: &'f FieldInfo<'f>,
    return_type: &'f TypeAnnotation,
    path: Vec<PathSegment>,
    result: Value,
) -> BoxFuture<'f, Result<Value, Interrupt>> {
    async move {
        let completed = complete_inner(ctx, field, return_type, &path, result).await;
        if return_type.nullable() {
            return match completed {
                Err(Interrupt::NullPropagation) => Ok(Value::Null),
                other => other,
            };
        }
        match completed {
            Ok(Value::Null) => {
                let message = format!(
                    "Cannot return null for non-nullable field {}.{}",
                    field.parent_type.name(),
                    field.field_name,
                );
                Err(field_failure(ctx, field, &path, message))
            },
            other => other,
        }
    }.boxed()
}

/// Records a completion error for the field at `path` and starts null
/// propagation from there.
fn field_failure(
    ctx: &ExecutionContext,
    field: &FieldInfo<'_>,
    path: &[PathSegment],
    message: String,
) -> Interrupt {
    ctx.record_error(FieldError::new(
        message,
        path.to_vec(),
        locations_of(field.field_nodes.iter().map(|node| node.loc.as_ref())),
    ));
    Interrupt::NullPropagation
}

async fn complete_inner<'f>(
    ctx: &'f ExecutionContext,
    field: &'f FieldInfo<'f>,
    return_type: &'f TypeAnnotation,
    path: &[PathSegment],
    result: Value,
) -> Result<Value, Interrupt> {
    if result.is_null() {
        return Ok(Value::Null);
    }

    if let Some(item_type) = return_type.list_item() {
        let Value::List(items) = result else {
            let message = format!(
                "Expected Iterable, but did not find one for field {}.{}.",
                field.parent_type.name(),
                field.field_name,
            );
            return Err(field_failure(ctx, field, path, message));
        };
        let completed = join_all(items.into_iter().enumerate().map(|(index, item)| {
            complete_value(ctx, field, item_type, child_path(path, index), item)
        })).await;
        let mut values = Vec::with_capacity(completed.len());
        let mut interrupt = None;
        for item in completed {
            match item {
                Ok(value) => values.push(value),
                Err(Interrupt::Cancelled) => return Err(Interrupt::Cancelled),
                Err(Interrupt::NullPropagation) => interrupt = Some(Interrupt::NullPropagation),
            }
        }
        return match interrupt {
            Some(interrupt) => Err(interrupt),
            None => Ok(Value::List(values)),
        };
    }

    let type_name = return_type.innermost_name();
    let serialized = match ctx.schema.get_type(type_name) {
        Some(GraphQLType::Scalar(scalar)) => scalar.serialize(&result),
        Some(GraphQLType::Enum(enum_type)) => enum_type.serialize(&result),
        Some(GraphQLType::Object(object_type)) =>
            return complete_object(ctx, field, object_type, path, result).await,
        Some(abstract_type @ (GraphQLType::Interface(_) | GraphQLType::Union(_))) => {
            let object_type = resolve_runtime_type(ctx, field, abstract_type, path, &result)?;
            return complete_object(ctx, field, object_type, path, result).await;
        },
        Some(GraphQLType::InputObject(_)) | None => {
            let message = format!("Cannot complete a value of non-output type \"{type_name}\"");
            return Err(field_failure(ctx, field, path, message));
        },
    };
    serialized.ok_or_else(|| {
        let message = format!("Expected a value of type \"{type_name}\" but received: {result}");
        field_failure(ctx, field, path, message)
    })
}

/// Executes the merged sub-selections of every field node against
/// `result` as a value of `object_type`.
async fn complete_object<'f>(
    ctx: &'f ExecutionContext,
    field: &'f FieldInfo<'f>,
    object_type: &'f ObjectType,
    path: &[PathSegment],
    result: Value,
) -> Result<Value, Interrupt> {
    if let Some(is_type_of) = object_type.is_type_of() {
        let info = ctx.resolve_info(field, path);
        if !is_type_of.call(&result, &info) {
            let message = format!(
                "Expected value of type \"{}\" but got: {result}.",
                object_type.name(),
            );
            return Err(field_failure(ctx, field, path, message));
        }
    }
    if ctx.context.is_cancelled() {
        return Err(Interrupt::Cancelled);
    }
    let sub_fields = collect_fields(
        ctx,
        object_type,
        field.field_nodes.iter().filter_map(|node| node.selection_set.as_ref()),
    );
    execute_fields(ctx, object_type, &result, path, sub_fields).await
}

/// Determines the object type of a value in an interface or union
/// position: the type's `resolve_type` callback if it has one, otherwise
/// the first possible type whose `is_type_of` accepts the value, otherwise
/// the value's `__typename` entry.
fn resolve_runtime_type<'f>(
    ctx: &'f ExecutionContext,
    field: &'f FieldInfo<'f>,
    abstract_type: &'f GraphQLType,
    path: &[PathSegment],
    result: &Value,
) -> Result<&'f ObjectType, Interrupt> {
    let info = ctx.resolve_info(field, path);
    let resolve_type = match abstract_type {
        GraphQLType::Interface(interface) => interface.resolve_type(),
        GraphQLType::Union(union) => union.resolve_type(),
        _ => None,
    };
    let runtime_type_name = match resolve_type {
        Some(resolve_type) => resolve_type.call(result, &info),
        None => ctx.schema
            .possible_types(abstract_type.name())
            .into_iter()
            .find(|name| {
                ctx.schema
                    .get_type(name)
                    .and_then(GraphQLType::as_object)
                    .and_then(ObjectType::is_type_of)
                    .is_some_and(|is_type_of| is_type_of.call(result, &info))
            })
            .map(str::to_string)
            .or_else(|| result.get("__typename").and_then(Value::as_str).map(str::to_string)),
    };

    let abstract_name = abstract_type.name();
    let Some(runtime_type_name) = runtime_type_name else {
        let message = format!(
            "Abstract type \"{abstract_name}\" must resolve to an Object type at runtime for \
            field \"{}.{}\". Either the \"{abstract_name}\" type should provide a \
            \"resolveType\" function or each possible type should provide an \"isTypeOf\" \
            function.",
            field.parent_type.name(),
            field.field_name,
        );
        return Err(field_failure(ctx, field, path, message));
    };
    match ctx.schema.get_type(&runtime_type_name).and_then(GraphQLType::as_object) {
        Some(object_type) if ctx.schema.is_possible_type(abstract_name, object_type.name()) =>
            Ok(object_type),
        Some(_) => {
            let message = format!(
                "Runtime Object type \"{runtime_type_name}\" is not a possible type for \
                \"{abstract_name}\".",
            );
            Err(field_failure(ctx, field, path, message))
        },
        None => {
            let message = format!(
                "Abstract type \"{abstract_name}\" must resolve to an Object type at runtime \
                for field \"{}.{}\" but got \"{runtime_type_name}\".",
                field.parent_type.name(),
                field.field_name,
            );
            Err(field_failure(ctx, field, path, message))
        },
    }
}
