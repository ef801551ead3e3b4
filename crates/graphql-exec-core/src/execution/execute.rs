use crate::error::BoxError;
use crate::error::CancelledError;
use crate::error::FieldError;
use crate::error::FormattedError;
use crate::error::GraphQLError;
use crate::error::PathSegment;
use crate::error::locations_of;
use crate::execution::ExecuteParams;
use crate::execution::ExecutionContext;
use crate::execution::ExecutionResult;
use crate::execution::FieldInfo;
use crate::execution::GroupedFields;
use crate::execution::collect_fields;
use crate::execution::complete_value;
use crate::resolver::ResolveParams;
use crate::resolver::Resolved;
use crate::types::ObjectType;
use crate::values::argument_values;
use crate::Value;
use futures::future::BoxFuture;
use futures::future::join_all;
use futures::FutureExt;
use graphql_exec_parser::ast;
use graphql_exec_parser::ast::OperationType;
use indexmap::IndexMap;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::task::AbortHandle;
use tracing::Instrument;

/// Why a value couldn't be produced at some position of the response.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Interrupt {
    /// A non-null position was left empty (its error is already
    /// recorded); the nearest nullable ancestor becomes `null`.
    NullPropagation,

    /// The request was cancelled; execution stops as a whole.
    Cancelled,
}

/// Executes the selected operation of `params.document`.
///
/// Query and subscription root fields run concurrently, one task each when
/// called within a Tokio runtime; mutation root fields run one after
/// another in document order. Deeper selection sets run their fields
/// concurrently within their parent's task.
pub async fn execute(params: ExecuteParams) -> ExecutionResult {
    let ctx = match ExecutionContext::build(&params) {
        Ok(ctx) => Arc::new(ctx),
        Err(error) => return ExecutionResult::from_error(error),
    };
    let extensions = ctx.schema.extensions();
    for extension in extensions {
        extension.execution_did_start(&ctx.context);
    }
    let result = execute_operation(ctx.clone()).await;
    for extension in extensions {
        extension.execution_ended(&ctx.context);
    }
    result
}

pub(crate) async fn execute_operation(ctx: Arc<ExecutionContext>) -> ExecutionResult {
    let data = tokio::select! {
        biased;
        _ = ctx.context.cancelled() => Err(Interrupt::Cancelled),
        data = execute_root(&ctx) => data,
    };
    match data {
        Ok(data) => ExecutionResult {
            data: Some(data),
            errors: formatted_errors(&ctx),
        },
        Err(Interrupt::NullPropagation) => ExecutionResult {
            data: Some(Value::Null),
            errors: formatted_errors(&ctx),
        },
        Err(Interrupt::Cancelled) => {
            log::warn!("Request cancelled during execution");
            ExecutionResult {
                data: Some(Value::Null),
                errors: vec![FormattedError::from(GraphQLError::from(CancelledError))],
            }
        },
    }
}

fn formatted_errors(ctx: &ExecutionContext) -> Vec<FormattedError> {
    ctx.take_errors()
        .into_iter()
        .map(|error| FormattedError::from(GraphQLError::from(error)))
        .collect()
}

async fn execute_root(ctx: &Arc<ExecutionContext>) -> Result<Value, Interrupt> {
    let Some(root_type) = ctx.root_type() else {
        return Ok(Value::Null);
    };
    let fields = collect_fields(ctx, root_type, [&ctx.operation.selection_set]);
    match ctx.operation.operation {
        OperationType::Mutation =>
            execute_fields_serially(ctx, root_type, &ctx.root_value, fields).await,
        OperationType::Query | OperationType::Subscription => {
            if tokio::runtime::Handle::try_current().is_ok() {
                execute_root_fields_in_tasks(ctx, root_type, fields).await
            } else {
                execute_fields(ctx, root_type, &ctx.root_value, &[], fields).await
            }
        },
    }
}

/// Aborts the tasks it holds when dropped, so cancelling a request also
/// stops its root field tasks.
struct AbortOnDrop(Vec<AbortHandle>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        for handle in &self.0 {
            handle.abort();
        }
    }
}

/// Runs each root field on its own Tokio task.
async fn execute_root_fields_in_tasks(
    ctx: &Arc<ExecutionContext>,
    root_type: &ObjectType,
    fields: GroupedFields<'_>,
) -> Result<Value, Interrupt> {
    let handles: Vec<_> = (0..fields.len())
        .map(|index| {
            let task_ctx = Arc::clone(ctx);
            tokio::spawn(async move {
                // Spawned tasks must own what they borrow, so each one
                // regroups the root fields and runs its own entry.
                let ctx = &*task_ctx;
                let Some(root_type) = ctx.root_type() else {
                    return Ok(None);
                };
                let fields = collect_fields(ctx, root_type, [&ctx.operation.selection_set]);
                let Some((response_key, field_nodes)) = fields.get_index(index) else {
                    return Ok(None);
                };
                let path = vec![PathSegment::from(*response_key)];
                execute_field(ctx, root_type, &ctx.root_value, field_nodes.clone(), path).await
            }.in_current_span())
        })
        .collect();
    let _abort_guard = AbortOnDrop(handles.iter().map(|handle| handle.abort_handle()).collect());
    let joined = join_all(handles).await;

    let mut outcomes = Vec::with_capacity(fields.len());
    for ((response_key, field_nodes), joined) in fields.iter().zip(joined) {
        let outcome = match joined {
            Ok(outcome) => outcome,
            Err(join_error) if join_error.is_panic() => {
                let message = panic_message(join_error.into_panic().as_ref());
                log::warn!("Root field task for \"{response_key}\" panicked: {message}");
                ctx.record_error(FieldError::new(
                    message,
                    vec![PathSegment::from(*response_key)],
                    locations_of(field_nodes.iter().map(|node| node.loc.as_ref())),
                ));
                let nullable = field_nodes
                    .first()
                    .and_then(|node| root_type.field(node.name.as_str()))
                    .is_none_or(|def| def.type_annotation().nullable());
                if nullable { Ok(Some(Value::Null)) } else { Err(Interrupt::NullPropagation) }
            },
            Err(_) => Err(Interrupt::Cancelled),
        };
        outcomes.push((*response_key, outcome));
    }
    assemble(outcomes)
}

/// Executes `fields` concurrently and assembles them into an object in
/// collection order.
pub(crate) fn execute_fields<'f>(
    ctx: &'f ExecutionContext,
    parent_type: &'f ObjectType,
    source: &'f Value,
    path: &[PathSegment],
    fields: GroupedFields<'f>,
) -> BoxFuture<'f, Result<Value, Interrupt>> {
    let (keys, pending): (Vec<_>, Vec<_>) = fields
        .into_iter()
        .map(|(response_key, field_nodes)| {
            let field_path = child_path(path, response_key);
            (response_key, execute_field(ctx, parent_type, source, field_nodes, field_path))
        })
        .unzip();
    async move {
        let outcomes = join_all(pending).await;
        assemble(keys.into_iter().zip(outcomes))
    }.boxed()
}

/// Executes `fields` one at a time, each completing before the next
/// starts.
async fn execute_fields_serially<'f>(
    ctx: &'f ExecutionContext,
    parent_type: &'f ObjectType,
    source: &'f Value,
    fields: GroupedFields<'f>,
) -> Result<Value, Interrupt> {
    let mut outcomes = Vec::with_capacity(fields.len());
    for (response_key, field_nodes) in fields {
        let path = vec![PathSegment::from(response_key)];
        let outcome = execute_field(ctx, parent_type, source, field_nodes, path).await;
        let cancelled = outcome == Err(Interrupt::Cancelled);
        outcomes.push((response_key, outcome));
        if cancelled {
            break;
        }
    }
    assemble(outcomes)
}

/// Builds the object for one selection set from its fields' outcomes.
/// Fields with no definition (`Ok(None)`) are left out.
fn assemble<'k>(
    outcomes: impl IntoIterator<Item = (&'k str, Result<Option<Value>, Interrupt>)>,
) -> Result<Value, Interrupt> {
    let mut data = IndexMap::new();
    let mut interrupt = None;
    for (response_key, outcome) in outcomes {
        match outcome {
            Ok(Some(value)) => {
                data.insert(response_key.to_string(), value);
            },
            Ok(None) => (),
            Err(Interrupt::Cancelled) => return Err(Interrupt::Cancelled),
            Err(Interrupt::NullPropagation) => interrupt = Some(Interrupt::NullPropagation),
        }
    }
    match interrupt {
        Some(interrupt) => Err(interrupt),
        None => Ok(Value::Object(data)),
    }
}

pub(crate) fn child_path(path: &[PathSegment], segment: impl Into<PathSegment>) -> Vec<PathSegment> {
    let mut child = Vec::with_capacity(path.len() + 1);
    child.extend_from_slice(path);
    child.push(segment.into());
    child
}

/// Resolves and completes one field of `source`. `Ok(None)` means the
/// field isn't defined on `parent_type` and is left out of the response.
async fn execute_field<'f>(
    ctx: &'f ExecutionContext,
    parent_type: &'f ObjectType,
    source: &'f Value,
    field_nodes: Vec<&'f ast::Field>,
    path: Vec<PathSegment>,
) -> Result<Option<Value>, Interrupt> {
    if ctx.context.is_cancelled() {
        return Err(Interrupt::Cancelled);
    }
    let Some(field_name) = field_nodes.first().map(|node| node.name.as_str()) else {
        return Ok(None);
    };
    let Some(field_def) = ctx.schema.field_def(parent_type.name(), field_name) else {
        return Ok(None);
    };
    let field = FieldInfo {
        parent_type,
        field_def,
        field_name,
        field_nodes,
    };
    let span = tracing::debug_span!(
        "graphql.field",
        parent_type = parent_type.name(),
        field_name = field_name,
    );
    async {
        let return_type = field_def.type_annotation();
        let resolved = match resolve_field(ctx, &field, source, &path).await {
            Ok(resolved) => resolved,
            Err(error) => {
                let locations = locations_of(field.field_nodes.iter().map(|node| node.loc.as_ref()));
                ctx.record_error(FieldError::from_error(error, path, locations));
                return if return_type.nullable() {
                    Ok(Some(Value::Null))
                } else {
                    Err(Interrupt::NullPropagation)
                };
            },
        };
        complete_value(ctx, &field, return_type, path, resolved).await.map(Some)
    }.instrument(span).await
}

/// Runs the field's resolver (the default property lookup when it has
/// none) and awaits the thunk it returns, if any.
async fn resolve_field(
    ctx: &ExecutionContext,
    field: &FieldInfo<'_>,
    source: &Value,
    path: &[PathSegment],
) -> Result<Value, BoxError> {
    let arguments = field.field_nodes.first().map_or(&[][..], |node| &node.arguments[..]);
    let args = argument_values(
        &ctx.schema,
        field.field_def.arguments(),
        arguments,
        &ctx.variable_values,
    )?;
    let info = ctx.resolve_info(field, path);
    let extensions = ctx.schema.extensions();
    for extension in extensions {
        extension.resolve_field_did_start(&ctx.context, &info);
    }

    let params = ResolveParams {
        source,
        args: &args,
        context: &ctx.context,
        info: &info,
    };
    let resolved = match field.field_def.resolver() {
        Some(resolver) => std::panic::catch_unwind(AssertUnwindSafe(|| resolver.call(params)))
            .unwrap_or_else(|payload| Err(panic_error(field, payload.as_ref()))),
        None => Ok(Resolved::Value(source.get(field.field_name).cloned().unwrap_or_default())),
    };
    let result = match resolved {
        Ok(Resolved::Value(value)) => Ok(value),
        Ok(Resolved::Thunk(thunk)) => AssertUnwindSafe(thunk)
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| Err(panic_error(field, payload.as_ref()))),
        Err(error) => Err(error),
    };

    for extension in extensions {
        extension.resolve_field_ended(&ctx.context, &info, result.as_ref());
    }
    result
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| message.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "resolver panicked".to_string())
}

fn panic_error(field: &FieldInfo<'_>, payload: &(dyn Any + Send)) -> BoxError {
    let message = panic_message(payload);
    log::warn!(
        "Resolver for {}.{} panicked: {message}",
        field.parent_type.name(),
        field.field_name,
    );
    message.into()
}
