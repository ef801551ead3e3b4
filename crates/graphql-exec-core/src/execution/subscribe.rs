use crate::error::ExecutionError;
use crate::error::FormattedError;
use crate::error::GraphQLError;
use crate::error::PathSegment;
use crate::execution::ExecuteParams;
use crate::execution::ExecutionContext;
use crate::execution::ExecutionResult;
use crate::execution::FieldInfo;
use crate::execution::collect_fields;
use crate::execution::execute;
use crate::execution::execute_operation;
use crate::resolver::EventStream;
use crate::resolver::ResolveParams;
use crate::values::argument_values;
use futures::stream;
use futures::stream::BoxStream;
use futures::StreamExt;
use graphql_exec_parser::ast::OperationType;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

/// Starts a subscription, returning one [`ExecutionResult`] per source
/// event.
///
/// The subscription's single root field supplies the source stream
/// through its subscribe function; every event it yields becomes the root
/// value for one execution of the selection set. The stream ends when the
/// source stream ends or the request is cancelled. Failing to create the
/// source stream yields a single error result, and an operation that
/// isn't a subscription yields the single result of executing it.
pub fn subscribe(params: ExecuteParams) -> BoxStream<'static, ExecutionResult> {
    let ctx = match ExecutionContext::build(&params) {
        Ok(ctx) => ctx,
        Err(error) => return stream::once(async move { ExecutionResult::from_error(error) }).boxed(),
    };
    if ctx.operation.operation != OperationType::Subscription {
        return stream::once(execute(params)).boxed();
    }
    let events = match create_source_stream(&ctx) {
        Ok(events) => events,
        Err(error) => {
            log::debug!("Failed to create subscription source stream: {error}");
            return stream::once(async move { ExecutionResult::from_error(error) }).boxed();
        },
    };

    let cancelled = ctx.context.cancellation_token().clone().cancelled_owned();
    let ctx = Arc::new(ctx);
    events
        .take_until(cancelled)
        .then(move |event| {
            let ctx = Arc::clone(&ctx);
            async move {
                match event {
                    Ok(root_value) =>
                        execute_operation(Arc::new(ctx.with_root_value(root_value))).await,
                    Err(error) => ExecutionResult {
                        data: None,
                        errors: vec![FormattedError::new(error.to_string())],
                    },
                }
            }
        })
        .boxed()
}

/// Calls the subscribe function of the operation's first root field.
fn create_source_stream(ctx: &ExecutionContext) -> Result<EventStream, GraphQLError> {
    let Some(root_type) = ctx.root_type() else {
        return Err(ExecutionError::UnsupportedOperation {
            operation: OperationType::Subscription,
        }.into());
    };
    let fields = collect_fields(ctx, root_type, [&ctx.operation.selection_set]);
    let Some((response_key, field_nodes)) = fields.into_iter().next() else {
        return Ok(stream::empty().boxed());
    };
    let Some(field_name) = field_nodes.first().map(|node| node.name.as_str()) else {
        return Ok(stream::empty().boxed());
    };
    let missing_subscriber = || ExecutionError::MissingSubscribeFunction {
        field_name: field_name.to_string(),
    };
    let field_def = root_type.field(field_name).ok_or_else(missing_subscriber)?;
    let subscriber = field_def.subscriber().ok_or_else(missing_subscriber)?;

    let arguments = field_nodes.first().map_or(&[][..], |node| &node.arguments[..]);
    let args = argument_values(
        &ctx.schema,
        field_def.arguments(),
        arguments,
        &ctx.variable_values,
    )?;
    let field = FieldInfo {
        parent_type: root_type,
        field_def,
        field_name,
        field_nodes,
    };
    let path = [PathSegment::from(response_key)];
    let info = ctx.resolve_info(&field, &path);
    let params = ResolveParams {
        source: &ctx.root_value,
        args: &args,
        context: &ctx.context,
        info: &info,
    };
    let subscribe_failed = |message: String| ExecutionError::SubscribeFailed {
        field_name: field_name.to_string(),
        message,
    };
    match std::panic::catch_unwind(AssertUnwindSafe(|| subscriber.call(params))) {
        Ok(Ok(events)) => Ok(events),
        Ok(Err(error)) => Err(subscribe_failed(error.to_string()).into()),
        Err(_) => Err(subscribe_failed("subscribe function panicked".to_string()).into()),
    }
}
