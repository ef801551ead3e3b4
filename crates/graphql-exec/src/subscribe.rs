use crate::Params;
use crate::Response;
use crate::do_request::prepare;
use futures::stream;
use futures::stream::BoxStream;
use futures::StreamExt;
use graphql_exec_core::ExecuteParams;

/// Parses, validates and starts a subscription, yielding one [`Response`]
/// per source event.
///
/// A request that fails before the source stream is created (parse,
/// validation, coercion or subscribe-function errors) yields a single
/// response carrying those errors.
pub fn subscribe(params: Params) -> BoxStream<'static, Response> {
    let span = tracing::info_span!(
        "graphql.request",
        operation_name = params.operation_name.as_deref().unwrap_or(""),
    );
    let _entered = span.enter();

    let extensions = params.schema.extensions().to_vec();
    let document = match prepare(&params, &extensions) {
        Ok(document) => document,
        Err(response) => return stream::once(async move { response }).boxed(),
    };
    let mut execute_params = ExecuteParams::new(params.schema, document)
        .with_variable_values(params.variable_values)
        .with_root_value(params.root_object)
        .with_context(params.context);
    execute_params.operation_name = params.operation_name;
    graphql_exec_core::subscribe(execute_params)
        .map(Response::from)
        .boxed()
}
