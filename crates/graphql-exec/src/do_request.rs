use crate::Params;
use crate::Response;
use graphql_exec_core::Extension;
use graphql_exec_core::ExecuteParams;
use graphql_exec_core::RequestContext;
use graphql_exec_core::Value;
use graphql_exec_core::error::FormattedError;
use graphql_exec_core::error::GraphQLError;
use graphql_exec_core::execute;
use graphql_exec_core::validation::validate;
use graphql_exec_parser::ast;
use graphql_exec_parser::parse;
use graphql_exec_parser::ParseParams;
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::Instrument;

/// Parses (unless `params.ast` is set), validates and executes a request.
///
/// Parse and validation failures are returned without `data`; field
/// errors during execution are returned alongside the (partially `null`)
/// data. Every extension registered on the schema observes the request's
/// stages, and those that produce a result contribute to the response's
/// `extensions`.
pub async fn do_request(params: Params) -> Response {
    let span = tracing::info_span!(
        "graphql.request",
        operation_name = params.operation_name.as_deref().unwrap_or(""),
    );
    async move {
        let extensions = params.schema.extensions().to_vec();
        let document = match prepare(&params, &extensions) {
            Ok(document) => document,
            Err(response) => return response,
        };
        let context = params.context.clone();
        let mut execute_params = ExecuteParams::new(params.schema, document)
            .with_variable_values(params.variable_values)
            .with_root_value(params.root_object)
            .with_context(params.context);
        execute_params.operation_name = params.operation_name;
        let response = Response::from(execute(execute_params).await);
        response.with_extensions(extension_results(&extensions, &context))
    }.instrument(span).await
}

/// Runs the stages before execution: extension initialization, parsing
/// and validation. Returns the document to execute, or the response to
/// send when the request can't be executed.
pub(crate) fn prepare(
    params: &Params,
    extensions: &[Arc<dyn Extension>],
) -> Result<Arc<ast::Document>, Response> {
    let context = &params.context;
    for extension in extensions {
        extension.init(context);
    }

    let document = match &params.ast {
        Some(document) => document.clone(),
        None => {
            for extension in extensions {
                extension.parse_did_start(context);
            }
            let parse_params = ParseParams::from(params.request_string.as_str())
                .with_options(params.parse_options);
            let parsed = parse(parse_params);
            for extension in extensions {
                extension.parse_ended(context, parsed.as_ref().err());
            }
            match parsed {
                Ok(document) => Arc::new(document),
                Err(error) => {
                    log::debug!("Request failed to parse: {error}");
                    return Err(pre_execution_failure(
                        vec![GraphQLError::from(error).into()],
                        extensions,
                        context,
                    ));
                },
            }
        },
    };

    for extension in extensions {
        extension.validation_did_start(context);
    }
    let errors: Vec<FormattedError> = validate(&params.schema, &document, None)
        .into_iter()
        .map(|error| GraphQLError::from(error).into())
        .collect();
    for extension in extensions {
        extension.validation_ended(context, &errors);
    }
    if !errors.is_empty() {
        log::debug!("Request failed validation with {} error(s)", errors.len());
        return Err(pre_execution_failure(errors, extensions, context));
    }
    Ok(document)
}

fn pre_execution_failure(
    errors: Vec<FormattedError>,
    extensions: &[Arc<dyn Extension>],
    context: &RequestContext,
) -> Response {
    Response {
        data: None,
        errors,
        extensions: extension_results(extensions, context),
    }
}

/// The results of the extensions that have one, keyed by extension name.
pub(crate) fn extension_results(
    extensions: &[Arc<dyn Extension>],
    context: &RequestContext,
) -> IndexMap<String, Value> {
    extensions
        .iter()
        .filter_map(|extension| {
            extension.result(context).map(|result| (extension.name().to_string(), result))
        })
        .collect()
}
