use crate::do_request;
use crate::error::BoxError;
use crate::parser::parse;
use crate::parser::ParseParams;
use crate::resolver::Resolved;
use crate::schema::SchemaBuilder;
use crate::tests::utils::sdl_schema;
use crate::tests::utils::setup_logger;
use crate::tests::utils::to_json;
use crate::Params;
use crate::RequestContext;
use crate::Value;
use indexmap::IndexMap;
use std::sync::Arc;
use std::time::Duration;

/// Verifies that a syntax error is reported with its location and no
/// `data`.
#[tokio::test(flavor = "multi_thread")]
async fn reports_syntax_errors() {
    setup_logger();
    let response = do_request(Params::new(sdl_schema("type Query { a: Int }"), "{ a")).await;
    assert!(response.data.is_none());
    assert_eq!(response.errors.len(), 1);
    let error = &response.errors[0];
    assert!(error.message.starts_with("Syntax Error"), "{}", error.message);
    assert!(error.message.contains("found EOF"), "{}", error.message);
    assert_eq!((error.locations[0].line, error.locations[0].column), (1, 4));
}

/// Verifies that every validation error is reported, in rule order.
#[tokio::test(flavor = "multi_thread")]
async fn reports_all_validation_errors() {
    setup_logger();
    let response = do_request(Params::new(
        sdl_schema("type Query { a: Int }"),
        "{ b ...Missing }",
    )).await;
    assert!(response.data.is_none());
    let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec![
        "Cannot query field \"b\" on \"Query\".",
        "Unknown fragment \"Missing\".",
    ]);
}

/// Verifies that the operation name picks among several operations.
#[tokio::test(flavor = "multi_thread")]
async fn selects_operation_by_name() {
    setup_logger();
    let schema = sdl_schema("type Query { a: Int b: Int }");
    let root = Value::object([("a", Value::Int(1)), ("b", Value::Int(2))]);
    let body = "query A { a } query B { b }";

    let response = do_request(
        Params::new(schema.clone(), body)
            .with_operation_name("B")
            .with_root_object(root.clone()),
    ).await;
    assert_eq!(to_json(&response), r#"{"data":{"b":2}}"#);

    let response = do_request(Params::new(schema, body).with_root_object(root)).await;
    assert!(response.data.is_none());
    assert_eq!(
        response.errors[0].message,
        "Must provide operation name if query contains multiple operations.",
    );
}

/// Verifies that a pre-parsed document is executed without its text.
#[tokio::test(flavor = "multi_thread")]
async fn executes_pre_parsed_documents() {
    setup_logger();
    let document = Arc::new(parse(ParseParams::from("query Q($n: Int) { echo(n: $n) }")).unwrap());
    let schema = SchemaBuilder::new()
        .load_str("type Query { echo(n: Int): Int }")
        .unwrap()
        .resolver("Query", "echo", |params| Ok(params.arg("n").cloned().unwrap_or_default().into()))
        .build()
        .unwrap();
    let response = do_request(
        Params::from_ast(Arc::new(schema), document)
            .with_variable_values(IndexMap::from([("n".to_string(), Value::Int(7))])),
    ).await;
    assert_eq!(to_json(&response), r#"{"data":{"echo":7}}"#);
}

/// Verifies that a request spreading a long chain of fragments validates
/// and executes.
#[tokio::test(flavor = "multi_thread")]
async fn long_fragment_chain() {
    setup_logger();
    let len = 20_000;
    let mut request = String::from("{ ...F0 }\n");
    for i in 0..len {
        let selection = if i + 1 == len { "a".to_string() } else { format!("...F{}", i + 1) };
        request.push_str(&format!("fragment F{i} on Query {{ {selection} }}\n"));
    }
    let response = do_request(
        Params::new(sdl_schema("type Query { a: Int }"), request)
            .with_root_object(Value::object([("a", 1.into())])),
    ).await;
    assert_eq!(to_json(&response), r#"{"data":{"a":1}}"#);
}

/// Verifies that resolvers see the request's context data.
#[tokio::test(flavor = "multi_thread")]
async fn passes_context_to_resolvers() {
    setup_logger();
    struct Viewer(&'static str);
    let schema = SchemaBuilder::new()
        .load_str("type Query { me: String }")
        .unwrap()
        .resolver("Query", "me", |params| {
            let viewer = params.context.data::<Viewer>().map(|viewer| viewer.0);
            Ok(Value::from(viewer).into())
        })
        .build()
        .unwrap();
    let response = do_request(
        Params::new(Arc::new(schema), "{ me }")
            .with_context(RequestContext::new().with_data(Viewer("ada"))),
    ).await;
    assert_eq!(to_json(&response), r#"{"data":{"me":"ada"}}"#);
}

/// Verifies that a request whose context is already cancelled produces
/// `null` data and only the cancellation error.
#[tokio::test(flavor = "multi_thread")]
async fn cancelled_request_has_null_data() {
    setup_logger();
    let context = RequestContext::new();
    context.cancel();
    let response = do_request(
        Params::new(sdl_schema("type Query { a: Int }"), "{ a }").with_context(context),
    ).await;
    assert_eq!(
        to_json(&response),
        r#"{"data":null,"errors":[{"message":"Request was cancelled"}]}"#,
    );
}

/// Verifies that a resolver cancelling its own request mid-execution ends
/// the request with `null` data and only the cancellation error.
#[tokio::test(flavor = "multi_thread")]
async fn cancelled_mid_execution_has_null_data() {
    setup_logger();
    let schema = SchemaBuilder::new()
        .load_str("type Query { slow: String }")
        .unwrap()
        .resolver("Query", "slow", |params| {
            let context = params.context.clone();
            Ok(Resolved::thunk(async move {
                context.cancel();
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok::<_, BoxError>(Value::from("late"))
            }))
        })
        .build()
        .unwrap();
    let response = tokio::time::timeout(
        Duration::from_secs(5),
        do_request(Params::new(Arc::new(schema), "{ slow }")),
    ).await.expect("request ignored cancellation");
    assert_eq!(
        to_json(&response),
        r#"{"data":null,"errors":[{"message":"Request was cancelled"}]}"#,
    );
}
