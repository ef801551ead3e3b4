use crate::error::BoxError;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::subscribe;
use crate::tests::utils::data_json;
use crate::tests::utils::parse_doc;
use crate::tests::utils::setup_logger;
use crate::ExecuteParams;
use crate::ExecutionResult;
use crate::RequestContext;
use crate::Value;
use futures::stream;
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;

const SUBSCRIPTION_SDL: &str = "
    type Query { x: Int }
    type Subscription { count(to: Int!): Int ticks: Int }
    schema { query: Query subscription: Subscription }
";

/// A schema whose `count` field streams `1..=to` and whose `ticks` field
/// has no subscribe function.
fn counting_schema() -> Arc<Schema> {
    let schema = SchemaBuilder::new()
        .load_str(SUBSCRIPTION_SDL)
        .unwrap()
        .subscriber("Subscription", "count", |params| {
            let to = params.arg("to").and_then(Value::as_i64).unwrap_or_default();
            if to < 0 {
                return Err("negative count".into());
            }
            let events = (1..=to).map(|i| -> Result<Value, BoxError> {
                if i == 3 { Err("skipped three".into()) } else { Ok(Value::from(i)) }
            });
            Ok(stream::iter(events).boxed())
        })
        .resolver("Subscription", "count", |params| Ok(params.source.clone().into()))
        .build()
        .unwrap();
    Arc::new(schema)
}

async fn collect(body: &str) -> Vec<ExecutionResult> {
    setup_logger();
    let params = ExecuteParams::new(counting_schema(), Arc::new(parse_doc(body)));
    subscribe(params).collect().await
}

/// Verifies that every source event is executed against the selection
/// set, with event errors reported in place.
#[tokio::test(flavor = "multi_thread")]
async fn each_event_yields_a_result() {
    let results = collect("subscription { count(to: 4) }").await;
    assert_eq!(results.len(), 4);
    assert_eq!(data_json(&results[0]), r#"{"count":1}"#);
    assert_eq!(data_json(&results[1]), r#"{"count":2}"#);
    assert_eq!(results[2].data, None);
    assert_eq!(results[2].errors[0].message, "skipped three");
    assert_eq!(data_json(&results[3]), r#"{"count":4}"#);
}

/// Verifies that an aliased subscription field keys results by alias.
#[tokio::test(flavor = "multi_thread")]
async fn aliased_subscription_field() {
    let results = collect("subscription { n: count(to: 1) __typename }").await;
    assert_eq!(results.len(), 1);
    assert_eq!(data_json(&results[0]), r#"{"n":1,"__typename":"Subscription"}"#);
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_subscribe_function() {
    let results = collect("subscription { ticks }").await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].data, None);
    assert_eq!(
        results[0].errors[0].message,
        "Subscription field \"ticks\" has no subscribe function",
    );
}

/// Verifies that a subscribe function's error ends the subscription with
/// a single error result.
#[tokio::test(flavor = "multi_thread")]
async fn subscribe_function_failure() {
    let results = collect("subscription { count(to: -1) }").await;
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].errors[0].message,
        "Failed to create the event stream for \"count\": negative count",
    );
}

/// Verifies that subscribing to a query runs it once.
#[tokio::test(flavor = "multi_thread")]
async fn non_subscription_operation_runs_once() {
    let results = collect("{ x }").await;
    assert_eq!(results.len(), 1);
    assert_eq!(data_json(&results[0]), r#"{"x":null}"#);
}

/// Verifies that cancelling the request ends a subscription whose source
/// would otherwise never finish.
#[tokio::test(flavor = "multi_thread")]
async fn cancellation_ends_subscription() {
    setup_logger();
    let schema = SchemaBuilder::new()
        .load_str(SUBSCRIPTION_SDL)
        .unwrap()
        .subscriber("Subscription", "ticks", |_| {
            let first = stream::iter([Ok::<_, BoxError>(Value::object([("ticks", 1.into())]))]);
            Ok(first.chain(stream::pending()).boxed())
        })
        .build()
        .unwrap();
    let context = RequestContext::new();
    let params = ExecuteParams::new(Arc::new(schema), Arc::new(parse_doc("subscription { ticks }")))
        .with_context(context.clone());
    let mut results = subscribe(params);

    let first = results.next().await.unwrap();
    assert_eq!(data_json(&first), r#"{"ticks":1}"#);

    context.cancel();
    let next = tokio::time::timeout(Duration::from_secs(5), results.next())
        .await
        .expect("subscription ignored cancellation");
    assert!(next.is_none());
}
