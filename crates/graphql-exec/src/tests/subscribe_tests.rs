use crate::error::BoxError;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::subscribe;
use crate::tests::utils::setup_logger;
use crate::tests::utils::to_json;
use crate::Params;
use crate::Value;
use futures::stream;
use futures::StreamExt;
use std::sync::Arc;

fn ticker_schema() -> Arc<Schema> {
    let schema = SchemaBuilder::new()
        .load_str("
            type Query { x: Int }
            type Subscription { tick(times: Int!): Int }
        ")
        .unwrap()
        .subscriber("Subscription", "tick", |params| {
            let times = params.arg("times").and_then(Value::as_i64).unwrap_or_default();
            Ok(stream::iter((0..times).map(|i| Ok::<_, BoxError>(Value::Int(i)))).boxed())
        })
        .resolver("Subscription", "tick", |params| Ok(params.source.clone().into()))
        .build()
        .unwrap();
    Arc::new(schema)
}

/// Verifies that each source event becomes one response.
#[tokio::test(flavor = "multi_thread")]
async fn streams_a_response_per_event() {
    setup_logger();
    let responses: Vec<String> = subscribe(Params::new(ticker_schema(), "subscription { tick(times: 3) }"))
        .map(|response| to_json(&response))
        .collect()
        .await;
    assert_eq!(responses, vec![
        r#"{"data":{"tick":0}}"#,
        r#"{"data":{"tick":1}}"#,
        r#"{"data":{"tick":2}}"#,
    ]);
}

/// Verifies that a request failing validation yields exactly one error
/// response.
#[tokio::test(flavor = "multi_thread")]
async fn invalid_subscription_yields_one_response() {
    setup_logger();
    let responses: Vec<_> = subscribe(Params::new(ticker_schema(), "subscription { tick }"))
        .collect()
        .await;
    assert_eq!(responses.len(), 1);
    assert!(responses[0].data.is_none());
    assert_eq!(
        responses[0].errors[0].message,
        "Field \"tick\" argument \"times\" of type \"Int!\" is required but not provided.",
    );
}
