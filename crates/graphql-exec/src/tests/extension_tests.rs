use crate::do_request;
use crate::error::BoxError;
use crate::error::FormattedError;
use crate::parser::SyntaxError;
use crate::resolver::ResolveInfo;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::tests::utils::setup_logger;
use crate::tests::utils::to_json;
use crate::Extension;
use crate::Params;
use crate::RequestContext;
use crate::Value;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

/// Logs every stage it observes and reports how many fields resolved.
#[derive(Default)]
struct StageLog {
    stages: Mutex<Vec<String>>,
    resolved_fields: AtomicUsize,
}

impl StageLog {
    fn push(&self, stage: impl Into<String>) {
        self.stages.lock().unwrap().push(stage.into());
    }

    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.stages.lock().unwrap())
    }
}

impl Extension for StageLog {
    fn name(&self) -> &str {
        "stageLog"
    }

    fn init(&self, _context: &RequestContext) {
        self.resolved_fields.store(0, Ordering::SeqCst);
        self.push("init");
    }

    fn parse_did_start(&self, _context: &RequestContext) {
        self.push("parse");
    }

    fn parse_ended(&self, _context: &RequestContext, error: Option<&SyntaxError>) {
        self.push(format!("parsed ok={}", error.is_none()));
    }

    fn validation_did_start(&self, _context: &RequestContext) {
        self.push("validate");
    }

    fn validation_ended(&self, _context: &RequestContext, errors: &[FormattedError]) {
        self.push(format!("validated errors={}", errors.len()));
    }

    fn execution_did_start(&self, _context: &RequestContext) {
        self.push("execute");
    }

    fn execution_ended(&self, _context: &RequestContext) {
        self.push("executed");
    }

    fn resolve_field_ended(
        &self,
        _context: &RequestContext,
        _info: &ResolveInfo<'_>,
        _result: Result<&Value, &BoxError>,
    ) {
        self.resolved_fields.fetch_add(1, Ordering::SeqCst);
    }

    fn result(&self, _context: &RequestContext) -> Option<Value> {
        Some(Value::object([(
            "resolvedFields",
            Value::Int(self.resolved_fields.load(Ordering::SeqCst) as i64),
        )]))
    }
}

/// Reports nothing, so it never shows up in `extensions`.
struct Silent;

impl Extension for Silent {
    fn name(&self) -> &str {
        "silent"
    }
}

fn schema_with(log: Arc<StageLog>) -> Arc<Schema> {
    let schema = SchemaBuilder::new()
        .load_str("type Query { a: Int b: Int }")
        .unwrap()
        .shared_extension(log)
        .extension(Silent)
        .build()
        .unwrap();
    Arc::new(schema)
}

/// Verifies that a successful request passes through every stage in
/// order and carries the extension's result.
#[tokio::test(flavor = "multi_thread")]
async fn observes_every_stage() {
    setup_logger();
    let log = Arc::new(StageLog::default());
    let response = do_request(
        Params::new(schema_with(log.clone()), "{ a b }")
            .with_root_object(Value::object([("a", Value::Int(1)), ("b", Value::Int(2))])),
    ).await;
    assert_eq!(
        to_json(&response),
        r#"{"data":{"a":1,"b":2},"extensions":{"stageLog":{"resolvedFields":2}}}"#,
    );
    assert_eq!(log.take(), vec![
        "init",
        "parse",
        "parsed ok=true",
        "validate",
        "validated errors=0",
        "execute",
        "executed",
    ]);
}

/// Verifies that a syntax error ends the request after the parse hooks,
/// with the extension result still reported.
#[tokio::test(flavor = "multi_thread")]
async fn stops_after_parse_failure() {
    setup_logger();
    let log = Arc::new(StageLog::default());
    let response = do_request(Params::new(schema_with(log.clone()), "{ a")).await;
    assert!(response.data.is_none());
    assert_eq!(
        response.extensions.get("stageLog"),
        Some(&Value::object([("resolvedFields", Value::Int(0))])),
    );
    assert!(!response.extensions.contains_key("silent"));
    assert_eq!(log.take(), vec!["init", "parse", "parsed ok=false"]);
}

/// Verifies that validation errors reach the extension before the
/// request ends.
#[tokio::test(flavor = "multi_thread")]
async fn stops_after_validation_failure() {
    setup_logger();
    let log = Arc::new(StageLog::default());
    let response = do_request(Params::new(schema_with(log.clone()), "{ c }")).await;
    assert!(response.data.is_none());
    assert_eq!(response.errors.len(), 1);
    assert_eq!(log.take(), vec!["init", "parse", "parsed ok=true", "validate", "validated errors=1"]);
}
