use crate::error::FormattedError;
use crate::error::PathSegment;
use crate::parser::SourceLocation;
use crate::Request;
use crate::Response;
use crate::Value;
use indexmap::IndexMap;

/// Verifies that a transport request body decodes with camelCase keys.
#[test]
fn request_decodes_camel_case() {
    let request: Request = serde_json::from_str(
        r#"{"query":"query Q { a }","operationName":"Q","variables":{"n":1,"s":"x","l":[true,null]}}"#,
    ).unwrap();
    assert_eq!(request.query, "query Q { a }");
    assert_eq!(request.operation_name.as_deref(), Some("Q"));
    let variables = request.variables.unwrap();
    assert_eq!(variables.get("n"), Some(&Value::Int(1)));
    assert_eq!(variables.get("s"), Some(&Value::from("x")));
    assert_eq!(variables.get("l"), Some(&Value::List(vec![Value::Boolean(true), Value::Null])));
}

/// Verifies that only `query` is required.
#[test]
fn request_optional_fields() {
    let request: Request = serde_json::from_str(r#"{"query":"{ a }"}"#).unwrap();
    assert_eq!(request, Request { query: "{ a }".to_string(), ..Request::default() });
    assert!(serde_json::from_str::<Request>(r#"{"operationName":"Q"}"#).is_err());
}

/// Verifies that empty members are left out of a serialized response.
#[test]
fn response_omits_empty_members() {
    let response = Response {
        data: Some(Value::object([("a", Value::Int(1))])),
        ..Response::default()
    };
    assert!(response.is_ok());
    assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"data":{"a":1}}"#);

    assert_eq!(serde_json::to_string(&Response::default()).unwrap(), "{}");
}

/// Verifies the full shape of a response carrying errors and extensions.
#[test]
fn response_with_errors_and_extensions() {
    let mut error = FormattedError::new("boom");
    error.locations = vec![SourceLocation { line: 2, column: 5 }];
    error.path = Some(vec![PathSegment::from("list"), PathSegment::Index(0)]);
    let response = Response {
        data: Some(Value::object([("list", Value::List(vec![Value::Null]))])),
        errors: vec![error, FormattedError::new("second")],
        extensions: IndexMap::from([("cost".to_string(), Value::Int(3))]),
    };
    assert!(!response.is_ok());
    assert_eq!(
        serde_json::to_string(&response).unwrap(),
        concat!(
            r#"{"data":{"list":[null]},"errors":[{"message":"boom","#,
            r#""locations":[{"line":2,"column":5}],"path":["list",0]},"#,
            r#"{"message":"second"}],"extensions":{"cost":3}}"#,
        ),
    );
}
