use crate::resolver::bind;
use crate::schema::SchemaBuilder;
use crate::tests::utils::data_json;
use crate::tests::utils::run;
use crate::RequestContext;
use crate::Value;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

const SDL: &str = r#"
    type Person { fullName: String age: Int }
    type Query {
      person(firstName: String!, lastName: String, age: Int = 30): Person
      shout(text: String): String
    }
"#;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonArgs {
    first_name: String,
    last_name: Option<String>,
    age: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Person {
    full_name: String,
    age: i64,
}

#[derive(Deserialize)]
struct ShoutArgs {
    text: String,
}

fn schema() -> Arc<crate::schema::Schema> {
    let person = bind(|_ctx: &RequestContext, args: PersonArgs| {
        let full_name = match args.last_name {
            Some(last_name) => format!("{} {last_name}", args.first_name),
            None => args.first_name,
        };
        Ok::<_, std::convert::Infallible>(Person { full_name, age: args.age })
    });
    let shout = bind(|ctx: &RequestContext, args: ShoutArgs| {
        if args.text.is_empty() {
            return Err("nothing to shout");
        }
        let suffix = ctx.data::<String>().cloned().unwrap_or_default();
        Ok(format!("{}{suffix}", args.text.to_uppercase()))
    });
    let schema = SchemaBuilder::new()
        .load_str(SDL)
        .unwrap()
        .resolver("Query", "person", move |params| person.call(params))
        .resolver("Query", "shout", move |params| shout.call(params))
        .build()
        .unwrap();
    Arc::new(schema)
}

/// Verifies that camelCase arguments deserialize into the input struct and
/// that the output struct serializes into an object value.
#[tokio::test(flavor = "multi_thread")]
async fn binds_typed_arguments_and_output() {
    let result = run(
        schema(),
        r#"{ a: person(firstName: "Ada", lastName: "Lovelace") { fullName age }
             b: person(firstName: "Alan", age: 41) { fullName age } }"#,
        Value::Null,
    ).await;
    assert!(result.errors.is_empty(), "{:#?}", result.errors);
    assert_eq!(
        data_json(&result),
        r#"{"a":{"fullName":"Ada Lovelace","age":30},"b":{"fullName":"Alan","age":41}}"#,
    );
}

/// Verifies that arguments the input struct can't be built from become a
/// field error rather than a failed request.
#[tokio::test(flavor = "multi_thread")]
async fn missing_input_becomes_field_error() {
    let result = run(schema(), "{ shout }", Value::Null).await;
    assert_eq!(data_json(&result), r#"{"shout":null}"#);
    assert_eq!(result.errors.len(), 1);
    assert!(
        result.errors[0].message.contains("missing field `text`"),
        "{}",
        result.errors[0].message,
    );
}

/// Verifies that the bound function's own error is reported with its
/// message.
#[tokio::test(flavor = "multi_thread")]
async fn function_error_becomes_field_error() {
    let result = run(schema(), r#"{ shout(text: "") }"#, Value::Null).await;
    assert_eq!(data_json(&result), r#"{"shout":null}"#);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "nothing to shout");
}
