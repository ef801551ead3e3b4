use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::tests::utils::data_json;
use crate::tests::utils::run;
use crate::Value;
use std::sync::Arc;

const SDL: &str = r#"
    interface Named { name: String }

    type Dog implements Named {
      name: String
      tags(first: Int = 3, color: Color = RED): [String!]!
      oldName: String @deprecated(reason: "use name")
    }

    type Cat implements Named { name: String }

    union Pet = Cat | Dog

    enum Color { RED GREEN @deprecated BLUE }

    input Filter { color: Color = BLUE limit: Int! }

    type Query { dog: Dog pet(filter: Filter): Pet }

    directive @cached(ttl: Int) repeatable on FIELD | QUERY
"#;

fn schema() -> Arc<Schema> {
    Arc::new(SchemaBuilder::new().load_str(SDL).unwrap().build().unwrap())
}

async fn introspect(body: &str) -> String {
    let result = run(schema(), body, Value::Null).await;
    assert!(result.is_ok(), "{:#?}", result.errors);
    data_json(&result)
}

#[tokio::test(flavor = "multi_thread")]
async fn schema_root_types() {
    assert_eq!(
        introspect(
            "{ __schema { queryType { name } mutationType { name } subscriptionType { name } } }",
        ).await,
        r#"{"__schema":{"queryType":{"name":"Query"},"mutationType":null,"subscriptionType":null}}"#,
    );
}

/// Verifies that `__schema.types` lists user, built-in and introspection
/// types.
#[tokio::test(flavor = "multi_thread")]
async fn schema_lists_every_type() {
    let result = run(schema(), "{ __schema { types { name } } }", Value::Null).await;
    let data = serde_json::Value::from(&result.data.unwrap());
    let names: Vec<&str> = data["__schema"]["types"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|type_| type_["name"].as_str())
        .collect();
    for expected in ["Named", "Dog", "Cat", "Pet", "Color", "Filter", "Query", "String", "__Type"] {
        assert!(names.contains(&expected), "missing {expected} in {names:?}");
    }
}

/// Verifies that wrapped field types unwrap through `ofType`.
#[tokio::test(flavor = "multi_thread")]
async fn type_wrappers() {
    let body = r#"{ __type(name: "Dog") {
        kind name
        interfaces { name }
        fields { name type { kind name ofType { kind name ofType { kind name ofType { name } } } } }
    } }"#;
    assert_eq!(
        introspect(body).await,
        concat!(
            r#"{"__type":{"kind":"OBJECT","name":"Dog","interfaces":[{"name":"Named"}],"fields":["#,
            r#"{"name":"name","type":{"kind":"SCALAR","name":"String","ofType":null}},"#,
            r#"{"name":"tags","type":{"kind":"NON_NULL","name":null,"ofType":{"kind":"LIST","name":null,"#,
            r#""ofType":{"kind":"NON_NULL","name":null,"ofType":{"name":"String"}}}}}]}}"#,
        ),
    );
}

/// Verifies that deprecated fields and enum values only appear when
/// asked for, along with their reasons.
#[tokio::test(flavor = "multi_thread")]
async fn deprecated_members() {
    let body = r#"{
        dog: __type(name: "Dog") { fields(includeDeprecated: true) { name isDeprecated deprecationReason } }
        color: __type(name: "Color") { enumValues { name } all: enumValues(includeDeprecated: true) { name isDeprecated } }
    }"#;
    assert_eq!(
        introspect(body).await,
        concat!(
            r#"{"dog":{"fields":["#,
            r#"{"name":"name","isDeprecated":false,"deprecationReason":null},"#,
            r#"{"name":"tags","isDeprecated":false,"deprecationReason":null},"#,
            r#"{"name":"oldName","isDeprecated":true,"deprecationReason":"use name"}]},"#,
            r#""color":{"enumValues":[{"name":"RED"},{"name":"BLUE"}],"all":["#,
            r#"{"name":"RED","isDeprecated":false},{"name":"GREEN","isDeprecated":true},"#,
            r#"{"name":"BLUE","isDeprecated":false}]}}"#,
        ),
    );
}

/// Verifies that arguments and input fields print their defaults as
/// GraphQL literals.
#[tokio::test(flavor = "multi_thread")]
async fn input_values_and_defaults() {
    let body = r#"{
        dog: __type(name: "Dog") { fields { args { name defaultValue } } }
        filter: __type(name: "Filter") { kind inputFields { name defaultValue type { kind } } }
    }"#;
    assert_eq!(
        introspect(body).await,
        concat!(
            r#"{"dog":{"fields":[{"args":[]},{"args":[{"name":"first","defaultValue":"3"},"#,
            r#"{"name":"color","defaultValue":"RED"}]}]},"#,
            r#""filter":{"kind":"INPUT_OBJECT","inputFields":["#,
            r#"{"name":"color","defaultValue":"BLUE","type":{"kind":"ENUM"}},"#,
            r#"{"name":"limit","defaultValue":null,"type":{"kind":"NON_NULL"}}]}}"#,
        ),
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn abstract_type_members() {
    let body = r#"{
        named: __type(name: "Named") { kind description possibleTypes { name } fields { name } }
        pet: __type(name: "Pet") { kind possibleTypes { name } fields { name } }
    }"#;
    assert_eq!(
        introspect(body).await,
        concat!(
            r#"{"named":{"kind":"INTERFACE","description":null,"#,
            r#""possibleTypes":[{"name":"Dog"},{"name":"Cat"}],"fields":[{"name":"name"}]},"#,
            r#""pet":{"kind":"UNION","possibleTypes":[{"name":"Cat"},{"name":"Dog"}],"fields":null}}"#,
        ),
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_type_is_null() {
    assert_eq!(introspect(r#"{ __type(name: "Nope") { name } }"#).await, r#"{"__type":null}"#);
}

#[tokio::test(flavor = "multi_thread")]
async fn directives() {
    let result = run(
        schema(),
        "{ __schema { directives { name locations isRepeatable args { name } } } }",
        Value::Null,
    ).await;
    let data = serde_json::Value::from(&result.data.unwrap());
    let directives = data["__schema"]["directives"].as_array().unwrap();
    let cached = directives
        .iter()
        .find(|directive| directive["name"] == "cached")
        .unwrap();
    assert_eq!(
        cached.to_string(),
        r#"{"name":"cached","locations":["FIELD","QUERY"],"isRepeatable":true,"args":[{"name":"ttl"}]}"#,
    );
    let names: Vec<&str> = directives.iter().filter_map(|d| d["name"].as_str()).collect();
    assert_eq!(names, vec!["include", "skip", "deprecated", "cached"]);
}
