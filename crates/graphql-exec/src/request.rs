use graphql_exec_core::Value;
use indexmap::IndexMap;

/// A GraphQL request as transports receive it, e.g. the JSON body of an
/// HTTP POST:
///
/// ```json
/// { "query": "query Q($id: ID!) { node(id: $id) { id } }",
///   "operationName": "Q",
///   "variables": { "id": 42 } }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub query: String,

    #[serde(default)]
    pub operation_name: Option<String>,

    #[serde(default)]
    pub variables: Option<IndexMap<String, Value>>,
}
