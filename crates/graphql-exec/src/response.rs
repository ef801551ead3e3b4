use graphql_exec_core::ExecutionResult;
use graphql_exec_core::Value;
use graphql_exec_core::error::FormattedError;
use indexmap::IndexMap;

/// The result of a request in the canonical wire shape.
///
/// `data` is omitted when the request failed before execution started,
/// `errors` when there are none and `extensions` when no extension
/// contributed a result.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FormattedError>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: IndexMap<String, Value>,
}

impl Response {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn with_extensions(mut self, extensions: IndexMap<String, Value>) -> Self {
        self.extensions = extensions;
        self
    }
}

impl From<ExecutionResult> for Response {
    fn from(result: ExecutionResult) -> Self {
        Self {
            data: result.data,
            errors: result.errors,
            extensions: IndexMap::new(),
        }
    }
}
