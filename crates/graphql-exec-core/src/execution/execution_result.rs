use crate::error::FormattedError;
use crate::error::GraphQLError;
use crate::Value;

/// The outcome of executing one operation.
///
/// `data` is `None` when execution never started (no operation could be
/// selected or variables failed to coerce). It is `Some(Value::Null)` when
/// a field error propagated all the way to the root or the request was
/// cancelled during execution.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ExecutionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FormattedError>,
}

impl ExecutionResult {
    /// A result with no data and a single error.
    pub fn from_error(error: impl Into<GraphQLError>) -> Self {
        Self {
            data: None,
            errors: vec![FormattedError::from(error.into())],
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}
