use crate::error::BoxError;
use graphql_exec_parser::SourceLocation;

/// A variable or argument value that can't be coerced into its declared
/// input type.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CoercionError {
    pub message: String,
    pub locations: Vec<SourceLocation>,
    #[source]
    pub cause: Option<BoxError>,
}

impl CoercionError {
    pub fn new(message: impl Into<String>, locations: Vec<SourceLocation>) -> Self {
        Self {
            message: message.into(),
            locations,
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: impl Into<BoxError>) -> Self {
        self.cause = Some(cause.into());
        self
    }
}
