use crate::error::GraphQLError;
use crate::error::PathSegment;
use graphql_exec_parser::SourceLocation;
use std::sync::Arc;

/// An error as it appears in the `errors` list of a response.
///
/// `cause` keeps the originating [`GraphQLError`] for operators; it's
/// never serialized.
#[derive(Clone, Debug, serde::Serialize)]
pub struct FormattedError {
    pub message: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<SourceLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathSegment>>,

    #[serde(skip)]
    pub cause: Option<Arc<GraphQLError>>,
}

impl FormattedError {
    /// A formatted error with only a message and no cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: vec![],
            path: None,
            cause: None,
        }
    }
}

impl PartialEq for FormattedError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.locations == other.locations
            && self.path == other.path
    }
}

impl std::fmt::Display for FormattedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<GraphQLError> for FormattedError {
    fn from(error: GraphQLError) -> Self {
        Self {
            message: error.message(),
            locations: error.locations(),
            path: error.path().map(<[PathSegment]>::to_vec),
            cause: Some(Arc::new(error)),
        }
    }
}
