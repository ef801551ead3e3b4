use crate::error::BoxError;
use crate::error::PathSegment;
use graphql_exec_parser::SourceLocation;
use std::sync::Arc;

/// A resolver or completion failure for a single field.
///
/// Field errors never abort a request: the field's value becomes `null`
/// (propagating to the nearest nullable ancestor) and the error is
/// reported alongside the data.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    pub message: String,
    pub path: Vec<PathSegment>,
    pub locations: Vec<SourceLocation>,
    original_error: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl FieldError {
    pub fn new(
        message: impl Into<String>,
        path: Vec<PathSegment>,
        locations: Vec<SourceLocation>,
    ) -> Self {
        Self {
            message: message.into(),
            path,
            locations,
            original_error: None,
        }
    }

    /// Builds a field error whose message is taken from `error`, keeping
    /// `error` as the original error.
    pub fn from_error(
        error: BoxError,
        path: Vec<PathSegment>,
        locations: Vec<SourceLocation>,
    ) -> Self {
        Self {
            message: error.to_string(),
            path,
            locations,
            original_error: Some(Arc::from(error)),
        }
    }

    /// The error the resolver returned, if this field error wraps one.
    pub fn original_error(&self) -> Option<&(dyn std::error::Error + Send + Sync)> {
        self.original_error.as_deref()
    }
}

impl PartialEq for FieldError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.path == other.path
            && self.locations == other.locations
    }
}
