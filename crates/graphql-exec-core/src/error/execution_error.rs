use graphql_exec_parser::ast::OperationType;

/// Failures that prevent execution from starting once a document has
/// been validated.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ExecutionError {
    #[error("Must provide an operation.")]
    NoOperation,

    #[error("Must provide operation name if query contains multiple operations.")]
    OperationNameRequired,

    #[error("Unknown operation named \"{operation_name}\".")]
    UnknownOperation {
        operation_name: String,
    },

    #[error("Schema is not configured for {}s", operation.as_str())]
    UnsupportedOperation {
        operation: OperationType,
    },

    #[error("Subscription field \"{field_name}\" has no subscribe function")]
    MissingSubscribeFunction {
        field_name: String,
    },

    #[error("Failed to create the event stream for \"{field_name}\": {message}")]
    SubscribeFailed {
        field_name: String,
        message: String,
    },
}
