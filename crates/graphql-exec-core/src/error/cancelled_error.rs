/// The request's [`RequestContext`](crate::RequestContext) was cancelled
/// before execution finished.
#[derive(Clone, Debug, Default, PartialEq, thiserror::Error)]
#[error("Request was cancelled")]
pub struct CancelledError;
