use std::any::Any;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tokio_util::sync::WaitForCancellationFuture;

/// Request-scoped state handed to every resolver.
///
/// Carries the request's [`CancellationToken`] and an optional piece of
/// application data (a database handle, the authenticated user, ...).
/// Cloning is cheap and clones share both.
#[derive(Clone, Default)]
pub struct RequestContext {
    cancellation_token: CancellationToken,
    data: Option<Arc<dyn Any + Send + Sync>>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ties this context to an existing token, e.g. one owned by the
    /// transport that cancels when the client disconnects.
    pub fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = token;
        self
    }

    pub fn with_data<T: Any + Send + Sync>(mut self, data: T) -> Self {
        self.data = Some(Arc::new(data));
        self
    }

    /// The application data, if it was set and has type `T`.
    pub fn data<T: Any>(&self) -> Option<&T> {
        self.data.as_deref().and_then(|data| data.downcast_ref::<T>())
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation_token
    }

    pub fn cancel(&self) {
        self.cancellation_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation_token.is_cancelled()
    }

    /// Completes once the request is cancelled.
    pub fn cancelled(&self) -> WaitForCancellationFuture<'_> {
        self.cancellation_token.cancelled()
    }
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("cancelled", &self.is_cancelled())
            .field("has_data", &self.data.is_some())
            .finish()
    }
}
