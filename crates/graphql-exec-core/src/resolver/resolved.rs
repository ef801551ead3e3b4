use crate::error::BoxError;
use crate::Value;
use futures::future::BoxFuture;
use futures::FutureExt;

/// What a [`ResolveFn`](crate::resolver::ResolveFn) produced.
pub enum Resolved {
    /// A value that's already complete.
    Value(Value),

    /// Deferred work. The executor starts every sibling field before
    /// awaiting any thunk, so sibling thunks run concurrently.
    Thunk(BoxFuture<'static, Result<Value, BoxError>>),
}

impl Resolved {
    pub fn thunk<F>(future: F) -> Self
    where
        F: Future<Output = Result<Value, BoxError>> + Send + 'static,
    {
        Self::Thunk(future.boxed())
    }
}

impl From<Value> for Resolved {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl std::fmt::Debug for Resolved {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Thunk(_) => f.write_str("Thunk(..)"),
        }
    }
}
