use crate::error::BoxError;
use crate::resolver::ResolveParams;
use crate::Value;
use futures::stream::BoxStream;
use std::sync::Arc;

/// The source events of a subscription. Each item becomes the root value
/// of one execution of the subscription's selection set.
pub type EventStream = BoxStream<'static, Result<Value, BoxError>>;

type SubscribeFnInner =
    dyn for<'r> Fn(ResolveParams<'r>) -> Result<EventStream, BoxError> + Send + Sync;

/// Creates the event stream for a root subscription field.
#[derive(Clone)]
pub struct SubscribeFn(Arc<SubscribeFnInner>);

impl SubscribeFn {
    pub fn new<F>(f: F) -> Self
    where
        F: for<'r> Fn(ResolveParams<'r>) -> Result<EventStream, BoxError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, params: ResolveParams<'_>) -> Result<EventStream, BoxError> {
        (self.0)(params)
    }
}

impl std::fmt::Debug for SubscribeFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SubscribeFn(..)")
    }
}
