use crate::error::BoxError;
use crate::resolver::ResolveParams;
use crate::resolver::Resolved;
use std::sync::Arc;

type ResolveFnInner =
    dyn for<'r> Fn(ResolveParams<'r>) -> Result<Resolved, BoxError> + Send + Sync;

/// Produces the value of a field.
///
/// A resolver either returns its value directly or returns
/// [`Resolved::Thunk`] for work that should run concurrently with its
/// siblings.
///
/// ```rust
/// use graphql_exec_core::resolver::ResolveFn;
/// use graphql_exec_core::Value;
///
/// let hello = ResolveFn::new(|_params| Ok(Value::from("world").into()));
/// # let _ = hello;
/// ```
#[derive(Clone)]
pub struct ResolveFn(Arc<ResolveFnInner>);

impl ResolveFn {
    pub fn new<F>(f: F) -> Self
    where
        F: for<'r> Fn(ResolveParams<'r>) -> Result<Resolved, BoxError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, params: ResolveParams<'_>) -> Result<Resolved, BoxError> {
        (self.0)(params)
    }
}

impl std::fmt::Debug for ResolveFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ResolveFn(..)")
    }
}
