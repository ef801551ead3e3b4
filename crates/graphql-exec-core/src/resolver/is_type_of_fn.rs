use crate::resolver::ResolveInfo;
use crate::Value;
use std::sync::Arc;

type IsTypeOfFnInner = dyn Fn(&Value, &ResolveInfo<'_>) -> bool + Send + Sync;

/// Tells whether a value belongs to a particular object type. Consulted
/// for each possible type of an abstract type that has no
/// [`TypeResolveFn`](crate::resolver::TypeResolveFn).
#[derive(Clone)]
pub struct IsTypeOfFn(Arc<IsTypeOfFnInner>);

impl IsTypeOfFn {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value, &ResolveInfo<'_>) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, value: &Value, info: &ResolveInfo<'_>) -> bool {
        (self.0)(value, info)
    }
}

impl std::fmt::Debug for IsTypeOfFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("IsTypeOfFn(..)")
    }
}
