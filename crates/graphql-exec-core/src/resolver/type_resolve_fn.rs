use crate::resolver::ResolveInfo;
use crate::Value;
use std::sync::Arc;

type TypeResolveFnInner = dyn Fn(&Value, &ResolveInfo<'_>) -> Option<String> + Send + Sync;

/// Picks the concrete object type (by name) of a value whose declared type
/// is an interface or union.
#[derive(Clone)]
pub struct TypeResolveFn(Arc<TypeResolveFnInner>);

impl TypeResolveFn {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value, &ResolveInfo<'_>) -> Option<String> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, value: &Value, info: &ResolveInfo<'_>) -> Option<String> {
        (self.0)(value, info)
    }
}

impl std::fmt::Debug for TypeResolveFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TypeResolveFn(..)")
    }
}
