use crate::request_context::RequestContext;
use crate::resolver::ResolveInfo;
use crate::Value;
use indexmap::IndexMap;

/// Everything a resolver receives for one field of one object.
#[derive(Clone, Copy, Debug)]
pub struct ResolveParams<'r> {
    /// The parent object's value (the root value for root fields).
    pub source: &'r Value,

    /// Coerced argument values. Arguments that were neither provided nor
    /// defaulted are absent; explicit `null`s are present as
    /// [`Value::Null`].
    pub args: &'r IndexMap<String, Value>,

    pub context: &'r RequestContext,

    pub info: &'r ResolveInfo<'r>,
}

impl ResolveParams<'_> {
    /// Shorthand for looking up a single argument.
    pub fn arg(&self, name: &str) -> Option<&Value> {
        self.args.get(name)
    }
}
