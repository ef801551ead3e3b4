use crate::error::BoxError;
use crate::request_context::RequestContext;
use crate::resolver::ResolveFn;
use crate::Value;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Adapts a typed function into a [`ResolveFn`].
///
/// The field's coerced arguments are deserialized into `In` (an object
/// keyed by argument name, so `In` is usually a struct with
/// `#[serde(rename_all = "camelCase")]`) and the returned `Out` is
/// serialized back into a [`Value`]. Failing either conversion is a field
/// error.
///
/// ```rust
/// use graphql_exec_core::resolver::bind;
/// use graphql_exec_core::RequestContext;
///
/// #[derive(serde::Deserialize)]
/// struct Greet {
///     name: String,
/// }
///
/// let greet = bind(|_ctx: &RequestContext, input: Greet| {
///     Ok::<_, std::convert::Infallible>(format!("Hello, {}!", input.name))
/// });
/// # let _ = greet;
/// ```
pub fn bind<In, Out, E, F>(f: F) -> ResolveFn
where
    In: DeserializeOwned,
    Out: Serialize,
    E: Into<BoxError>,
    F: Fn(&RequestContext, In) -> Result<Out, E> + Send + Sync + 'static,
{
    ResolveFn::new(move |params| {
        let args: serde_json::Map<String, serde_json::Value> = params
            .args
            .iter()
            .map(|(name, value)| (name.clone(), serde_json::Value::from(value)))
            .collect();
        let input: In = serde_json::from_value(serde_json::Value::Object(args))?;
        let output = f(params.context, input).map_err(Into::<BoxError>::into)?;
        Ok(Value::from(serde_json::to_value(output)?).into())
    })
}
