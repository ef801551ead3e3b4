use crate::error::BoxError;
use crate::resolver::ResolveParams;
use crate::types::Directive;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputValue;
use crate::types::TypeAnnotation;
use crate::Value;

/// The source value handed to the resolvers of introspection types.
#[derive(Clone, Debug)]
pub(crate) enum Introspected {
    Schema,
    Type(TypeAnnotation),
    Field(Field),
    InputValue(InputValue),
    EnumValue(EnumValue),
    Directive(Directive),
}

impl Introspected {
    pub(crate) fn into_value(self) -> Value {
        Value::opaque(self)
    }

    /// The introspection value a resolver was called on.
    pub(crate) fn of<'r>(params: ResolveParams<'r>) -> Result<&'r Introspected, BoxError> {
        params.source
            .downcast_ref::<Introspected>()
            .ok_or_else(|| format!(
                "{}.{} was resolved on a non-introspection value",
                params.info.parent_type.data.name,
                params.info.field_name,
            ).into())
    }
}

pub(crate) fn list_of(items: impl IntoIterator<Item = Introspected>) -> Value {
    Value::List(items.into_iter().map(Introspected::into_value).collect())
}
