use crate::introspection::Introspected;
use crate::resolver::ResolveFn;
use crate::types::Field;
use crate::types::InputValue;
use crate::types::TypeAnnotation;
use crate::Value;

/// The implicit `__typename`, `__schema` and `__type` fields.
pub(crate) fn meta_fields() -> (Field, Field, Field) {
    let typename = Field::new("__typename", TypeAnnotation::named("String").non_null())
        .with_description("The name of the current Object type at runtime.")
        .with_resolver(ResolveFn::new(|params| {
            Ok(Value::from(params.info.parent_type.name()).into())
        }));

    let schema = Field::new("__schema", TypeAnnotation::named("__Schema").non_null())
        .with_description("Access the current type schema of this server.")
        .with_resolver(ResolveFn::new(|_params| {
            Ok(Introspected::Schema.into_value().into())
        }));

    let type_ = Field::new("__type", TypeAnnotation::named("__Type"))
        .with_description("Request the type information of a single type.")
        .with_argument(InputValue::new("name", TypeAnnotation::named("String").non_null()))
        .with_resolver(ResolveFn::new(|params| {
            let type_name = params.arg("name").and_then(Value::as_str);
            Ok(match type_name {
                Some(name) if params.info.schema.get_type(name).is_some() =>
                    Introspected::Type(TypeAnnotation::named(name)).into_value(),
                _ => Value::Null,
            }.into())
        }));

    (typename, schema, type_)
}
