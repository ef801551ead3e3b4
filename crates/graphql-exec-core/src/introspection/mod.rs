//! The `__Schema`, `__Type` and related introspection types, resolved
//! against the schema being queried.

mod introspected;
mod introspection_types;
mod meta_fields;

pub(crate) use introspected::Introspected;
pub(crate) use introspected::list_of;
pub(crate) use introspection_types::types;
pub(crate) use meta_fields::meta_fields;
