//! The runtime type system: named types, fields, arguments, directives and
//! the builders that assemble them.
//!
//! Types refer to each other by name (through [`TypeAnnotation`]s and
//! interface/member name lists); a [`Schema`](crate::schema::Schema)
//! resolves those names. This keeps cyclic type graphs free of ownership
//! cycles.

mod builtin_scalars;
mod deprecation_state;
mod directive;
mod directive_location;
mod enum_type;
mod enum_type_builder;
mod enum_value;
mod field;
mod graphql_named_type;
mod graphql_type;
mod graphql_type_kind;
mod input_object_type;
mod input_object_type_builder;
mod input_value;
mod interface_type;
mod interface_type_builder;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_type;
mod object_type_builder;
mod scalar_type;
mod scalar_type_builder;
mod thunked_list;
mod type_annotation;
mod type_builder;
mod union_type;
mod union_type_builder;

pub use builtin_scalars::MAX_SAFE_INT;
pub use builtin_scalars::MIN_SAFE_INT;
pub use deprecation_state::DeprecationState;
pub use directive::Directive;
pub use directive::DEFAULT_DEPRECATION_REASON;
pub use directive_location::DirectiveLocation;
pub use enum_type::EnumType;
pub use enum_type_builder::EnumTypeBuilder;
pub use enum_value::EnumValue;
pub use field::Field;
pub use graphql_named_type::GraphQLNamedType;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_object_type::InputObjectType;
pub use input_object_type_builder::InputObjectTypeBuilder;
pub use input_value::InputValue;
pub use interface_type::InterfaceType;
pub use interface_type_builder::InterfaceTypeBuilder;
pub(crate) use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;
pub use object_type::ObjectType;
pub use object_type_builder::ObjectTypeBuilder;
pub use scalar_type::ScalarType;
pub(crate) use scalar_type::is_builtin_scalar_name;
pub use scalar_type_builder::ScalarTypeBuilder;
pub(crate) use thunked_list::ThunkedList;
pub use type_annotation::TypeAnnotation;
pub use type_builder::TypeBuilder;
pub use union_type::UnionType;
pub use union_type_builder::UnionTypeBuilder;
