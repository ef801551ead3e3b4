//! Schema assembly and validation.
//!
//! A [`SchemaBuilder`] collects types (registered in code or loaded from
//! schema definition language), checks them against each other and
//! produces an immutable [`Schema`].

mod input_object_type_validator;
mod object_or_interface_type_validator;
mod schema;
mod schema_build_error;
mod schema_builder;
mod schema_config;
mod type_validation_error;
mod union_type_validator;

use input_object_type_validator::InputObjectTypeValidator;
use object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
pub use schema::Schema;
pub use schema_build_error::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub(crate) use schema_builder::is_valid_name;
pub use schema_config::SchemaConfig;
pub use type_validation_error::TypeValidationError;
use union_type_validator::UnionTypeValidator;
