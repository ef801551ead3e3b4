//! The error taxonomy shared by every stage of a request.
//!
//! Each stage has its own error type; [`GraphQLError`] unifies them, and
//! [`FormattedError`] is the form that goes over the wire.

mod cancelled_error;
mod coercion_error;
mod execution_error;
mod field_error;
mod formatted_error;
mod graphql_error;
mod path_segment;
mod validation_error;

pub use cancelled_error::CancelledError;
pub use coercion_error::CoercionError;
pub use execution_error::ExecutionError;
pub use field_error::FieldError;
pub use formatted_error::FormattedError;
pub use graphql_error::GraphQLError;
pub use path_segment::PathSegment;
pub use validation_error::ValidationError;

use graphql_exec_parser::ast;
use graphql_exec_parser::SourceLocation;

/// The error type resolvers (and other user callbacks) return.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Line/column positions for the given AST locations, skipping nodes
/// parsed without location or source information.
pub(crate) fn locations_of<'a>(
    locs: impl IntoIterator<Item = Option<&'a ast::Loc>>,
) -> Vec<SourceLocation> {
    locs.into_iter()
        .flatten()
        .filter_map(ast::Loc::start_location)
        .collect()
}
