use crate::error::CancelledError;
use crate::error::CoercionError;
use crate::error::ExecutionError;
use crate::error::FieldError;
use crate::error::PathSegment;
use crate::error::ValidationError;
use crate::schema::SchemaBuildError;
use graphql_exec_parser::SourceLocation;
use graphql_exec_parser::SyntaxError;

/// Any error the engine can report for a request.
#[derive(Debug, thiserror::Error)]
pub enum GraphQLError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Coercion(#[from] CoercionError),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error(transparent)]
    SchemaBuild(#[from] SchemaBuildError),

    #[error(transparent)]
    Cancelled(#[from] CancelledError),
}

impl GraphQLError {
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn locations(&self) -> Vec<SourceLocation> {
        match self {
            Self::Syntax(err) => vec![err.location()],
            Self::Validation(err) => err.locations.clone(),
            Self::Coercion(err) => err.locations.clone(),
            Self::Field(err) => err.locations.clone(),
            Self::Execution(_) | Self::SchemaBuild(_) | Self::Cancelled(_) => vec![],
        }
    }

    pub fn path(&self) -> Option<&[PathSegment]> {
        match self {
            Self::Field(err) => Some(&err.path),
            _ => None,
        }
    }
}
