use graphql_exec_parser::SourceLocation;

/// A single violation reported by a validation rule.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Name of the rule that reported the violation, e.g.
    /// `NoUndefinedVariables`.
    pub rule: &'static str,
    pub message: String,
    pub locations: Vec<SourceLocation>,
}
