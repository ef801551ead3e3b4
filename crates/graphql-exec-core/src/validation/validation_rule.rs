use crate::validation::ValidationContext;
use graphql_exec_parser::visitor::Visitor;

/// Builds the visitor that checks one rule over a document.
pub type RuleFactory =
    for<'c, 'a> fn(&'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c>;

/// A named validation rule.
///
/// Custom rules can be passed to [`validate()`](crate::validation::validate)
/// alongside (or instead of) [`specified_rules()`](crate::validation::specified_rules).
#[derive(Clone, Copy)]
pub struct ValidationRule {
    pub name: &'static str,
    pub factory: RuleFactory,
}

impl ValidationRule {
    pub const fn new(name: &'static str, factory: RuleFactory) -> Self {
        Self { name, factory }
    }
}

impl std::fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ValidationRule").field(&self.name).finish()
    }
}
