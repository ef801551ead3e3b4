//! Static checks of an executable document against a schema.
//!
//! All rules run in one traversal: each rule is a [`Visitor`] built by a
//! [`ValidationRule`] factory, and a shared [`ValidationContext`] supplies
//! the schema types at the current position along with fragment and
//! variable reachability.
//!
//! [`Visitor`]: graphql_exec_parser::visitor::Visitor

mod rules;
mod validate;
mod validation_context;
mod validation_rule;
mod variable_usage;

pub use rules::specified_rules;
pub use validate::validate;
pub use validation_context::ValidationContext;
pub use validation_rule::RuleFactory;
pub use validation_rule::ValidationRule;
pub use variable_usage::VariableUsage;

/// Quotes up to five items and joins them into an English list:
/// `"A"`, `"A" or "B"`, `"A", "B", or "C"`.
pub(crate) fn quoted_or_list(items: &[&str]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .take(5)
        .map(|item| format!("\"{item}\""))
        .collect();
    match quoted.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}
