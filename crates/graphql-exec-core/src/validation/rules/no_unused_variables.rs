use crate::validation::ValidationContext;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;
use std::borrow::Cow;
use std::collections::HashSet;

/// Every variable an operation defines is used, directly or within the
/// fragments it spreads.
struct NoUnusedVariables<'c, 'a> {
    context: &'c ValidationContext<'a>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(NoUnusedVariables { context })
}

impl<'a> Visitor<'a> for NoUnusedVariables<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        let Node::OperationDefinition(Cow::Borrowed(operation)) = node else {
            return VisitAction::NoChange;
        };
        let used: HashSet<&str> = self.context
            .recursive_variable_usages(*operation)
            .into_iter()
            .map(|usage| usage.variable.name.as_str())
            .collect();
        for definition in &operation.variable_definitions {
            let var_name = definition.variable.name.as_str();
            if !used.contains(var_name) {
                self.context.report_error(
                    format!("Variable \"${var_name}\" is never used."),
                    [definition.loc.as_ref()],
                );
            }
        }
        VisitAction::Skip
    }
}
