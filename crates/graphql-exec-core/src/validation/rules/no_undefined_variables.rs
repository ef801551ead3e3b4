use crate::validation::ValidationContext;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;
use std::borrow::Cow;
use std::collections::HashSet;

/// Every variable used by an operation, directly or within the fragments
/// it spreads, is defined by that operation.
struct NoUndefinedVariables<'c, 'a> {
    context: &'c ValidationContext<'a>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(NoUndefinedVariables { context })
}

impl<'a> Visitor<'a> for NoUndefinedVariables<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        let Node::OperationDefinition(Cow::Borrowed(operation)) = node else {
            return VisitAction::NoChange;
        };
        let defined: HashSet<&str> = operation.variable_definitions
            .iter()
            .map(|definition| definition.variable.name.as_str())
            .collect();

        let direct_usages = self.context.variable_usages(Node::from(*operation));
        let fragment_usages = self.context
            .recursively_referenced_fragments(*operation)
            .into_iter()
            .flat_map(|fragment| self.context.variable_usages(Node::from(fragment)));
        let usages = direct_usages
            .into_iter()
            .map(|usage| (usage, false))
            .chain(fragment_usages.map(|usage| (usage, true)));

        for (usage, within_fragment) in usages {
            let var_name = usage.variable.name.as_str();
            if defined.contains(var_name) {
                continue;
            }
            match &operation.name {
                Some(op_name) if within_fragment => self.context.report_error(
                    format!(
                        "Variable \"${var_name}\" is not defined by operation \"{}\".",
                        op_name.value,
                    ),
                    [usage.variable.loc.as_ref(), operation.loc.as_ref()],
                ),
                _ => self.context.report_error(
                    format!("Variable \"${var_name}\" is not defined."),
                    [usage.variable.loc.as_ref()],
                ),
            }
        }
        VisitAction::Skip
    }
}
