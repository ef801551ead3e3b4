use crate::validation::ValidationContext;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;

/// A document with an anonymous operation contains no other operation.
struct LoneAnonymousOperation<'c, 'a> {
    context: &'c ValidationContext<'a>,
    operation_count: usize,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(LoneAnonymousOperation { context, operation_count: 0 })
}

impl<'a> Visitor<'a> for LoneAnonymousOperation<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        match node {
            Node::Document(document) => {
                self.operation_count = document.operations().count();
                VisitAction::NoChange
            },
            Node::OperationDefinition(operation) => {
                if operation.name.is_none() && self.operation_count > 1 {
                    self.context.report_error(
                        "This anonymous operation must be the only defined operation.",
                        [operation.loc.as_ref()],
                    );
                }
                VisitAction::Skip
            },
            _ => VisitAction::NoChange,
        }
    }
}
