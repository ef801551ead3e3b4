use crate::validation::ValidationContext;
use graphql_exec_parser::ast;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;
use std::borrow::Cow;
use std::collections::HashSet;

/// Every fragment definition is reachable from some operation.
struct NoUnusedFragments<'c, 'a> {
    context: &'c ValidationContext<'a>,
    operations: Vec<&'a ast::OperationDefinition>,
    fragments: Vec<&'a ast::FragmentDefinition>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(NoUnusedFragments {
        context,
        operations: vec![],
        fragments: vec![],
    })
}

impl<'a> Visitor<'a> for NoUnusedFragments<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        match node {
            Node::OperationDefinition(operation) => {
                if let Cow::Borrowed(operation) = operation {
                    self.operations.push(*operation);
                }
                VisitAction::Skip
            },
            Node::FragmentDefinition(fragment) => {
                if let Cow::Borrowed(fragment) = fragment {
                    self.fragments.push(*fragment);
                }
                VisitAction::Skip
            },
            _ => VisitAction::NoChange,
        }
    }

    fn leave(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        if let Node::Document(_) = node {
            let used: HashSet<&str> = self.operations
                .iter()
                .flat_map(|operation| self.context.recursively_referenced_fragments(operation))
                .map(|fragment| fragment.name.as_str())
                .collect();
            for fragment in &self.fragments {
                let fragment_name = fragment.name.as_str();
                if !used.contains(fragment_name) {
                    self.context.report_error(
                        format!("Fragment \"{fragment_name}\" is never used."),
                        [fragment.loc.as_ref()],
                    );
                }
            }
        }
        VisitAction::NoChange
    }
}
