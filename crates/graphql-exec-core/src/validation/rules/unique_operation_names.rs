use crate::validation::ValidationContext;
use graphql_exec_parser::ast;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;
use std::collections::HashMap;

struct UniqueOperationNames<'c, 'a> {
    context: &'c ValidationContext<'a>,
    known_names: HashMap<String, Option<ast::Loc>>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(UniqueOperationNames {
        context,
        known_names: HashMap::new(),
    })
}

impl<'a> Visitor<'a> for UniqueOperationNames<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        match node {
            Node::OperationDefinition(operation) => {
                if let Some(name) = &operation.name {
                    let op_name = name.as_str();
                    match self.known_names.get(op_name) {
                        Some(first_loc) => self.context.report_error(
                            format!("There can only be one operation named \"{op_name}\"."),
                            [first_loc.as_ref(), name.loc.as_ref()],
                        ),
                        None => {
                            self.known_names.insert(op_name.to_string(), name.loc.clone());
                        },
                    }
                }
                VisitAction::Skip
            },
            Node::FragmentDefinition(_) => VisitAction::Skip,
            _ => VisitAction::NoChange,
        }
    }
}
