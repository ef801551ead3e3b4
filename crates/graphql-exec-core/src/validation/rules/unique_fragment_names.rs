use crate::validation::ValidationContext;
use graphql_exec_parser::ast;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;
use std::collections::HashMap;

struct UniqueFragmentNames<'c, 'a> {
    context: &'c ValidationContext<'a>,
    known_names: HashMap<String, Option<ast::Loc>>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(UniqueFragmentNames {
        context,
        known_names: HashMap::new(),
    })
}

impl<'a> Visitor<'a> for UniqueFragmentNames<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        match node {
            Node::OperationDefinition(_) => VisitAction::Skip,
            Node::FragmentDefinition(fragment) => {
                let fragment_name = fragment.name.as_str();
                match self.known_names.get(fragment_name) {
                    Some(first_loc) => self.context.report_error(
                        format!("There can only be one fragment named \"{fragment_name}\"."),
                        [first_loc.as_ref(), fragment.name.loc.as_ref()],
                    ),
                    None => {
                        self.known_names
                            .insert(fragment_name.to_string(), fragment.name.loc.clone());
                    },
                }
                VisitAction::Skip
            },
            _ => VisitAction::NoChange,
        }
    }
}
