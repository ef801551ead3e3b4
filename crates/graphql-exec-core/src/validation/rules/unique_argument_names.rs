use crate::validation::ValidationContext;
use graphql_exec_parser::ast;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;
use std::collections::HashMap;

/// No field or directive is given two arguments with the same name.
struct UniqueArgumentNames<'c, 'a> {
    context: &'c ValidationContext<'a>,
    known_names: HashMap<String, Option<ast::Loc>>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(UniqueArgumentNames {
        context,
        known_names: HashMap::new(),
    })
}

impl<'a> Visitor<'a> for UniqueArgumentNames<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        match node {
            Node::Field(_) | Node::Directive(_) => self.known_names.clear(),
            Node::Argument(argument) => {
                let arg_name = argument.name.as_str();
                match self.known_names.get(arg_name) {
                    Some(first_loc) => self.context.report_error(
                        format!("There can be only one argument named \"{arg_name}\"."),
                        [first_loc.as_ref(), argument.name.loc.as_ref()],
                    ),
                    None => {
                        self.known_names.insert(arg_name.to_string(), argument.name.loc.clone());
                    },
                }
            },
            _ => (),
        }
        VisitAction::NoChange
    }
}
