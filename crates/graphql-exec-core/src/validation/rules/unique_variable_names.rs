use crate::validation::ValidationContext;
use graphql_exec_parser::ast;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;
use std::collections::HashMap;

/// No operation defines the same variable twice.
struct UniqueVariableNames<'c, 'a> {
    context: &'c ValidationContext<'a>,
    known_names: HashMap<String, Option<ast::Loc>>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(UniqueVariableNames {
        context,
        known_names: HashMap::new(),
    })
}

impl<'a> Visitor<'a> for UniqueVariableNames<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        match node {
            Node::OperationDefinition(_) => {
                self.known_names.clear();
                VisitAction::NoChange
            },
            Node::VariableDefinition(definition) => {
                let variable = &definition.variable;
                let var_name = variable.name.as_str();
                match self.known_names.get(var_name) {
                    Some(first_loc) => self.context.report_error(
                        format!("There can be only one variable named \"{var_name}\"."),
                        [first_loc.as_ref(), variable.name.loc.as_ref()],
                    ),
                    None => {
                        self.known_names.insert(var_name.to_string(), variable.name.loc.clone());
                    },
                }
                VisitAction::Skip
            },
            Node::SelectionSet(_) => VisitAction::Skip,
            _ => VisitAction::NoChange,
        }
    }
}
