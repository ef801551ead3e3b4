use crate::validation::ValidationContext;
use graphql_exec_parser::ast;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;
use std::collections::HashMap;

/// No input object literal names the same field twice. Nested object
/// literals are checked independently of the ones enclosing them.
struct UniqueInputFieldNames<'c, 'a> {
    context: &'c ValidationContext<'a>,
    known_names: HashMap<String, Option<ast::Loc>>,
    enclosing_names: Vec<HashMap<String, Option<ast::Loc>>>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(UniqueInputFieldNames {
        context,
        known_names: HashMap::new(),
        enclosing_names: vec![],
    })
}

impl<'a> Visitor<'a> for UniqueInputFieldNames<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        match node {
            Node::ObjectValue(_) => {
                let enclosing = std::mem::take(&mut self.known_names);
                self.enclosing_names.push(enclosing);
            },
            Node::ObjectField(object_field) => {
                let field_name = object_field.name.as_str();
                match self.known_names.get(field_name) {
                    Some(first_loc) => self.context.report_error(
                        format!("There can be only one input field named \"{field_name}\"."),
                        [first_loc.as_ref(), object_field.name.loc.as_ref()],
                    ),
                    None => {
                        self.known_names
                            .insert(field_name.to_string(), object_field.name.loc.clone());
                    },
                }
            },
            _ => (),
        }
        VisitAction::NoChange
    }

    fn leave(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        if let Node::ObjectValue(_) = node {
            self.known_names = self.enclosing_names.pop().unwrap_or_default();
        }
        VisitAction::NoChange
    }
}
