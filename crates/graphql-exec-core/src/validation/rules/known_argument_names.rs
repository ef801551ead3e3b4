use crate::validation::ValidationContext;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::NodeOrList;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;

/// Arguments supplied to fields and directives are declared by them.
struct KnownArgumentNames<'c, 'a> {
    context: &'c ValidationContext<'a>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(KnownArgumentNames { context })
}

impl<'a> Visitor<'a> for KnownArgumentNames<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        let Node::Argument(argument) = node else {
            return VisitAction::NoChange;
        };
        let arg_name = argument.name.as_str();
        match cx.ancestors.last().and_then(NodeOrList::as_node) {
            Some(Node::Field(_)) => {
                if let Some(field_def) = self.context.field_def()
                    && field_def.argument(arg_name).is_none() {
                    let parent_type_name = self.context
                        .parent_type()
                        .map_or("", |parent_type| parent_type.name());
                    self.context.report_error(
                        format!(
                            "Unknown argument \"{arg_name}\" on field \"{}\" of type \
                             \"{parent_type_name}\".",
                            field_def.name(),
                        ),
                        [argument.loc.as_ref()],
                    );
                }
            },
            Some(Node::Directive(_)) => {
                if let Some(directive) = self.context.directive()
                    && directive.argument(arg_name).is_none() {
                    self.context.report_error(
                        format!(
                            "Unknown argument \"{arg_name}\" on directive \"@{}\".",
                            directive.name(),
                        ),
                        [argument.loc.as_ref()],
                    );
                }
            },
            _ => (),
        }
        VisitAction::NoChange
    }
}
