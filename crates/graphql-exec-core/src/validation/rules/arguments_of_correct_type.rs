use crate::validation::ValidationContext;
use graphql_exec_parser::print_value;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;

/// Every literal argument value can be coerced to the argument's declared
/// type.
struct ArgumentsOfCorrectType<'c, 'a> {
    context: &'c ValidationContext<'a>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(ArgumentsOfCorrectType { context })
}

impl<'a> Visitor<'a> for ArgumentsOfCorrectType<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        let Node::Argument(argument) = node else {
            return VisitAction::NoChange;
        };
        if let Some(arg_def) = self.context.argument()
            && self.context.schema()
                .is_valid_literal(arg_def.type_annotation(), &argument.value)
                .is_err() {
            self.context.report_error(
                format!(
                    "Argument \"{}\" expected type \"{}\" but got: {}.",
                    argument.name.value,
                    arg_def.type_annotation(),
                    print_value(&argument.value),
                ),
                [argument.value.loc()],
            );
        }
        VisitAction::NoChange
    }
}
