use crate::validation::ValidationContext;
use graphql_exec_parser::print_value;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;

/// Variable default values are constants of the variable's type, and only
/// nullable variables have them.
struct DefaultValuesOfCorrectType<'c, 'a> {
    context: &'c ValidationContext<'a>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(DefaultValuesOfCorrectType { context })
}

impl<'a> Visitor<'a> for DefaultValuesOfCorrectType<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        match node {
            Node::VariableDefinition(definition) => {
                let (Some(default_value), Some(input_type)) =
                    (&definition.default_value, self.context.input_type()) else {
                    return VisitAction::Skip;
                };
                let name = &definition.variable.name.value;
                if !input_type.nullable() {
                    self.context.report_error(
                        format!(
                            "Variable \"${name}\" of type \"{input_type}\" is required and will \
                             not use the default value. Perhaps you meant to use type \"{}\".",
                            input_type.as_nullable(),
                        ),
                        [default_value.loc()],
                    );
                } else if default_value.contains_variable()
                    || self.context.schema().is_valid_literal(&input_type, default_value).is_err() {
                    self.context.report_error(
                        format!(
                            "Variable \"${name}\" of type \"{input_type}\" has invalid default \
                             value: {}.",
                            print_value(default_value),
                        ),
                        [default_value.loc()],
                    );
                }
                VisitAction::Skip
            },
            Node::SelectionSet(_) => VisitAction::Skip,
            _ => VisitAction::NoChange,
        }
    }
}
