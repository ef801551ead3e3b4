use crate::types::InputValue;
use crate::validation::ValidationContext;
use graphql_exec_parser::ast;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;
use indexmap::IndexMap;

/// Every non-null argument without a default value is supplied, on fields
/// and on directives.
struct ProvidedNonNullArguments<'c, 'a> {
    context: &'c ValidationContext<'a>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(ProvidedNonNullArguments { context })
}

fn missing_arguments<'d>(
    arg_defs: &'d IndexMap<String, InputValue>,
    provided: &[ast::Argument],
) -> impl Iterator<Item = &'d InputValue> {
    arg_defs.values().filter(|arg_def| {
        !arg_def.type_annotation().nullable()
            && arg_def.default_value().is_none()
            && !provided.iter().any(|arg| arg.name.value == arg_def.name())
    })
}

impl<'a> Visitor<'a> for ProvidedNonNullArguments<'_, 'a> {
    fn leave(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        match node {
            Node::Field(field) => {
                let Some(field_def) = self.context.field_def() else {
                    return VisitAction::NoChange;
                };
                for arg_def in missing_arguments(field_def.arguments(), &field.arguments) {
                    self.context.report_error(
                        format!(
                            "Field \"{}\" argument \"{}\" of type \"{}\" is required but not \
                             provided.",
                            field.name.value,
                            arg_def.name(),
                            arg_def.type_annotation(),
                        ),
                        [field.loc.as_ref()],
                    );
                }
            },
            Node::Directive(directive) => {
                let Some(directive_def) = self.context.directive() else {
                    return VisitAction::NoChange;
                };
                for arg_def in missing_arguments(directive_def.arguments(), &directive.arguments) {
                    self.context.report_error(
                        format!(
                            "Directive \"@{}\" argument \"{}\" of type \"{}\" is required but \
                             not provided.",
                            directive.name.value,
                            arg_def.name(),
                            arg_def.type_annotation(),
                        ),
                        [directive.loc.as_ref()],
                    );
                }
            },
            _ => (),
        }
        VisitAction::NoChange
    }
}
