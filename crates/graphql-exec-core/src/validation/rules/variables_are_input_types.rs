use crate::types::TypeAnnotation;
use crate::validation::ValidationContext;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;

/// Variables are declared with scalar, enum or input object types.
struct VariablesAreInputTypes<'c, 'a> {
    context: &'c ValidationContext<'a>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(VariablesAreInputTypes { context })
}

impl<'a> Visitor<'a> for VariablesAreInputTypes<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        match node {
            Node::VariableDefinition(definition) => {
                let var_type = TypeAnnotation::from_ast(&definition.var_type);
                // Unknown types are reported by KnownTypeNames.
                let is_non_input = self.context
                    .schema()
                    .get_type(var_type.innermost_name())
                    .is_some_and(|type_| !type_.is_input_type());
                if is_non_input {
                    self.context.report_error(
                        format!(
                            "Variable \"${}\" cannot be non-input type \"{var_type}\".",
                            definition.variable.name.value,
                        ),
                        [definition.var_type.loc()],
                    );
                }
                VisitAction::Skip
            },
            Node::SelectionSet(_) => VisitAction::Skip,
            _ => VisitAction::NoChange,
        }
    }
}
