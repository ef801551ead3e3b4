use crate::types::TypeAnnotation;
use crate::validation::ValidationContext;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;
use std::borrow::Cow;

/// Each variable is used only where its type (made non-null by a default
/// value) is accepted.
struct VariablesInAllowedPosition<'c, 'a> {
    context: &'c ValidationContext<'a>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(VariablesInAllowedPosition { context })
}

/// A variable type is allowed where it is the same as, or stricter than,
/// the expected type. Stricter means non-null where the expected type is
/// nullable, at any list depth.
fn var_type_allowed(var_type: &TypeAnnotation, expected_type: &TypeAnnotation) -> bool {
    if !expected_type.nullable() && var_type.nullable() {
        return false;
    }
    match (var_type, expected_type) {
        (TypeAnnotation::List { inner: var_item, .. }, TypeAnnotation::List { inner: item, .. }) =>
            var_type_allowed(var_item, item),
        (TypeAnnotation::Named { name: var_name, .. }, TypeAnnotation::Named { name, .. }) =>
            var_name == name,
        _ => false,
    }
}

impl<'a> Visitor<'a> for VariablesInAllowedPosition<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        let Node::OperationDefinition(Cow::Borrowed(operation)) = node else {
            return VisitAction::NoChange;
        };
        let schema = self.context.schema();
        for usage in self.context.recursive_variable_usages(*operation) {
            let Some(expected_type) = &usage.type_ else {
                continue;
            };
            let var_name = usage.variable.name.as_str();
            let Some(definition) = operation.variable_definitions
                .iter()
                .find(|definition| definition.variable.name.value == var_name) else {
                continue;
            };
            let var_type = TypeAnnotation::from_ast(&definition.var_type);
            if schema.get_type(var_type.innermost_name()).is_none() {
                continue;
            }
            let effective_type = if definition.default_value.is_some() {
                var_type.clone().non_null()
            } else {
                var_type.clone()
            };
            if !var_type_allowed(&effective_type, expected_type) {
                self.context.report_error(
                    format!(
                        "Variable \"${var_name}\" of type \"{var_type}\" used in position \
                         expecting type \"{expected_type}\".",
                    ),
                    [usage.variable.loc.as_ref()],
                );
            }
        }
        VisitAction::Skip
    }
}
