use crate::validation::ValidationContext;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;

/// Fragment type conditions name object, interface or union types.
struct FragmentsOnCompositeTypes<'c, 'a> {
    context: &'c ValidationContext<'a>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(FragmentsOnCompositeTypes { context })
}

impl FragmentsOnCompositeTypes<'_, '_> {
    fn is_non_composite(&self, type_name: &str) -> bool {
        self.context
            .schema()
            .get_type(type_name)
            .is_some_and(|type_| !type_.is_composite())
    }
}

impl<'a> Visitor<'a> for FragmentsOnCompositeTypes<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        match node {
            Node::InlineFragment(fragment) => {
                if let Some(type_condition) = &fragment.type_condition
                    && self.is_non_composite(type_condition.name.as_str()) {
                    self.context.report_error(
                        format!(
                            "Fragment cannot condition on non composite type \"{}\".",
                            type_condition.name.value,
                        ),
                        [type_condition.loc.as_ref()],
                    );
                }
            },
            Node::FragmentDefinition(fragment) => {
                let type_condition = &fragment.type_condition;
                if self.is_non_composite(type_condition.name.as_str()) {
                    self.context.report_error(
                        format!(
                            "Fragment \"{}\" cannot condition on non composite type \"{}\".",
                            fragment.name.value,
                            type_condition.name.value,
                        ),
                        [type_condition.loc.as_ref()],
                    );
                }
            },
            _ => (),
        }
        VisitAction::NoChange
    }
}
