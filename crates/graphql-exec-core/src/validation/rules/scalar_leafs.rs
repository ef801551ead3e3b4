use crate::validation::ValidationContext;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;

/// Fields of scalar or enum type have no sub-selection; fields of
/// composite type must have one.
struct ScalarLeafs<'c, 'a> {
    context: &'c ValidationContext<'a>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(ScalarLeafs { context })
}

impl<'a> Visitor<'a> for ScalarLeafs<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        let Node::Field(field) = node else {
            return VisitAction::NoChange;
        };
        let Some(field_type) = self.context.type_() else {
            return VisitAction::NoChange;
        };
        let Some(named_type) = self.context.schema().get_type(field_type.innermost_name()) else {
            return VisitAction::NoChange;
        };
        match (&field.selection_set, named_type.is_leaf()) {
            (Some(selection_set), true) => self.context.report_error(
                format!(
                    "Field \"{}\" of type \"{field_type}\" must not have a sub selection.",
                    field.name.value,
                ),
                [selection_set.loc.as_ref()],
            ),
            (None, false) => self.context.report_error(
                format!(
                    "Field \"{}\" of type \"{field_type}\" must have a sub selection.",
                    field.name.value,
                ),
                [field.loc.as_ref()],
            ),
            _ => (),
        }
        VisitAction::NoChange
    }
}
