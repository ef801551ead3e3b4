use crate::validation::ValidationContext;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;

/// Fragment spreads refer to fragments defined in the same document.
struct KnownFragmentNames<'c, 'a> {
    context: &'c ValidationContext<'a>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(KnownFragmentNames { context })
}

impl<'a> Visitor<'a> for KnownFragmentNames<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        if let Node::FragmentSpread(spread) = node
            && self.context.fragment(spread.name.as_str()).is_none() {
            self.context.report_error(
                format!("Unknown fragment \"{}\".", spread.name.value),
                [spread.name.loc.as_ref()],
            );
        }
        VisitAction::NoChange
    }
}
