use crate::types::GraphQLType;
use crate::validation::ValidationContext;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;

/// A fragment is only spread where its type condition could hold: the
/// possible types of the parent and of the condition intersect.
struct PossibleFragmentSpreads<'c, 'a> {
    context: &'c ValidationContext<'a>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(PossibleFragmentSpreads { context })
}

impl<'a> PossibleFragmentSpreads<'_, 'a> {
    fn composite_type(&self, name: &str) -> Option<&'a GraphQLType> {
        self.context.schema().get_type(name).filter(|type_| type_.is_composite())
    }

    /// The parent and fragment type names, when both are composite and
    /// share no possible type.
    fn disjoint_types(&self, fragment_type_name: &str) -> Option<(&'a str, &'a str)> {
        let fragment_type = self.composite_type(fragment_type_name)?;
        let parent_type = self.context.parent_type().filter(|type_| type_.is_composite())?;
        if self.context.schema().types_overlap(fragment_type.name(), parent_type.name()) {
            return None;
        }
        Some((parent_type.name(), fragment_type.name()))
    }
}

impl<'a> Visitor<'a> for PossibleFragmentSpreads<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        match node {
            Node::InlineFragment(inline) => {
                let disjoint = self.context
                    .type_()
                    .and_then(|annot| self.disjoint_types(annot.innermost_name()));
                if let Some((parent_name, fragment_type_name)) = disjoint {
                    self.context.report_error(
                        format!(
                            "Fragment cannot be spread here as objects of type \
                             \"{parent_name}\" can never be of type \"{fragment_type_name}\".",
                        ),
                        [inline.loc.as_ref()],
                    );
                }
            },
            Node::FragmentSpread(spread) => {
                let fragment_name = spread.name.as_str();
                let disjoint = self.context
                    .fragment(fragment_name)
                    .and_then(|fragment| {
                        self.disjoint_types(fragment.type_condition.name.as_str())
                    });
                if let Some((parent_name, fragment_type_name)) = disjoint {
                    self.context.report_error(
                        format!(
                            "Fragment \"{fragment_name}\" cannot be spread here as objects of \
                             type \"{parent_name}\" can never be of type \
                             \"{fragment_type_name}\".",
                        ),
                        [spread.loc.as_ref()],
                    );
                }
            },
            _ => (),
        }
        VisitAction::NoChange
    }
}
