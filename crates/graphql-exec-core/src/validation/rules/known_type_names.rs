use crate::validation::ValidationContext;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;

/// Types named by variable definitions and fragment type conditions exist
/// in the schema.
struct KnownTypeNames<'c, 'a> {
    context: &'c ValidationContext<'a>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(KnownTypeNames { context })
}

impl<'a> Visitor<'a> for KnownTypeNames<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        match node {
            Node::NamedType(named_type) => {
                let type_name = named_type.name.as_str();
                if self.context.schema().get_type(type_name).is_none() {
                    self.context.report_error(
                        format!("Unknown type \"{type_name}\"."),
                        [named_type.loc.as_ref()],
                    );
                }
                VisitAction::NoChange
            },
            // Type system definitions may name types the document itself
            // defines.
            Node::SchemaDefinition(_)
            | Node::ScalarDefinition(_)
            | Node::ObjectDefinition(_)
            | Node::InterfaceDefinition(_)
            | Node::UnionDefinition(_)
            | Node::EnumDefinition(_)
            | Node::InputObjectDefinition(_)
            | Node::TypeExtensionDefinition(_)
            | Node::DirectiveDefinition(_) => VisitAction::Skip,
            _ => VisitAction::NoChange,
        }
    }
}
