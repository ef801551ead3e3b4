use crate::types::DirectiveLocation;
use crate::validation::ValidationContext;
use graphql_exec_parser::ast::OperationType;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::NodeOrList;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;

/// Directives are defined by the schema and used only in the locations
/// their definitions allow.
struct KnownDirectives<'c, 'a> {
    context: &'c ValidationContext<'a>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(KnownDirectives { context })
}

impl<'a> Visitor<'a> for KnownDirectives<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        let Node::Directive(directive) = node else {
            return VisitAction::NoChange;
        };
        let name = directive.name.as_str();
        let Some(directive_def) = self.context.schema().directive(name) else {
            self.context.report_error(
                format!("Unknown directive \"{name}\"."),
                [directive.loc.as_ref()],
            );
            return VisitAction::NoChange;
        };
        if let Some(location) = applied_location(cx)
            && !directive_def.locations().contains(&location) {
            self.context.report_error(
                format!("Directive \"{name}\" may not be used on {}.", location.name()),
                [directive.loc.as_ref()],
            );
        }
        VisitAction::NoChange
    }
}

/// The location of the node the current directive is attached to.
fn applied_location(cx: &VisitContext<'_, '_>) -> Option<DirectiveLocation> {
    let mut owners = cx.ancestors.iter().rev().filter_map(NodeOrList::as_node);
    let location = match owners.next()? {
        Node::OperationDefinition(operation) => match operation.operation {
            OperationType::Query => DirectiveLocation::Query,
            OperationType::Mutation => DirectiveLocation::Mutation,
            OperationType::Subscription => DirectiveLocation::Subscription,
        },
        Node::Field(_) => DirectiveLocation::Field,
        Node::FragmentSpread(_) => DirectiveLocation::FragmentSpread,
        Node::InlineFragment(_) => DirectiveLocation::InlineFragment,
        Node::FragmentDefinition(_) => DirectiveLocation::FragmentDefinition,
        Node::VariableDefinition(_) => DirectiveLocation::VariableDefinition,
        Node::SchemaDefinition(_) => DirectiveLocation::Schema,
        Node::ScalarDefinition(_) => DirectiveLocation::Scalar,
        Node::ObjectDefinition(_) | Node::TypeExtensionDefinition(_) => DirectiveLocation::Object,
        Node::FieldDefinition(_) => DirectiveLocation::FieldDefinition,
        Node::InterfaceDefinition(_) => DirectiveLocation::Interface,
        Node::UnionDefinition(_) => DirectiveLocation::Union,
        Node::EnumDefinition(_) => DirectiveLocation::Enum,
        Node::EnumValueDefinition(_) => DirectiveLocation::EnumValue,
        Node::InputObjectDefinition(_) => DirectiveLocation::InputObject,
        Node::InputValueDefinition(_) => match owners.next() {
            Some(Node::InputObjectDefinition(_)) => DirectiveLocation::InputFieldDefinition,
            _ => DirectiveLocation::ArgumentDefinition,
        },
        _ => return None,
    };
    Some(location)
}
