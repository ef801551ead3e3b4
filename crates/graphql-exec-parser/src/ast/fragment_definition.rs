use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NodeKind;
use crate::ast::SelectionSet;
use inherent::inherent;

/// A `fragment Name on Type { ... }` definition.
///
/// See
/// [Fragments](https://spec.graphql.org/October2021/#sec-Language.Fragments)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub name: Name,
    pub type_condition: NamedType,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for FragmentDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::FragmentDefinition
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
