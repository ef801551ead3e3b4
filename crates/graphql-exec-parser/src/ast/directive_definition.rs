use crate::ast::AstNode;
use crate::ast::InputValueDefinition;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NodeKind;
use inherent::inherent;

/// A `directive @name(args) repeatable on LOCATION | LOCATION` definition.
///
/// Locations are kept as [`Name`](crate::ast::Name)s; the type system maps
/// them onto its directive-location enum.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub repeatable: bool,
    pub locations: Vec<Name>,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for DirectiveDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::DirectiveDefinition
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
