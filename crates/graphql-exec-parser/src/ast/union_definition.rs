use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NodeKind;
use inherent::inherent;

/// A `union Name = A | B` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub types: Vec<NamedType>,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for UnionDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::UnionDefinition
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
