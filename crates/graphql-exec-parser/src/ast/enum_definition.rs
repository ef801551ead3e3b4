use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::EnumValueDefinition;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NodeKind;
use inherent::inherent;

/// An `enum Name { A B }` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub values: Vec<EnumValueDefinition>,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for EnumDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::EnumDefinition
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
