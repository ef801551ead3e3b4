use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NodeKind;
use inherent::inherent;

/// One value of an [`EnumDefinition`](crate::ast::EnumDefinition).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for EnumValueDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::EnumValueDefinition
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
