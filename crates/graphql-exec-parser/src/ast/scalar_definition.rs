use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NodeKind;
use inherent::inherent;

/// A `scalar Name` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for ScalarDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ScalarDefinition
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
