use crate::ast::AstNode;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NodeKind;
use inherent::inherent;

/// A `$name` reference, either in a variable definition or as a value.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub name: Name,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for Variable {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Variable
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
