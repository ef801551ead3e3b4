use crate::ast::AstNode;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::ast::Value;
use inherent::inherent;

/// A `name: value` argument passed to a field or directive.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for Argument {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Argument
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
