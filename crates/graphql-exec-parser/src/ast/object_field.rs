use crate::ast::AstNode;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::ast::Value;
use inherent::inherent;

/// One `name: value` entry of an [`ObjectValue`](crate::ast::ObjectValue).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for ObjectField {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ObjectField
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
