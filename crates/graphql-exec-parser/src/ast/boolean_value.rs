use crate::ast::AstNode;
use crate::ast::Loc;
use crate::ast::NodeKind;
use inherent::inherent;

/// `true` or `false`.
#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub value: bool,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for BooleanValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::BooleanValue
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
