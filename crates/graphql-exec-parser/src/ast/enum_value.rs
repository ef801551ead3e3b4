use crate::ast::AstNode;
use crate::ast::Loc;
use crate::ast::NodeKind;
use inherent::inherent;

/// An enum literal: any name other than `true`, `false` or `null` in value
/// position.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub value: String,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for EnumValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::EnumValue
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
