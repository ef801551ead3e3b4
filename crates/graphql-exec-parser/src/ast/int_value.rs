use crate::ast::AstNode;
use crate::ast::Loc;
use crate::ast::NodeKind;
use inherent::inherent;

/// An integer literal. `value` is the raw lexeme (e.g. `"-42"`).
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue {
    pub value: String,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for IntValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::IntValue
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
