use crate::ast::AstNode;
use crate::ast::Loc;
use crate::ast::NodeKind;
use inherent::inherent;

/// A float literal. `value` is the raw lexeme (e.g. `"1.5e3"`).
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue {
    pub value: String,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for FloatValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::FloatValue
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
