use crate::ast::AstNode;
use crate::ast::Loc;
use crate::ast::NodeKind;
use crate::ast::Value;
use inherent::inherent;

/// A `[ ... ]` list literal.
#[derive(Clone, Debug, PartialEq)]
pub struct ListValue {
    pub values: Vec<Value>,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for ListValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ListValue
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
