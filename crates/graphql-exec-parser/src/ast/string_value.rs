use crate::ast::AstNode;
use crate::ast::Loc;
use crate::ast::NodeKind;
use inherent::inherent;

/// A string literal. `value` holds the decoded text.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue {
    pub value: String,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for StringValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::StringValue
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
