use crate::ast::AstNode;
use crate::ast::Loc;
use crate::ast::NodeKind;
use crate::ast::ObjectField;
use inherent::inherent;

/// A `{ name: value, ... }` input object literal.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    pub fields: Vec<ObjectField>,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for ObjectValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ObjectValue
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
