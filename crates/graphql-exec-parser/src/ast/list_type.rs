use crate::ast::AstNode;
use crate::ast::Loc;
use crate::ast::NodeKind;
use crate::ast::Type;
use inherent::inherent;

/// A `[Type]` list type reference.
#[derive(Clone, Debug, PartialEq)]
pub struct ListType {
    pub item_type: Box<Type>,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for ListType {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ListType
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
