use crate::ast::AstNode;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NodeKind;
use inherent::inherent;

/// A reference to a type by name.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedType {
    pub name: Name,
    pub loc: Option<Loc>,
}

impl NamedType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            loc: None,
        }
    }
}

#[inherent]
impl AstNode for NamedType {
    pub fn kind(&self) -> NodeKind {
        NodeKind::NamedType
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
