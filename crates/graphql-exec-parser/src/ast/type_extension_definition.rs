use crate::ast::AstNode;
use crate::ast::Loc;
use crate::ast::NodeKind;
use crate::ast::ObjectDefinition;
use inherent::inherent;

/// An `extend type Name { ... }` definition, which adds interfaces and
/// fields to an existing object type.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeExtensionDefinition {
    pub definition: ObjectDefinition,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for TypeExtensionDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::TypeExtensionDefinition
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
