use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::FieldDefinition;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NodeKind;
use inherent::inherent;

/// An `interface Name { ... }` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for InterfaceDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InterfaceDefinition
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
