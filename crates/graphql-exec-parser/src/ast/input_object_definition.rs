use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::InputValueDefinition;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NodeKind;
use inherent::inherent;

/// An `input Name { ... }` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub fields: Vec<InputValueDefinition>,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for InputObjectDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InputObjectDefinition
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
