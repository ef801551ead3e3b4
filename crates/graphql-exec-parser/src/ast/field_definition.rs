use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::InputValueDefinition;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::ast::Type;
use inherent::inherent;

/// A field declared on an object or interface type definition.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub field_type: Type,
    pub directives: Vec<Directive>,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for FieldDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::FieldDefinition
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
