use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::ast::Type;
use crate::ast::Value;
use inherent::inherent;

/// An argument definition, or a field of an input object type definition.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub name: Name,
    pub value_type: Type,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for InputValueDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InputValueDefinition
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
