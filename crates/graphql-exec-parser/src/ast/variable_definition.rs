use crate::ast::AstNode;
use crate::ast::Loc;
use crate::ast::NodeKind;
use crate::ast::Type;
use crate::ast::Value;
use crate::ast::Variable;
use inherent::inherent;

/// A `$name: Type = default` entry in an operation's variable list.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub variable: Variable,
    pub var_type: Type,
    pub default_value: Option<Value>,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for VariableDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::VariableDefinition
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
