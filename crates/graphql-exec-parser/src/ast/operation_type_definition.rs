use crate::ast::AstNode;
use crate::ast::Loc;
use crate::ast::NamedType;
use crate::ast::NodeKind;
use crate::ast::OperationType;
use inherent::inherent;

/// One `operation: Type` entry of a [`SchemaDefinition`](crate::ast::SchemaDefinition).
#[derive(Clone, Debug, PartialEq)]
pub struct OperationTypeDefinition {
    pub operation: OperationType,
    pub named_type: NamedType,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for OperationTypeDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::OperationTypeDefinition
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
