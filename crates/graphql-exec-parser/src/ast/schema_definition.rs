use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Loc;
use crate::ast::NodeKind;
use crate::ast::OperationTypeDefinition;
use inherent::inherent;

/// A `schema { query: Q mutation: M }` definition naming the root operation
/// types.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition {
    pub directives: Vec<Directive>,
    pub operation_types: Vec<OperationTypeDefinition>,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for SchemaDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::SchemaDefinition
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
