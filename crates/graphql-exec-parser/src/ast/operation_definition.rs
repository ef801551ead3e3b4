use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::ast::OperationType;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use inherent::inherent;

/// A `query`, `mutation` or `subscription` operation.
///
/// An anonymous top-level selection set (`{ ... }`) parses as an unnamed
/// `query` operation.
///
/// See
/// [Operations](https://spec.graphql.org/October2021/#sec-Language.Operations)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub operation: OperationType,
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for OperationDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::OperationDefinition
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
