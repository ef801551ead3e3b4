use crate::ast::AstNode;
use crate::ast::Loc;
use crate::ast::NodeKind;
use inherent::inherent;

/// The `null` literal.
///
/// See
/// [Null Value](https://spec.graphql.org/October2021/#sec-Null-Value)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub struct NullValue {
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for NullValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::NullValue
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
