use crate::ast::AstNode;
use crate::ast::Loc;
use crate::ast::NodeKind;
use crate::ast::Selection;
use inherent::inherent;

/// A brace-delimited list of selections.
///
/// See
/// [Selection Sets](https://spec.graphql.org/October2021/#sec-Selection-Sets)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for SelectionSet {
    pub fn kind(&self) -> NodeKind {
        NodeKind::SelectionSet
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
