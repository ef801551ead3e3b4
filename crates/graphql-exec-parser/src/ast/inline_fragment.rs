use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Loc;
use crate::ast::NamedType;
use crate::ast::NodeKind;
use crate::ast::SelectionSet;
use inherent::inherent;

/// A `... on Type { ... }` inline fragment. The type condition is optional.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<NamedType>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for InlineFragment {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InlineFragment
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
