use crate::ast::AstNode;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::Loc;
use crate::ast::NodeKind;
use inherent::inherent;

/// A single entry within a [`SelectionSet`](crate::ast::SelectionSet).
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

#[inherent]
impl AstNode for Selection {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Field(sel) => sel.kind(),
            Self::FragmentSpread(sel) => sel.kind(),
            Self::InlineFragment(sel) => sel.kind(),
        }
    }

    pub fn loc(&self) -> Option<&Loc> {
        match self {
            Self::Field(sel) => sel.loc(),
            Self::FragmentSpread(sel) => sel.loc(),
            Self::InlineFragment(sel) => sel.loc(),
        }
    }
}
