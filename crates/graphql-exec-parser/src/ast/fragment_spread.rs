use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NodeKind;
use inherent::inherent;

/// A `...FragmentName` spread of a named fragment.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for FragmentSpread {
    pub fn kind(&self) -> NodeKind {
        NodeKind::FragmentSpread
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
