use crate::ast::AstNode;
use crate::ast::Loc;
use crate::ast::NodeKind;
use crate::ast::Type;
use inherent::inherent;

/// A `Type!` non-null type reference.
///
/// The parser never produces a `NonNullType` wrapping another
/// `NonNullType`.
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType {
    pub inner_type: Box<Type>,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for NonNullType {
    pub fn kind(&self) -> NodeKind {
        NodeKind::NonNullType
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
