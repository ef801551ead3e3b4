use crate::ast::AstNode;
use crate::ast::ListType;
use crate::ast::Loc;
use crate::ast::NamedType;
use crate::ast::NodeKind;
use crate::ast::NonNullType;
use inherent::inherent;

/// A type reference as written in a document: `Name`, `[Type]` or `Type!`.
#[derive(Clone, Debug, PartialEq)]
pub enum Type {
    Named(NamedType),
    List(ListType),
    NonNull(NonNullType),
}

impl Type {
    /// The innermost named type of this reference.
    pub fn named_type(&self) -> &NamedType {
        let mut current = self;
        loop {
            match current {
                Self::Named(named) => return named,
                Self::List(list) => current = &list.item_type,
                Self::NonNull(non_null) => current = &non_null.inner_type,
            }
        }
    }
}

#[inherent]
impl AstNode for Type {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Named(t) => t.kind(),
            Self::List(t) => t.kind(),
            Self::NonNull(t) => t.kind(),
        }
    }

    pub fn loc(&self) -> Option<&Loc> {
        match self {
            Self::Named(t) => t.loc(),
            Self::List(t) => t.loc(),
            Self::NonNull(t) => t.loc(),
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(named) => f.write_str(&named.name.value),
            Self::List(list) => write!(f, "[{}]", list.item_type),
            Self::NonNull(non_null) => write!(f, "{}!", non_null.inner_type),
        }
    }
}
