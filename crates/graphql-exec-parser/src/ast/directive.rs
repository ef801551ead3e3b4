use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NodeKind;
use inherent::inherent;

/// A `@name(args)` directive annotation.
///
/// See
/// [Directives](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for Directive {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Directive
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
