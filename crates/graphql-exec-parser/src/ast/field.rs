use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::ast::SelectionSet;
use inherent::inherent;

/// A field selection within a selection set, optionally aliased, with
/// arguments, directives, and a nested selection set.
///
/// See
/// [Fields](https://spec.graphql.org/October2021/#sec-Language.Fields)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Option<SelectionSet>,
    pub loc: Option<Loc>,
}

impl Field {
    /// The key this field's value is written under in a response: the
    /// alias if there is one, otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }
}

#[inherent]
impl AstNode for Field {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Field
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
