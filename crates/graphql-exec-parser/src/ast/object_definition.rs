use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::FieldDefinition;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NodeKind;
use inherent::inherent;

/// A `type Name implements A & B { ... }` definition.
///
/// See
/// [Objects](https://spec.graphql.org/October2021/#sec-Objects)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectDefinition {
    pub name: Name,
    pub interfaces: Vec<NamedType>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub loc: Option<Loc>,
}

#[inherent]
impl AstNode for ObjectDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ObjectDefinition
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
