use crate::ast::AstNode;
use crate::ast::Loc;
use crate::ast::NodeKind;
use inherent::inherent;

/// An identifier: a field, type, argument, variable or directive name.
///
/// See
/// [Names](https://spec.graphql.org/October2021/#sec-Names) in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub struct Name {
    pub value: String,
    pub loc: Option<Loc>,
}

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            loc: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[inherent]
impl AstNode for Name {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Name
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
