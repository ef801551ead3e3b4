use crate::ast::AstNode;
use crate::ast::Definition;
use crate::ast::FragmentDefinition;
use crate::ast::Loc;
use crate::ast::NodeKind;
use crate::ast::OperationDefinition;
use inherent::inherent;

/// The root of a parsed GraphQL document.
///
/// A document holds any mix of executable definitions (operations and
/// fragments) and type system definitions.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub loc: Option<Loc>,
}

impl Document {
    /// Iterates over the operation definitions in document order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            _ => None,
        })
    }

    /// Iterates over the fragment definitions in document order.
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(frag) => Some(frag),
            _ => None,
        })
    }

    /// Looks up a fragment definition by name.
    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments().find(|frag| frag.name.value == name)
    }
}

#[inherent]
impl AstNode for Document {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Document
    }

    pub fn loc(&self) -> Option<&Loc> {
        self.loc.as_ref()
    }
}
