use crate::ast::AstNode;
use crate::ast::DirectiveDefinition;
use crate::ast::EnumDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::InputObjectDefinition;
use crate::ast::InterfaceDefinition;
use crate::ast::Loc;
use crate::ast::NodeKind;
use crate::ast::ObjectDefinition;
use crate::ast::OperationDefinition;
use crate::ast::ScalarDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::TypeExtensionDefinition;
use crate::ast::UnionDefinition;
use inherent::inherent;

/// A top-level definition within a [`Document`](crate::ast::Document).
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
    Schema(SchemaDefinition),
    Scalar(ScalarDefinition),
    Object(ObjectDefinition),
    Interface(InterfaceDefinition),
    Union(UnionDefinition),
    Enum(EnumDefinition),
    InputObject(InputObjectDefinition),
    TypeExtension(TypeExtensionDefinition),
    Directive(DirectiveDefinition),
}

impl Definition {
    /// Whether this is an operation or fragment definition.
    pub fn is_executable(&self) -> bool {
        matches!(self, Self::Operation(_) | Self::Fragment(_))
    }
}

#[inherent]
impl AstNode for Definition {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Operation(def) => def.kind(),
            Self::Fragment(def) => def.kind(),
            Self::Schema(def) => def.kind(),
            Self::Scalar(def) => def.kind(),
            Self::Object(def) => def.kind(),
            Self::Interface(def) => def.kind(),
            Self::Union(def) => def.kind(),
            Self::Enum(def) => def.kind(),
            Self::InputObject(def) => def.kind(),
            Self::TypeExtension(def) => def.kind(),
            Self::Directive(def) => def.kind(),
        }
    }

    pub fn loc(&self) -> Option<&Loc> {
        match self {
            Self::Operation(def) => def.loc(),
            Self::Fragment(def) => def.loc(),
            Self::Schema(def) => def.loc(),
            Self::Scalar(def) => def.loc(),
            Self::Object(def) => def.loc(),
            Self::Interface(def) => def.loc(),
            Self::Union(def) => def.loc(),
            Self::Enum(def) => def.loc(),
            Self::InputObject(def) => def.loc(),
            Self::TypeExtension(def) => def.loc(),
            Self::Directive(def) => def.loc(),
        }
    }
}
