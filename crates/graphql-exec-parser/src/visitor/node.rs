use crate::ast;
use crate::ast::NodeKind;
use crate::visitor::NodeOrList;
use crate::visitor::node_children::NodeChildren;
use std::borrow::Cow;

macro_rules! define_node {
    ($($variant:ident),* $(,)?) => {
        /// A reference to any AST node, as handed to visitor callbacks.
        ///
        /// Nodes borrowed from the document being visited are
        /// [`Cow::Borrowed`]; nodes produced by an edit (or cloned out of an
        /// edited parent) are [`Cow::Owned`].
        #[derive(Clone, Debug, PartialEq)]
        pub enum Node<'a> {
            $($variant(Cow<'a, ast::$variant>),)*
        }

        impl<'a> Node<'a> {
            pub fn kind(&self) -> NodeKind {
                match self {
                    $(Self::$variant(_) => NodeKind::$variant,)*
                }
            }

            pub fn loc(&self) -> Option<&ast::Loc> {
                match self {
                    $(Self::$variant(node) => node.loc.as_ref(),)*
                }
            }

            /// Detaches this node from the document it borrows from.
            pub fn into_owned(self) -> Node<'static> {
                match self {
                    $(Self::$variant(node) => Node::$variant(Cow::Owned(node.into_owned())),)*
                }
            }

            /// The child (or list of children) stored under `key`, if
            /// present. Optional children that are absent yield `None`.
            pub fn child(&self, key: &str) -> Option<NodeOrList<'a>> {
                match self {
                    $(
                        Self::$variant(Cow::Borrowed(node)) => NodeChildren::child(*node, key),
                        Self::$variant(Cow::Owned(node)) =>
                            NodeChildren::child(node, key).map(NodeOrList::into_owned),
                    )*
                }
            }

            /// Replaces the child stored under `key`. `None` removes an
            /// optional child (or empties a list of children).
            pub fn replace_child(&mut self, key: &str, value: Option<NodeOrList<'_>>) {
                match self {
                    $(Self::$variant(node) => node.to_mut().replace_child(key, value),)*
                }
            }
        }

        $(
            impl<'a> From<&'a ast::$variant> for Node<'a> {
                fn from(node: &'a ast::$variant) -> Self {
                    Self::$variant(Cow::Borrowed(node))
                }
            }

            impl From<ast::$variant> for Node<'static> {
                fn from(node: ast::$variant) -> Self {
                    Self::$variant(Cow::Owned(node))
                }
            }

            impl<'a> TryFrom<Node<'a>> for ast::$variant {
                type Error = Node<'a>;

                fn try_from(node: Node<'a>) -> Result<Self, Self::Error> {
                    match node {
                        Node::$variant(node) => Ok(node.into_owned()),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

define_node!(
    Name,
    Document,
    OperationDefinition,
    VariableDefinition,
    Variable,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    Directive,
    NamedType,
    ListType,
    NonNullType,
    SchemaDefinition,
    OperationTypeDefinition,
    ScalarDefinition,
    ObjectDefinition,
    FieldDefinition,
    InputValueDefinition,
    InterfaceDefinition,
    UnionDefinition,
    EnumDefinition,
    EnumValueDefinition,
    InputObjectDefinition,
    TypeExtensionDefinition,
    DirectiveDefinition,
);

// =============================================================================
// Conversions for the AST's sum types
// =============================================================================

/// Implements `From<&T>`/`From<T>` and `TryFrom<Node>` for an AST enum whose
/// variants each wrap one concrete node type.
macro_rules! node_sum_type {
    ($sum:ident { $($sum_variant:ident => $node_variant:ident),* $(,)? }) => {
        impl<'a> From<&'a ast::$sum> for Node<'a> {
            fn from(node: &'a ast::$sum) -> Self {
                match node {
                    $(ast::$sum::$sum_variant(inner) => Self::$node_variant(Cow::Borrowed(inner)),)*
                }
            }
        }

        impl From<ast::$sum> for Node<'static> {
            fn from(node: ast::$sum) -> Self {
                match node {
                    $(ast::$sum::$sum_variant(inner) => Node::$node_variant(Cow::Owned(inner)),)*
                }
            }
        }

        impl<'a> TryFrom<Node<'a>> for ast::$sum {
            type Error = Node<'a>;

            fn try_from(node: Node<'a>) -> Result<Self, Self::Error> {
                match node {
                    $(Node::$node_variant(inner) => Ok(Self::$sum_variant(inner.into_owned())),)*
                    other => Err(other),
                }
            }
        }
    };
}

node_sum_type!(Definition {
    Operation => OperationDefinition,
    Fragment => FragmentDefinition,
    Schema => SchemaDefinition,
    Scalar => ScalarDefinition,
    Object => ObjectDefinition,
    Interface => InterfaceDefinition,
    Union => UnionDefinition,
    Enum => EnumDefinition,
    InputObject => InputObjectDefinition,
    TypeExtension => TypeExtensionDefinition,
    Directive => DirectiveDefinition,
});

node_sum_type!(Selection {
    Field => Field,
    FragmentSpread => FragmentSpread,
    InlineFragment => InlineFragment,
});

node_sum_type!(Value {
    Variable => Variable,
    Int => IntValue,
    Float => FloatValue,
    String => StringValue,
    Boolean => BooleanValue,
    Null => NullValue,
    Enum => EnumValue,
    List => ListValue,
    Object => ObjectValue,
});

node_sum_type!(Type {
    Named => NamedType,
    List => ListType,
    NonNull => NonNullType,
});
