use crate::visitor::Node;

/// Either a single node or a list of sibling nodes.
///
/// Visits may be rooted at either, and list-valued children (such as a
/// selection set's selections) are traversed as a `Many` level.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeOrList<'a> {
    One(Node<'a>),
    Many(Vec<Node<'a>>),
}

impl<'a> NodeOrList<'a> {
    pub fn as_node(&self) -> Option<&Node<'a>> {
        match self {
            Self::One(node) => Some(node),
            Self::Many(_) => None,
        }
    }

    pub fn into_one(self) -> Option<Node<'a>> {
        match self {
            Self::One(node) => Some(node),
            Self::Many(_) => None,
        }
    }

    pub fn into_many(self) -> Option<Vec<Node<'a>>> {
        match self {
            Self::One(_) => None,
            Self::Many(nodes) => Some(nodes),
        }
    }

    pub fn into_owned(self) -> NodeOrList<'static> {
        match self {
            Self::One(node) => NodeOrList::One(node.into_owned()),
            Self::Many(nodes) => NodeOrList::Many(
                nodes.into_iter().map(Node::into_owned).collect(),
            ),
        }
    }
}

impl<'a> From<Node<'a>> for NodeOrList<'a> {
    fn from(node: Node<'a>) -> Self {
        Self::One(node)
    }
}

impl<'a> From<Vec<Node<'a>>> for NodeOrList<'a> {
    fn from(nodes: Vec<Node<'a>>) -> Self {
        Self::Many(nodes)
    }
}
