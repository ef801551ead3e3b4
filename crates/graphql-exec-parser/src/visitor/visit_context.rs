use crate::visitor::NodeOrList;
use crate::visitor::PathKey;

/// Where the node handed to a visitor callback sits in the traversal.
#[derive(Clone, Copy, Debug)]
pub struct VisitContext<'v, 'a> {
    /// The key of the current node within `parent`; `None` for the root.
    pub key: Option<PathKey>,

    /// The node (or list) holding the current node.
    pub parent: Option<&'v NodeOrList<'a>>,

    /// Keys leading from the root to the current node.
    pub path: &'v [PathKey],

    /// All nodes and lists above `parent`, outermost first.
    pub ancestors: &'v [NodeOrList<'a>],
}
