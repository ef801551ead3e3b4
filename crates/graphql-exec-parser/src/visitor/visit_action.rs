use crate::visitor::Node;

/// What a visitor callback asks the traversal to do next.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum VisitAction<'a> {
    /// Continue normally.
    #[default]
    NoChange,

    /// Don't descend into the current node. Only meaningful on enter.
    Skip,

    /// Stop the whole traversal.
    Break,

    /// Replace the current node. On enter, traversal continues into the
    /// replacement.
    Update(Node<'a>),

    /// Remove the current node from its parent.
    Remove,
}
