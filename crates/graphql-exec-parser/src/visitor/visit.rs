use crate::visitor::key_map::keys_for;
use crate::visitor::KeyMap;
use crate::visitor::Node;
use crate::visitor::NodeOrList;
use crate::visitor::PathKey;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;

/// Callbacks invoked by [`visit()`] when entering and leaving each node.
///
/// Both methods default to [`VisitAction::NoChange`].
pub trait Visitor<'a> {
    fn enter(&mut self, _node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        VisitAction::NoChange
    }

    fn leave(&mut self, _node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        VisitAction::NoChange
    }
}

impl<'a, V: Visitor<'a> + ?Sized> Visitor<'a> for &mut V {
    fn enter(&mut self, node: &Node<'a>, cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        (**self).enter(node, cx)
    }

    fn leave(&mut self, node: &Node<'a>, cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        (**self).leave(node, cx)
    }
}

type Edit<'a> = (Option<PathKey>, Option<NodeOrList<'a>>);

/// Saved traversal state of an ancestor level.
struct Frame<'a> {
    index: usize,
    keys: Vec<PathKey>,
    edits: Vec<Edit<'a>>,
}

fn keys_of(node: &NodeOrList<'_>, key_map: Option<&KeyMap>) -> Vec<PathKey> {
    match node {
        NodeOrList::One(node) =>
            keys_for(node.kind(), key_map).iter().copied().map(PathKey::Key).collect(),
        NodeOrList::Many(nodes) => (0..nodes.len()).map(PathKey::Index).collect(),
    }
}

fn child_at<'a>(parent: &NodeOrList<'a>, key: PathKey) -> Option<NodeOrList<'a>> {
    match (parent, key) {
        (NodeOrList::Many(nodes), PathKey::Index(index)) =>
            nodes.get(index).cloned().map(NodeOrList::One),
        (NodeOrList::One(node), PathKey::Key(key)) => node.child(key),
        _ => None,
    }
}

/// Applies the edits collected while visiting a node's children.
fn apply_edits<'a>(node: NodeOrList<'a>, edits: Vec<Edit<'a>>) -> NodeOrList<'a> {
    match node {
        NodeOrList::Many(mut nodes) => {
            // Removals shift later siblings left.
            let mut offset = 0;
            for (key, value) in edits {
                let Some(PathKey::Index(index)) = key else { continue };
                let index = index - offset;
                match value {
                    None => {
                        nodes.remove(index);
                        offset += 1;
                    },
                    Some(NodeOrList::One(replacement)) => nodes[index] = replacement,
                    Some(NodeOrList::Many(_)) =>
                        log::warn!("a list element can't be replaced by a list; ignored"),
                }
            }
            NodeOrList::Many(nodes)
        },
        NodeOrList::One(mut node) => {
            for (key, value) in edits {
                if let Some(PathKey::Key(key)) = key {
                    node.replace_child(key, value);
                }
            }
            NodeOrList::One(node)
        },
    }
}

/// Traverses `root` depth-first, calling `visitor` on entering and leaving
/// every node, and returns the (possibly edited) root.
///
/// Children are visited in the order given by `key_map` (or the
/// [default keys](crate::visitor::default_keys)). The traversal keeps its
/// own stack rather than recursing, so arbitrarily deep documents are
/// safe to visit.
///
/// Edits never modify the input: edited nodes are cloned along the path
/// from the edit to the root. Returns `None` if the root itself was
/// removed. A [`VisitAction::Break`] ends the traversal and returns the
/// root as it was before any edits.
pub fn visit<'a>(
    root: impl Into<NodeOrList<'a>>,
    mut visitor: impl Visitor<'a>,
    key_map: Option<&KeyMap>,
) -> Option<NodeOrList<'a>> {
    let root = root.into();
    let original_root = root.clone();
    let mut pending_root = Some(root);

    let mut stack: Vec<Frame<'a>> = vec![];
    // A single pseudo-key for the root.
    let mut keys: Vec<PathKey> = vec![PathKey::Index(0)];
    // Position within `keys`, offset by one so the first step lands on 0.
    let mut index: usize = 0;
    let mut edits: Vec<Edit<'a>> = vec![];
    let mut parent: Option<NodeOrList<'a>> = None;
    let mut path: Vec<PathKey> = vec![];
    let mut ancestors: Vec<NodeOrList<'a>> = vec![];

    loop {
        'step: {
            index += 1;
            let is_leaving = index - 1 == keys.len();
            let is_edited = is_leaving && !edits.is_empty();

            let key: Option<PathKey>;
            let mut node: NodeOrList<'a>;
            if is_leaving {
                key = if ancestors.is_empty() { None } else { path.last().copied() };
                let Some(left) = parent.take() else { break 'step };
                node = left;
                parent = ancestors.pop();
                if is_edited {
                    node = apply_edits(node, std::mem::take(&mut edits));
                }
                let Some(frame) = stack.pop() else { break 'step };
                index = frame.index;
                keys = frame.keys;
                edits = frame.edits;
            } else if let Some(parent_node) = &parent {
                let child_key = keys[index - 1];
                let Some(child) = child_at(parent_node, child_key) else { break 'step };
                path.push(child_key);
                key = Some(child_key);
                node = child;
            } else {
                key = None;
                let Some(root) = pending_root.take() else { break 'step };
                node = root;
            }

            let mut replaced = false;
            if let NodeOrList::One(current) = &node {
                let cx = VisitContext {
                    key,
                    parent: parent.as_ref(),
                    path: &path,
                    ancestors: &ancestors,
                };
                let action =
                    if is_leaving {
                        visitor.leave(current, &cx)
                    } else {
                        visitor.enter(current, &cx)
                    };
                match action {
                    VisitAction::NoChange => (),
                    VisitAction::Break => return Some(original_root),
                    VisitAction::Skip => {
                        if !is_leaving {
                            path.pop();
                            break 'step;
                        }
                    },
                    VisitAction::Update(replacement) => {
                        replaced = true;
                        edits.push((key, Some(NodeOrList::One(replacement.clone()))));
                        if !is_leaving {
                            node = NodeOrList::One(replacement);
                        }
                    },
                    VisitAction::Remove => {
                        replaced = true;
                        edits.push((key, None));
                        if !is_leaving {
                            path.pop();
                            break 'step;
                        }
                    },
                }
            }

            if is_leaving {
                if !replaced && is_edited {
                    edits.push((key, Some(node)));
                }
                path.pop();
            } else {
                stack.push(Frame {
                    index,
                    keys: std::mem::take(&mut keys),
                    edits: std::mem::take(&mut edits),
                });
                keys = keys_of(&node, key_map);
                index = 0;
                if let Some(parent_node) = parent.take() {
                    ancestors.push(parent_node);
                }
                parent = Some(node);
            }
        }

        if stack.is_empty() {
            break;
        }
    }

    match edits.pop() {
        Some((_, new_root)) => new_root,
        None => Some(original_root),
    }
}
