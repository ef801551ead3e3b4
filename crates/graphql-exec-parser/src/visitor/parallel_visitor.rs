use crate::visitor::Node;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::visitor::Visitor;

#[derive(Clone, Copy, Debug, PartialEq)]
enum VisitorState {
    Active,
    /// Skipped the node at this path depth; resumes after leaving it.
    Skipping(usize),
    Broken,
}

/// Runs several visitors in a single traversal.
///
/// Each visitor sees the nodes it would see if run on its own: `Skip`
/// suspends only that visitor until the traversal leaves the skipped node,
/// and `Break` stops only that visitor. An `Update` or `Remove` from any
/// visitor is applied immediately, and the visitors after it in the list
/// aren't called for that node.
pub struct ParallelVisitor<'v, 'a> {
    visitors: Vec<&'v mut dyn Visitor<'a>>,
    states: Vec<VisitorState>,
}

impl<'v, 'a> ParallelVisitor<'v, 'a> {
    pub fn new(visitors: Vec<&'v mut dyn Visitor<'a>>) -> Self {
        let states = vec![VisitorState::Active; visitors.len()];
        Self { visitors, states }
    }
}

/// Shorthand for [`ParallelVisitor::new()`].
pub fn visit_in_parallel<'v, 'a>(
    visitors: Vec<&'v mut dyn Visitor<'a>>,
) -> ParallelVisitor<'v, 'a> {
    ParallelVisitor::new(visitors)
}

impl<'a> Visitor<'a> for ParallelVisitor<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        for (visitor, state) in self.visitors.iter_mut().zip(self.states.iter_mut()) {
            if *state != VisitorState::Active {
                continue;
            }
            match visitor.enter(node, cx) {
                VisitAction::NoChange => (),
                VisitAction::Skip => *state = VisitorState::Skipping(cx.path.len()),
                VisitAction::Break => *state = VisitorState::Broken,
                action => return action,
            }
        }
        VisitAction::NoChange
    }

    fn leave(&mut self, node: &Node<'a>, cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        for (visitor, state) in self.visitors.iter_mut().zip(self.states.iter_mut()) {
            match *state {
                VisitorState::Active => match visitor.leave(node, cx) {
                    VisitAction::NoChange | VisitAction::Skip => (),
                    VisitAction::Break => *state = VisitorState::Broken,
                    action => return action,
                },
                VisitorState::Skipping(depth) if depth == cx.path.len() =>
                    *state = VisitorState::Active,
                VisitorState::Skipping(_) | VisitorState::Broken => (),
            }
        }
        VisitAction::NoChange
    }
}
