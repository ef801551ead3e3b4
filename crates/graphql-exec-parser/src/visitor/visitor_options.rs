use crate::ast::NodeKind;
use crate::visitor::Node;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::visitor::Visitor;
use std::collections::HashMap;

/// A boxed visitor callback.
pub type VisitFn<'f, 'a> =
    Box<dyn FnMut(&Node<'a>, &VisitContext<'_, 'a>) -> VisitAction<'a> + 'f>;

/// Callbacks for a single node kind. `kind` is shorthand for `enter`.
#[derive(Default)]
pub struct NamedVisitFuncs<'f, 'a> {
    pub kind: Option<VisitFn<'f, 'a>>,
    pub enter: Option<VisitFn<'f, 'a>>,
    pub leave: Option<VisitFn<'f, 'a>>,
}

impl<'f, 'a> NamedVisitFuncs<'f, 'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(
        mut self,
        f: impl FnMut(&Node<'a>, &VisitContext<'_, 'a>) -> VisitAction<'a> + 'f,
    ) -> Self {
        self.kind = Some(Box::new(f));
        self
    }

    pub fn enter(
        mut self,
        f: impl FnMut(&Node<'a>, &VisitContext<'_, 'a>) -> VisitAction<'a> + 'f,
    ) -> Self {
        self.enter = Some(Box::new(f));
        self
    }

    pub fn leave(
        mut self,
        f: impl FnMut(&Node<'a>, &VisitContext<'_, 'a>) -> VisitAction<'a> + 'f,
    ) -> Self {
        self.leave = Some(Box::new(f));
        self
    }
}

/// A [`Visitor`] assembled from closures.
///
/// For each node the most specific callback wins, in this order:
/// `kind_funcs[kind].kind` (enter only), `kind_funcs[kind].enter`/`leave`,
/// `enter_kind_map`/`leave_kind_map`, then `enter`/`leave`.
#[derive(Default)]
pub struct VisitorOptions<'f, 'a> {
    pub enter: Option<VisitFn<'f, 'a>>,
    pub leave: Option<VisitFn<'f, 'a>>,
    pub enter_kind_map: HashMap<NodeKind, VisitFn<'f, 'a>>,
    pub leave_kind_map: HashMap<NodeKind, VisitFn<'f, 'a>>,
    pub kind_funcs: HashMap<NodeKind, NamedVisitFuncs<'f, 'a>>,
}

impl<'f, 'a> VisitorOptions<'f, 'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_enter(
        mut self,
        f: impl FnMut(&Node<'a>, &VisitContext<'_, 'a>) -> VisitAction<'a> + 'f,
    ) -> Self {
        self.enter = Some(Box::new(f));
        self
    }

    pub fn on_leave(
        mut self,
        f: impl FnMut(&Node<'a>, &VisitContext<'_, 'a>) -> VisitAction<'a> + 'f,
    ) -> Self {
        self.leave = Some(Box::new(f));
        self
    }

    pub fn on_enter_kind(
        mut self,
        kind: NodeKind,
        f: impl FnMut(&Node<'a>, &VisitContext<'_, 'a>) -> VisitAction<'a> + 'f,
    ) -> Self {
        self.enter_kind_map.insert(kind, Box::new(f));
        self
    }

    pub fn on_leave_kind(
        mut self,
        kind: NodeKind,
        f: impl FnMut(&Node<'a>, &VisitContext<'_, 'a>) -> VisitAction<'a> + 'f,
    ) -> Self {
        self.leave_kind_map.insert(kind, Box::new(f));
        self
    }

    pub fn on_kind(mut self, kind: NodeKind, funcs: NamedVisitFuncs<'f, 'a>) -> Self {
        self.kind_funcs.insert(kind, funcs);
        self
    }

    fn visit_fn(&mut self, kind: NodeKind, is_leaving: bool) -> Option<&mut VisitFn<'f, 'a>> {
        if let Some(funcs) = self.kind_funcs.get_mut(&kind) {
            if !is_leaving && funcs.kind.is_some() {
                return funcs.kind.as_mut();
            }
            let specific =
                if is_leaving {
                    funcs.leave.as_mut()
                } else {
                    funcs.enter.as_mut()
                };
            if specific.is_some() {
                return specific;
            }
        }
        if is_leaving {
            self.leave_kind_map.get_mut(&kind).or(self.leave.as_mut())
        } else {
            self.enter_kind_map.get_mut(&kind).or(self.enter.as_mut())
        }
    }
}

impl<'a> Visitor<'a> for VisitorOptions<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        match self.visit_fn(node.kind(), false) {
            Some(f) => f(node, cx),
            None => VisitAction::NoChange,
        }
    }

    fn leave(&mut self, node: &Node<'a>, cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        match self.visit_fn(node.kind(), true) {
            Some(f) => f(node, cx),
            None => VisitAction::NoChange,
        }
    }
}
