use crate::validation::ValidationContext;
use graphql_exec_parser::ast;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;
use std::borrow::Cow;
use std::collections::HashMap;
use std::collections::HashSet;

/// The graph of fragment spreads between fragment definitions is acyclic.
struct NoFragmentCycles<'c, 'a> {
    context: &'c ValidationContext<'a>,
    /// Fragments whose reachable spreads have been fully explored.
    visited: HashSet<&'a str>,
    spread_path: Vec<&'a ast::FragmentSpread>,
    /// Position in `spread_path` at which each fragment on the current
    /// path was entered.
    spread_path_index: HashMap<&'a str, usize>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(NoFragmentCycles {
        context,
        visited: HashSet::new(),
        spread_path: vec![],
        spread_path_index: HashMap::new(),
    })
}

/// A fragment being explored, with the index of its next spread.
struct Frame<'a> {
    fragment_name: &'a str,
    spreads: Vec<&'a ast::FragmentSpread>,
    next_spread: usize,
}

impl<'a> NoFragmentCycles<'_, 'a> {
    /// Walks the spreads reachable from `fragment` depth first, on an
    /// explicit stack so long fragment chains can't exhaust the host stack.
    fn detect_cycles(&mut self, fragment: &'a ast::FragmentDefinition) {
        let mut stack: Vec<Frame<'a>> = self.enter_fragment(fragment).into_iter().collect();
        while let Some(frame) = stack.last_mut() {
            let Some(&spread) = frame.spreads.get(frame.next_spread) else {
                let fragment_name = frame.fragment_name;
                stack.pop();
                self.spread_path_index.remove(fragment_name);
                // The spread that led into the finished fragment.
                if !stack.is_empty() {
                    self.spread_path.pop();
                }
                continue;
            };
            frame.next_spread += 1;

            let spread_name = spread.name.as_str();
            self.spread_path.push(spread);
            if let Some(cycle_start) = self.spread_path_index.get(spread_name).copied() {
                self.report_cycle(spread_name, cycle_start);
                self.spread_path.pop();
                continue;
            }
            let child = self.context
                .fragment(spread_name)
                .and_then(|spread_fragment| self.enter_fragment(spread_fragment));
            match child {
                Some(child) => stack.push(child),
                None => {
                    self.spread_path.pop();
                },
            }
        }
    }

    /// Starts exploring `fragment`, unless it was explored before or
    /// spreads nothing.
    fn enter_fragment(&mut self, fragment: &'a ast::FragmentDefinition) -> Option<Frame<'a>> {
        let fragment_name = fragment.name.as_str();
        if !self.visited.insert(fragment_name) {
            return None;
        }
        let spreads = self.context.fragment_spreads(&fragment.selection_set);
        if spreads.is_empty() {
            return None;
        }
        self.spread_path_index.insert(fragment_name, self.spread_path.len());
        Some(Frame {
            fragment_name,
            spreads,
            next_spread: 0,
        })
    }

    fn report_cycle(&self, spread_name: &str, cycle_start: usize) {
        let cycle_path = &self.spread_path[cycle_start..];
        let via = cycle_path[..cycle_path.len() - 1]
            .iter()
            .map(|spread| spread.name.as_str())
            .collect::<Vec<_>>();
        let via = if via.is_empty() {
            String::new()
        } else {
            format!(" via {}", via.join(", "))
        };
        self.context.report_error(
            format!("Cannot spread fragment \"{spread_name}\" within itself{via}."),
            cycle_path.iter().map(|spread| spread.loc.as_ref()),
        );
    }
}

impl<'a> Visitor<'a> for NoFragmentCycles<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        match node {
            Node::OperationDefinition(_) => VisitAction::Skip,
            Node::FragmentDefinition(fragment) => {
                if let Cow::Borrowed(fragment) = fragment {
                    self.detect_cycles(*fragment);
                }
                VisitAction::Skip
            },
            _ => VisitAction::NoChange,
        }
    }
}
