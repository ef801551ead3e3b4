use crate::error::GraphQLError;
use crate::execution::ExecuteParams;
use crate::execution::ExecutionContext;
use crate::types::GraphQLType;
use graphql_exec_parser::ast;
use std::collections::HashMap;
use std::collections::HashSet;
use std::slice;

/// The cost of the operation `params` selects: the sum of the `cost` of
/// every field it selects, counting nested selections.
///
/// Fragments are counted where they are spread, once per spread. An
/// inline fragment on an interface counts only when its type condition
/// names an implementation of that interface. `@skip`/`@include` are not
/// evaluated, and fields unknown to the schema count as zero.
pub fn query_complexity(params: &ExecuteParams) -> Result<u64, GraphQLError> {
    let ctx = ExecutionContext::build(params)?;
    let Some(root_type) = ctx
        .root_type()
        .and_then(|root| ctx.schema.get_type(root.name()))
    else {
        return Ok(0);
    };
    let cost = selection_set_cost(&ctx, root_type, &ctx.operation.selection_set);
    log::debug!("Query complexity: {cost}");
    Ok(cost)
}

/// A selection set being costed.
struct Frame<'a> {
    parent: &'a GraphQLType,
    selections: slice::Iter<'a, ast::Selection>,
    cost: u64,
    /// Set when the selections are a named fragment's.
    fragment_name: Option<&'a str>,
}

impl<'a> Frame<'a> {
    fn new(
        parent: &'a GraphQLType,
        selection_set: &'a ast::SelectionSet,
        fragment_name: Option<&'a str>,
    ) -> Self {
        Self {
            parent,
            selections: selection_set.selections.iter(),
            cost: 0,
            fragment_name,
        }
    }
}

/// Sums the cost of `selection_set` on an explicit stack of nested
/// selection sets. A fragment's cost is computed once and reused for each
/// of its spreads.
fn selection_set_cost<'a>(
    ctx: &'a ExecutionContext,
    parent: &'a GraphQLType,
    selection_set: &'a ast::SelectionSet,
) -> u64 {
    let mut fragment_costs: HashMap<&'a str, u64> = HashMap::new();
    let mut expanding: HashSet<&'a str> = HashSet::new();
    let mut stack = vec![Frame::new(parent, selection_set, None)];
    loop {
        let Some(frame) = stack.last_mut() else {
            return 0;
        };
        let Some(selection) = frame.selections.next() else {
            let Some(done) = stack.pop() else {
                return 0;
            };
            if let Some(name) = done.fragment_name {
                expanding.remove(name);
                fragment_costs.insert(name, done.cost);
            }
            match stack.last_mut() {
                Some(outer) => outer.cost = outer.cost.saturating_add(done.cost),
                None => return done.cost,
            }
            continue;
        };
        let parent = frame.parent;
        match selection {
            ast::Selection::Field(field) => {
                // Fields unknown to the schema count as zero.
                let Some(field_def) = parent.field(field.name.as_str()) else {
                    continue;
                };
                frame.cost = frame.cost.saturating_add(field_def.cost());
                let Some(selection_set) = &field.selection_set else {
                    continue;
                };
                if let Some(field_type @ (GraphQLType::Object(_) | GraphQLType::Interface(_))) =
                    ctx.schema.get_type(field_def.type_annotation().innermost_name()) {
                    stack.push(Frame::new(field_type, selection_set, None));
                }
            },

            ast::Selection::InlineFragment(inline) => match (parent, &inline.type_condition) {
                (GraphQLType::Interface(interface), Some(type_condition)) => {
                    let objects = ctx.schema
                        .implementations(interface.name())
                        .iter()
                        .filter(|name| name.as_str() == type_condition.name.as_str())
                        .filter_map(|name| ctx.schema.get_type(name));
                    for object in objects {
                        stack.push(Frame::new(object, &inline.selection_set, None));
                    }
                },
                _ => stack.push(Frame::new(parent, &inline.selection_set, None)),
            },

            ast::Selection::FragmentSpread(spread) => {
                let name = spread.name.as_str();
                if let Some(&fragment_cost) = fragment_costs.get(name) {
                    frame.cost = frame.cost.saturating_add(fragment_cost);
                    continue;
                }
                // A cyclic spread is rejected by validation; it adds nothing here.
                if expanding.contains(name) {
                    continue;
                }
                let Some(fragment) = ctx.fragment(name) else {
                    continue;
                };
                let fragment_type = ctx.schema
                    .get_type(fragment.type_condition.name.as_str())
                    .filter(|type_| type_.fields().is_some());
                let Some(fragment_type) = fragment_type else {
                    continue;
                };
                expanding.insert(name);
                stack.push(Frame::new(fragment_type, &fragment.selection_set, Some(name)));
            },
        }
    }
}
