use crate::execution::ExecutionContext;
use crate::types::ObjectType;
use crate::values::argument_values;
use crate::Value;
use graphql_exec_parser::ast;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::slice;

/// Fields selected on an object, grouped by response key in the order
/// each key was first selected.
pub(crate) type GroupedFields<'a> = IndexMap<&'a str, Vec<&'a ast::Field>>;

/// Collects the fields `selection_sets` select on a value of
/// `object_type`, applying `@skip`/`@include` and descending into the
/// fragments whose type condition matches.
pub(crate) fn collect_fields<'a>(
    ctx: &'a ExecutionContext,
    object_type: &ObjectType,
    selection_sets: impl IntoIterator<Item = &'a ast::SelectionSet>,
) -> GroupedFields<'a> {
    let mut fields = GroupedFields::new();
    let mut visited_fragments = HashSet::new();
    for selection_set in selection_sets {
        collect_into(ctx, object_type, selection_set, &mut visited_fragments, &mut fields);
    }
    fields
}

/// Fragments are expanded in place by pushing their selections on `pending`,
/// which keeps document order without recursing per fragment.
fn collect_into<'a>(
    ctx: &'a ExecutionContext,
    object_type: &ObjectType,
    selection_set: &'a ast::SelectionSet,
    visited_fragments: &mut HashSet<&'a str>,
    fields: &mut GroupedFields<'a>,
) {
    let mut pending: Vec<slice::Iter<'a, ast::Selection>> = vec![selection_set.selections.iter()];
    while let Some(selections) = pending.last_mut() {
        let Some(selection) = selections.next() else {
            pending.pop();
            continue;
        };
        match selection {
            ast::Selection::Field(field) => {
                if should_include(ctx, &field.directives) {
                    fields.entry(field.response_key()).or_default().push(field);
                }
            },
            ast::Selection::InlineFragment(inline) => {
                let applies = inline.type_condition
                    .as_ref()
                    .is_none_or(|cond| condition_matches(ctx, cond.name.as_str(), object_type));
                if applies && should_include(ctx, &inline.directives) {
                    pending.push(inline.selection_set.selections.iter());
                }
            },
            ast::Selection::FragmentSpread(spread) => {
                let fragment_name = spread.name.as_str();
                if visited_fragments.contains(fragment_name)
                    || !should_include(ctx, &spread.directives) {
                    continue;
                }
                visited_fragments.insert(fragment_name);
                let Some(fragment) = ctx.fragment(fragment_name) else {
                    continue;
                };
                if condition_matches(ctx, fragment.type_condition.name.as_str(), object_type) {
                    pending.push(fragment.selection_set.selections.iter());
                }
            },
        }
    }
}

/// Applies `@skip(if:)` and `@include(if:)`.
fn should_include(ctx: &ExecutionContext, directives: &[ast::Directive]) -> bool {
    let condition = |directive_name: &str| -> Option<bool> {
        let directive = directives.iter().find(|d| d.name.value == directive_name)?;
        let definition = ctx.schema.directive(directive_name)?;
        let args = argument_values(
            &ctx.schema,
            definition.arguments(),
            &directive.arguments,
            &ctx.variable_values,
        ).ok()?;
        args.get("if").and_then(Value::as_bool)
    };
    condition("skip") != Some(true) && condition("include") != Some(false)
}

fn condition_matches(ctx: &ExecutionContext, type_name: &str, object_type: &ObjectType) -> bool {
    type_name == object_type.name() || ctx.schema.is_possible_type(type_name, object_type.name())
}
