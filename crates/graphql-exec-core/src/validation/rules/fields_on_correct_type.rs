use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::validation::quoted_or_list;
use crate::validation::ValidationContext;
use graphql_exec_parser::visitor::Node;
use graphql_exec_parser::visitor::VisitAction;
use graphql_exec_parser::visitor::VisitContext;
use graphql_exec_parser::visitor::Visitor;
use std::collections::HashMap;

/// Every selected field is defined on its parent type (or is an allowed
/// meta field such as `__typename`).
struct FieldsOnCorrectType<'c, 'a> {
    context: &'c ValidationContext<'a>,
}

pub(crate) fn create<'c, 'a>(context: &'c ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'c> {
    Box::new(FieldsOnCorrectType { context })
}

impl<'a> Visitor<'a> for FieldsOnCorrectType<'_, 'a> {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        let Node::Field(field) = node else {
            return VisitAction::NoChange;
        };
        let Some(parent_type) = self.context.parent_type() else {
            return VisitAction::NoChange;
        };
        if self.context.field_def().is_none() {
            let field_name = field.name.as_str();
            let mut message = format!(
                "Cannot query field \"{field_name}\" on \"{}\".",
                parent_type.name(),
            );
            let suggestions = suggested_type_names(self.context.schema(), parent_type, field_name);
            if !suggestions.is_empty() {
                message.push_str(&format!(
                    " Did you mean to use an inline fragment on {}?",
                    quoted_or_list(&suggestions),
                ));
            }
            self.context.report_error(message, [field.loc.as_ref()]);
        }
        VisitAction::NoChange
    }
}

/// For an abstract parent type, the types within it that do define
/// `field_name`: interfaces first (most widely implemented first), then
/// object types.
fn suggested_type_names<'s>(
    schema: &'s Schema,
    parent_type: &'s GraphQLType,
    field_name: &str,
) -> Vec<&'s str> {
    if !parent_type.is_abstract() {
        return vec![];
    }
    let mut object_types = vec![];
    let mut interface_usage: Vec<&'s str> = vec![];
    let mut usage_counts: HashMap<&'s str, usize> = HashMap::new();
    for type_name in schema.possible_types(parent_type.name()) {
        let Some(GraphQLType::Object(object_type)) = schema.get_type(type_name) else {
            continue;
        };
        if object_type.field(field_name).is_none() {
            continue;
        }
        object_types.push(object_type.name());
        for interface_name in object_type.interface_names() {
            let defines_field = schema
                .get_type(interface_name)
                .and_then(|iface| iface.field(field_name))
                .is_some();
            if !defines_field {
                continue;
            }
            let count = usage_counts.entry(interface_name.as_str()).or_insert(0);
            if *count == 0 {
                interface_usage.push(interface_name.as_str());
            }
            *count += 1;
        }
    }
    interface_usage.sort_by_key(|name| std::cmp::Reverse(usage_counts[name]));
    interface_usage.extend(object_types);
    interface_usage
}
