use crate::ast;
use crate::visitor::Node;
use crate::visitor::NodeOrList;

/// Keyed access to the child nodes of a concrete AST node type.
///
/// Keys are the snake_case field names listed in the
/// [`KeyMap`](crate::visitor::KeyMap).
pub(crate) trait NodeChildren {
    fn child(&self, key: &str) -> Option<NodeOrList<'_>>;
    fn replace_child(&mut self, key: &str, value: Option<NodeOrList<'_>>);
}

fn unknown_key(kind: &str, key: &str) {
    log::warn!("`{kind}` has no child `{key}`; edit ignored");
}

fn mismatched_edit(kind: &str, key: &str) {
    log::warn!("edit of `{kind}.{key}` has the wrong node type; ignored");
}

macro_rules! get_child {
    (one, $field:expr) => {
        Some(NodeOrList::One(Node::from(&$field)))
    };
    (boxed, $field:expr) => {
        Some(NodeOrList::One(Node::from(&*$field)))
    };
    (opt, $field:expr) => {
        $field.as_ref().map(|node| NodeOrList::One(Node::from(node)))
    };
    (list, $field:expr) => {
        Some(NodeOrList::Many($field.iter().map(Node::from).collect()))
    };
}

macro_rules! set_child {
    (one, $field:expr, $value:expr, $kind:expr, $key:expr) => {
        match $value.and_then(NodeOrList::into_one).map(TryInto::try_into) {
            Some(Ok(node)) => $field = node,
            _ => mismatched_edit($kind, $key),
        }
    };
    (boxed, $field:expr, $value:expr, $kind:expr, $key:expr) => {
        match $value.and_then(NodeOrList::into_one).map(TryInto::try_into) {
            Some(Ok(node)) => $field = Box::new(node),
            _ => mismatched_edit($kind, $key),
        }
    };
    (opt, $field:expr, $value:expr, $kind:expr, $key:expr) => {
        match $value.map(NodeOrList::into_one) {
            None => $field = None,
            Some(Some(node)) => match node.try_into() {
                Ok(node) => $field = Some(node),
                Err(_) => mismatched_edit($kind, $key),
            },
            Some(None) => mismatched_edit($kind, $key),
        }
    };
    (list, $field:expr, $value:expr, $kind:expr, $key:expr) => {
        match $value {
            None => $field.clear(),
            Some(NodeOrList::Many(nodes)) => {
                let mut items = Vec::with_capacity(nodes.len());
                for node in nodes {
                    match node.try_into() {
                        Ok(item) => items.push(item),
                        Err(_) => mismatched_edit($kind, $key),
                    }
                }
                $field = items;
            },
            Some(NodeOrList::One(_)) => mismatched_edit($kind, $key),
        }
    };
}

macro_rules! node_children {
    ($ty:ident { $($key:literal => $field:ident : $shape:ident),* $(,)? }) => {
        impl NodeChildren for ast::$ty {
            #[allow(unused_variables)]
            fn child(&self, key: &str) -> Option<NodeOrList<'_>> {
                match key {
                    $($key => get_child!($shape, self.$field),)*
                    _ => None,
                }
            }

            #[allow(unused_variables)]
            fn replace_child(&mut self, key: &str, value: Option<NodeOrList<'_>>) {
                match key {
                    $($key => set_child!($shape, self.$field, value, stringify!($ty), key),)*
                    _ => unknown_key(stringify!($ty), key),
                }
            }
        }
    };
}

node_children!(Name {});
node_children!(Document { "definitions" => definitions: list });
node_children!(OperationDefinition {
    "name" => name: opt,
    "variable_definitions" => variable_definitions: list,
    "directives" => directives: list,
    "selection_set" => selection_set: one,
});
node_children!(VariableDefinition {
    "variable" => variable: one,
    "type" => var_type: one,
    "default_value" => default_value: opt,
});
node_children!(Variable { "name" => name: one });
node_children!(SelectionSet { "selections" => selections: list });
node_children!(Field {
    "alias" => alias: opt,
    "name" => name: one,
    "arguments" => arguments: list,
    "directives" => directives: list,
    "selection_set" => selection_set: opt,
});
node_children!(Argument {
    "name" => name: one,
    "value" => value: one,
});
node_children!(FragmentSpread {
    "name" => name: one,
    "directives" => directives: list,
});
node_children!(InlineFragment {
    "type_condition" => type_condition: opt,
    "directives" => directives: list,
    "selection_set" => selection_set: one,
});
node_children!(FragmentDefinition {
    "name" => name: one,
    "type_condition" => type_condition: one,
    "directives" => directives: list,
    "selection_set" => selection_set: one,
});
node_children!(IntValue {});
node_children!(FloatValue {});
node_children!(StringValue {});
node_children!(BooleanValue {});
node_children!(NullValue {});
node_children!(EnumValue {});
node_children!(ListValue { "values" => values: list });
node_children!(ObjectValue { "fields" => fields: list });
node_children!(ObjectField {
    "name" => name: one,
    "value" => value: one,
});
node_children!(Directive {
    "name" => name: one,
    "arguments" => arguments: list,
});
node_children!(NamedType { "name" => name: one });
node_children!(ListType { "type" => item_type: boxed });
node_children!(NonNullType { "type" => inner_type: boxed });
node_children!(SchemaDefinition {
    "directives" => directives: list,
    "operation_types" => operation_types: list,
});
node_children!(OperationTypeDefinition { "type" => named_type: one });
node_children!(ScalarDefinition {
    "name" => name: one,
    "directives" => directives: list,
});
node_children!(ObjectDefinition {
    "name" => name: one,
    "interfaces" => interfaces: list,
    "directives" => directives: list,
    "fields" => fields: list,
});
node_children!(FieldDefinition {
    "name" => name: one,
    "arguments" => arguments: list,
    "type" => field_type: one,
    "directives" => directives: list,
});
node_children!(InputValueDefinition {
    "name" => name: one,
    "type" => value_type: one,
    "default_value" => default_value: opt,
    "directives" => directives: list,
});
node_children!(InterfaceDefinition {
    "name" => name: one,
    "directives" => directives: list,
    "fields" => fields: list,
});
node_children!(UnionDefinition {
    "name" => name: one,
    "directives" => directives: list,
    "types" => types: list,
});
node_children!(EnumDefinition {
    "name" => name: one,
    "directives" => directives: list,
    "values" => values: list,
});
node_children!(EnumValueDefinition {
    "name" => name: one,
    "directives" => directives: list,
});
node_children!(InputObjectDefinition {
    "name" => name: one,
    "directives" => directives: list,
    "fields" => fields: list,
});
node_children!(TypeExtensionDefinition { "definition" => definition: one });
node_children!(DirectiveDefinition {
    "name" => name: one,
    "arguments" => arguments: list,
    "locations" => locations: list,
});
