use crate::ast::NodeKind;
use std::collections::HashMap;

/// Overrides the ordered list of child keys traversed for a node kind.
///
/// Kinds missing from the map fall back to [`default_keys()`].
pub type KeyMap = HashMap<NodeKind, Vec<&'static str>>;

/// The ordered child keys traversed for each node kind by default.
pub fn default_keys(kind: NodeKind) -> &'static [&'static str] {
    match kind {
        NodeKind::Name => &[],

        NodeKind::Document => &["definitions"],
        NodeKind::OperationDefinition =>
            &["name", "variable_definitions", "directives", "selection_set"],
        NodeKind::VariableDefinition => &["variable", "type", "default_value"],
        NodeKind::Variable => &["name"],
        NodeKind::SelectionSet => &["selections"],
        NodeKind::Field =>
            &["alias", "name", "arguments", "directives", "selection_set"],
        NodeKind::Argument => &["name", "value"],
        NodeKind::FragmentSpread => &["name", "directives"],
        NodeKind::InlineFragment => &["type_condition", "directives", "selection_set"],
        NodeKind::FragmentDefinition =>
            &["name", "type_condition", "directives", "selection_set"],

        NodeKind::IntValue
        | NodeKind::FloatValue
        | NodeKind::StringValue
        | NodeKind::BooleanValue
        | NodeKind::NullValue
        | NodeKind::EnumValue => &[],
        NodeKind::ListValue => &["values"],
        NodeKind::ObjectValue => &["fields"],
        NodeKind::ObjectField => &["name", "value"],

        NodeKind::Directive => &["name", "arguments"],

        NodeKind::NamedType => &["name"],
        NodeKind::ListType => &["type"],
        NodeKind::NonNullType => &["type"],

        NodeKind::SchemaDefinition => &["directives", "operation_types"],
        NodeKind::OperationTypeDefinition => &["type"],
        NodeKind::ScalarDefinition => &["name", "directives"],
        NodeKind::ObjectDefinition => &["name", "interfaces", "directives", "fields"],
        NodeKind::FieldDefinition => &["name", "arguments", "type", "directives"],
        NodeKind::InputValueDefinition =>
            &["name", "type", "default_value", "directives"],
        NodeKind::InterfaceDefinition => &["name", "directives", "fields"],
        NodeKind::UnionDefinition => &["name", "directives", "types"],
        NodeKind::EnumDefinition => &["name", "directives", "values"],
        NodeKind::EnumValueDefinition => &["name", "directives"],
        NodeKind::InputObjectDefinition => &["name", "directives", "fields"],
        NodeKind::TypeExtensionDefinition => &["definition"],
        NodeKind::DirectiveDefinition => &["name", "arguments", "locations"],
    }
}

pub(crate) fn keys_for(kind: NodeKind, key_map: Option<&KeyMap>) -> &[&'static str] {
    match key_map.and_then(|key_map| key_map.get(&kind)) {
        Some(keys) => keys,
        None => default_keys(kind),
    }
}
