//! Typed AST for GraphQL documents.
//!
//! Every node is a plain owned struct carrying an optional [`Loc`]. Nodes
//! are grouped by the [`Definition`], [`Selection`], [`Value`] and [`Type`]
//! enums, and every node (and every grouping enum) implements [`AstNode`]
//! for uniform access to its [`NodeKind`] discriminator and location.
//!
//! # Example
//!
//! ```rust
//! use graphql_exec_parser::ast;
//! use graphql_exec_parser::parse;
//! use graphql_exec_parser::ParseParams;
//!
//! let doc = parse(ParseParams::from("query Q { hello }")).unwrap();
//! let ast::Definition::Operation(op) = &doc.definitions[0] else {
//!     panic!("expected an operation");
//! };
//! assert_eq!(op.kind(), ast::NodeKind::OperationDefinition);
//! assert_eq!(op.name.as_ref().unwrap().value, "Q");
//! ```

mod argument;
mod ast_node;
mod boolean_value;
mod definition;
mod directive;
mod directive_definition;
mod document;
mod enum_definition;
mod enum_value;
mod enum_value_definition;
mod field;
mod field_definition;
mod float_value;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod input_object_definition;
mod input_value_definition;
mod int_value;
mod interface_definition;
mod list_type;
mod list_value;
mod loc;
mod name;
mod named_type;
mod node_kind;
mod non_null_type;
mod null_value;
mod object_definition;
mod object_field;
mod object_value;
mod operation_definition;
mod operation_type;
mod operation_type_definition;
mod scalar_definition;
mod schema_definition;
mod selection;
mod selection_set;
mod string_value;
mod type_extension_definition;
mod type_ref;
mod union_definition;
mod value;
mod variable;
mod variable_definition;

pub use argument::Argument;
pub use ast_node::AstNode;
pub use boolean_value::BooleanValue;
pub use definition::Definition;
pub use directive::Directive;
pub use directive_definition::DirectiveDefinition;
pub use document::Document;
pub use enum_definition::EnumDefinition;
pub use enum_value::EnumValue;
pub use enum_value_definition::EnumValueDefinition;
pub use field::Field;
pub use field_definition::FieldDefinition;
pub use float_value::FloatValue;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use input_object_definition::InputObjectDefinition;
pub use input_value_definition::InputValueDefinition;
pub use int_value::IntValue;
pub use interface_definition::InterfaceDefinition;
pub use list_type::ListType;
pub use list_value::ListValue;
pub use loc::Loc;
pub use name::Name;
pub use named_type::NamedType;
pub use node_kind::NodeKind;
pub use non_null_type::NonNullType;
pub use null_value::NullValue;
pub use object_definition::ObjectDefinition;
pub use object_field::ObjectField;
pub use object_value::ObjectValue;
pub use operation_definition::OperationDefinition;
pub use operation_type::OperationType;
pub use operation_type_definition::OperationTypeDefinition;
pub use scalar_definition::ScalarDefinition;
pub use schema_definition::SchemaDefinition;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use string_value::StringValue;
pub use type_extension_definition::TypeExtensionDefinition;
pub use type_ref::Type;
pub use union_definition::UnionDefinition;
pub use value::Value;
pub use variable::Variable;
pub use variable_definition::VariableDefinition;
