//! Depth-first AST traversal with enter/leave callbacks that can skip
//! subtrees, stop early, or edit the tree.
//!
//! ```rust
//! use graphql_exec_parser::ast::NodeKind;
//! use graphql_exec_parser::parse;
//! use graphql_exec_parser::visitor::visit;
//! use graphql_exec_parser::visitor::Node;
//! use graphql_exec_parser::visitor::VisitAction;
//! use graphql_exec_parser::visitor::VisitorOptions;
//!
//! let document = parse("{ a { b } c }").unwrap();
//! let mut field_names = vec![];
//! visit(
//!     Node::from(&document),
//!     VisitorOptions::new().on_enter_kind(NodeKind::Field, |node, _cx| {
//!         if let Node::Field(field) = node {
//!             field_names.push(field.name.value.clone());
//!         }
//!         VisitAction::NoChange
//!     }),
//!     None,
//! );
//! assert_eq!(field_names, ["a", "b", "c"]);
//! ```

mod key_map;
mod node;
mod node_children;
mod node_or_list;
mod parallel_visitor;
mod path_key;
mod visit;
mod visit_action;
mod visit_context;
mod visitor_options;

pub use key_map::default_keys;
pub use key_map::KeyMap;
pub use node::Node;
pub use node_or_list::NodeOrList;
pub use parallel_visitor::visit_in_parallel;
pub use parallel_visitor::ParallelVisitor;
pub use path_key::PathKey;
pub use visit::visit;
pub use visit::Visitor;
pub use visit_action::VisitAction;
pub use visit_context::VisitContext;
pub use visitor_options::NamedVisitFuncs;
pub use visitor_options::VisitFn;
pub use visitor_options::VisitorOptions;
