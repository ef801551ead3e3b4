//! Renders an AST back into GraphQL source text.
//!
//! Output is normalized (two-space indentation, one selection per line,
//! comments dropped) and parses back into an equivalent AST.

use crate::ast;
use crate::visitor::visit;
use crate::visitor::Node;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::visitor::Visitor;

/// Prints any AST node (or a reference to one).
pub fn print<'a>(node: impl Into<Node<'a>>) -> String {
    let node: Node<'a> = node.into();
    let mut printer = Printer::default();
    visit(node, &mut printer, None);
    printer.output.pop().unwrap_or_default()
}

/// Prints a value literal, e.g. for `__InputValue.defaultValue`.
pub fn print_value(value: &ast::Value) -> String {
    print(value)
}

/// Builds the printed form bottom-up: each node's children are printed
/// before the node is left, so on leave the node's child strings are the
/// entries pushed since it was entered.
#[derive(Default)]
struct Printer {
    output: Vec<String>,
    marks: Vec<usize>,
}

/// The printed children of a node, consumed in visit order.
struct Parts(std::vec::IntoIter<String>);

impl Parts {
    fn one(&mut self) -> String {
        self.0.next().unwrap_or_default()
    }

    fn opt(&mut self, present: bool) -> String {
        if present {
            self.one()
        } else {
            String::new()
        }
    }

    fn many(&mut self, count: usize) -> Vec<String> {
        self.0.by_ref().take(count).collect()
    }
}

impl<'a> Visitor<'a> for Printer {
    fn enter(&mut self, _node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        self.marks.push(self.output.len());
        VisitAction::NoChange
    }

    fn leave(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        let mark = self.marks.pop().unwrap_or(self.output.len());
        let mut parts = Parts(self.output.split_off(mark).into_iter());
        let printed = print_node(node, &mut parts);
        self.output.push(printed);
        VisitAction::NoChange
    }
}

fn print_node(node: &Node<'_>, parts: &mut Parts) -> String {
    match node {
        Node::Name(name) => name.value.clone(),
        Node::Variable(_) => format!("${}", parts.one()),

        // =====================================================================
        // Executable documents
        // =====================================================================
        Node::Document(doc) => {
            let definitions = parts.many(doc.definitions.len());
            if definitions.is_empty() {
                return String::new();
            }
            format!("{}\n", join(&definitions, "\n\n"))
        },
        Node::OperationDefinition(op) => {
            let name = parts.opt(op.name.is_some());
            let variable_definitions = parts.many(op.variable_definitions.len());
            let directives = parts.many(op.directives.len());
            let selection_set = parts.one();
            if op.name.is_none()
                && op.variable_definitions.is_empty()
                && op.directives.is_empty()
                && op.operation == ast::OperationType::Query {
                return selection_set;
            }
            join(
                &[
                    op.operation.as_str().to_string(),
                    format!(
                        "{name}{}",
                        wrap("(", &join(&variable_definitions, ", "), ")"),
                    ),
                    join(&directives, " "),
                    selection_set,
                ],
                " ",
            )
        },
        Node::VariableDefinition(var_def) => {
            let variable = parts.one();
            let var_type = parts.one();
            let default_value = parts.opt(var_def.default_value.is_some());
            format!("{variable}: {var_type}{}", wrap(" = ", &default_value, ""))
        },
        Node::SelectionSet(selection_set) => {
            block(&parts.many(selection_set.selections.len()))
        },
        Node::Field(field) => {
            let alias = parts.opt(field.alias.is_some());
            let name = parts.one();
            let arguments = parts.many(field.arguments.len());
            let directives = parts.many(field.directives.len());
            let selection_set = parts.opt(field.selection_set.is_some());
            join(
                &[
                    format!(
                        "{}{name}{}",
                        wrap("", &alias, ": "),
                        wrap("(", &join(&arguments, ", "), ")"),
                    ),
                    join(&directives, " "),
                    selection_set,
                ],
                " ",
            )
        },
        Node::Argument(_) | Node::ObjectField(_) => {
            let name = parts.one();
            let value = parts.one();
            format!("{name}: {value}")
        },
        Node::FragmentSpread(spread) => {
            let name = parts.one();
            let directives = parts.many(spread.directives.len());
            format!("...{name}{}", wrap(" ", &join(&directives, " "), ""))
        },
        Node::InlineFragment(fragment) => {
            let type_condition = parts.opt(fragment.type_condition.is_some());
            let directives = parts.many(fragment.directives.len());
            let selection_set = parts.one();
            join(
                &[
                    "...".to_string(),
                    wrap("on ", &type_condition, ""),
                    join(&directives, " "),
                    selection_set,
                ],
                " ",
            )
        },
        Node::FragmentDefinition(fragment) => {
            let name = parts.one();
            let type_condition = parts.one();
            let directives = parts.many(fragment.directives.len());
            let selection_set = parts.one();
            format!(
                "fragment {name} on {type_condition} {}{selection_set}",
                wrap("", &join(&directives, " "), " "),
            )
        },

        // =====================================================================
        // Values
        // =====================================================================
        Node::IntValue(value) => value.value.clone(),
        Node::FloatValue(value) => value.value.clone(),
        Node::StringValue(value) => quote_string(&value.value),
        Node::BooleanValue(value) => value.value.to_string(),
        Node::NullValue(_) => "null".to_string(),
        Node::EnumValue(value) => value.value.clone(),
        Node::ListValue(list) => {
            format!("[{}]", join(&parts.many(list.values.len()), ", "))
        },
        Node::ObjectValue(object) => {
            format!("{{{}}}", join(&parts.many(object.fields.len()), ", "))
        },

        Node::Directive(directive) => {
            let name = parts.one();
            let arguments = parts.many(directive.arguments.len());
            format!("@{name}{}", wrap("(", &join(&arguments, ", "), ")"))
        },

        // =====================================================================
        // Type references
        // =====================================================================
        Node::NamedType(_) => parts.one(),
        Node::ListType(_) => format!("[{}]", parts.one()),
        Node::NonNullType(_) => format!("{}!", parts.one()),

        // =====================================================================
        // Type system definitions
        // =====================================================================
        Node::SchemaDefinition(schema) => {
            let directives = parts.many(schema.directives.len());
            let operation_types = parts.many(schema.operation_types.len());
            join(
                &["schema".to_string(), join(&directives, " "), block(&operation_types)],
                " ",
            )
        },
        Node::OperationTypeDefinition(op_type) => {
            format!("{}: {}", op_type.operation.as_str(), parts.one())
        },
        Node::ScalarDefinition(scalar) => {
            let name = parts.one();
            let directives = parts.many(scalar.directives.len());
            join(&["scalar".to_string(), name, join(&directives, " ")], " ")
        },
        Node::ObjectDefinition(object) => {
            let name = parts.one();
            let interfaces = parts.many(object.interfaces.len());
            let directives = parts.many(object.directives.len());
            let fields = parts.many(object.fields.len());
            join(
                &[
                    "type".to_string(),
                    name,
                    wrap("implements ", &join(&interfaces, " & "), ""),
                    join(&directives, " "),
                    block(&fields),
                ],
                " ",
            )
        },
        Node::FieldDefinition(field) => {
            let name = parts.one();
            let arguments = parts.many(field.arguments.len());
            let field_type = parts.one();
            let directives = parts.many(field.directives.len());
            format!(
                "{name}{}: {field_type}{}",
                wrap("(", &join(&arguments, ", "), ")"),
                wrap(" ", &join(&directives, " "), ""),
            )
        },
        Node::InputValueDefinition(input_value) => {
            let name = parts.one();
            let value_type = parts.one();
            let default_value = parts.opt(input_value.default_value.is_some());
            let directives = parts.many(input_value.directives.len());
            join(
                &[
                    format!("{name}: {value_type}"),
                    wrap("= ", &default_value, ""),
                    join(&directives, " "),
                ],
                " ",
            )
        },
        Node::InterfaceDefinition(interface) => {
            let name = parts.one();
            let directives = parts.many(interface.directives.len());
            let fields = parts.many(interface.fields.len());
            join(
                &["interface".to_string(), name, join(&directives, " "), block(&fields)],
                " ",
            )
        },
        Node::UnionDefinition(union) => {
            let name = parts.one();
            let directives = parts.many(union.directives.len());
            let types = parts.many(union.types.len());
            join(
                &[
                    "union".to_string(),
                    name,
                    join(&directives, " "),
                    format!("= {}", join(&types, " | ")),
                ],
                " ",
            )
        },
        Node::EnumDefinition(enum_def) => {
            let name = parts.one();
            let directives = parts.many(enum_def.directives.len());
            let values = parts.many(enum_def.values.len());
            join(
                &["enum".to_string(), name, join(&directives, " "), block(&values)],
                " ",
            )
        },
        Node::EnumValueDefinition(value) => {
            let name = parts.one();
            let directives = parts.many(value.directives.len());
            join(&[name, join(&directives, " ")], " ")
        },
        Node::InputObjectDefinition(input) => {
            let name = parts.one();
            let directives = parts.many(input.directives.len());
            let fields = parts.many(input.fields.len());
            join(
                &["input".to_string(), name, join(&directives, " "), block(&fields)],
                " ",
            )
        },
        Node::TypeExtensionDefinition(_) => format!("extend {}", parts.one()),
        Node::DirectiveDefinition(directive) => {
            let name = parts.one();
            let arguments = parts.many(directive.arguments.len());
            let locations = parts.many(directive.locations.len());
            format!(
                "directive @{name}{}{} on {}",
                wrap("(", &join(&arguments, ", "), ")"),
                if directive.repeatable { " repeatable" } else { "" },
                join(&locations, " | "),
            )
        },
    }
}

/// Joins the non-empty entries of `parts` with `separator`.
fn join(parts: &[String], separator: &str) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Surrounds `content` with `start` and `end`, or yields nothing if
/// `content` is empty.
fn wrap(start: &str, content: &str, end: &str) -> String {
    if content.is_empty() {
        String::new()
    } else {
        format!("{start}{content}{end}")
    }
}

/// A brace-delimited block with one indented entry per line.
fn block(entries: &[String]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let body = join(entries, "\n").replace('\n', "\n  ");
    format!("{{\n  {body}\n}}")
}

fn quote_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\u{8}' => quoted.push_str("\\b"),
            '\u{c}' => quoted.push_str("\\f"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            ch if (ch as u32) < 0x20 || ch == '\u{2028}' || ch == '\u{2029}' => {
                quoted.push_str(&format!("\\u{:04x}", ch as u32));
            },
            ch => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}
