use crate::ast;
use crate::ast::NodeKind;
use crate::parse;
use crate::print;
use crate::visitor::visit;
use crate::visitor::visit_in_parallel;
use crate::visitor::KeyMap;
use crate::visitor::NamedVisitFuncs;
use crate::visitor::Node;
use crate::visitor::NodeOrList;
use crate::visitor::PathKey;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::visitor::Visitor;
use crate::visitor::VisitorOptions;
use std::borrow::Cow;

fn describe(node: &Node<'_>) -> String {
    match node {
        Node::Name(name) => format!("Name {}", name.value),
        Node::Field(field) => format!("Field {}", field.name.value),
        other => other.kind().to_string(),
    }
}

/// Records enter/leave events, optionally skipping one field by name or
/// breaking on the first node of some kind.
#[derive(Default)]
struct Recorder {
    events: Vec<String>,
    skip_field: Option<&'static str>,
    break_on: Option<NodeKind>,
}

impl<'a> Visitor<'a> for Recorder {
    fn enter(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        self.events.push(format!("enter {}", describe(node)));
        if let (Some(skip), Node::Field(field)) = (self.skip_field, node)
            && field.name.value == skip {
            return VisitAction::Skip;
        }
        if self.break_on == Some(node.kind()) {
            return VisitAction::Break;
        }
        VisitAction::NoChange
    }

    fn leave(&mut self, node: &Node<'a>, _cx: &VisitContext<'_, 'a>) -> VisitAction<'a> {
        self.events.push(format!("leave {}", describe(node)));
        VisitAction::NoChange
    }
}

// =============================================================================
// Traversal order
// =============================================================================

/// Verifies that nodes are entered and left depth-first in key order, with
/// absent optional children skipped.
#[test]
fn enter_and_leave_order() {
    let doc = parse("{ a(x: 1) }").unwrap();
    let mut recorder = Recorder::default();
    let result = visit(Node::from(&doc), &mut recorder, None);
    assert_eq!(recorder.events, vec![
        "enter Document",
        "enter OperationDefinition",
        "enter SelectionSet",
        "enter Field a",
        "enter Name a",
        "leave Name a",
        "enter Argument",
        "enter Name x",
        "leave Name x",
        "enter IntValue",
        "leave IntValue",
        "leave Argument",
        "leave Field a",
        "leave SelectionSet",
        "leave OperationDefinition",
        "leave Document",
    ]);
    assert_eq!(result, Some(NodeOrList::One(Node::from(&doc))));
}

/// Verifies the key, parent, path and ancestors handed to callbacks.
#[test]
fn context_describes_position() {
    let doc = parse("{ a }").unwrap();
    let mut seen = vec![];
    visit(
        Node::from(&doc),
        VisitorOptions::new().on_enter_kind(NodeKind::Name, |_node, cx| {
            seen.push((
                cx.key,
                cx.path.to_vec(),
                cx.parent.and_then(NodeOrList::as_node).map(Node::kind),
                cx.ancestors.len(),
            ));
            VisitAction::NoChange
        }),
        None,
    );
    assert_eq!(seen, vec![(
        Some(PathKey::Key("name")),
        vec![
            PathKey::Key("definitions"),
            PathKey::Index(0),
            PathKey::Key("selection_set"),
            PathKey::Key("selections"),
            PathKey::Index(0),
            PathKey::Key("name"),
        ],
        Some(NodeKind::Field),
        // Document, definitions, operation, selection set, selections.
        5,
    )]);
}

#[test]
fn visits_a_list_root() {
    let doc = parse("{ a } { b }").unwrap();
    let roots: Vec<Node<'_>> = doc.definitions.iter().map(Node::from).collect();
    let mut recorder = Recorder::default();
    visit(roots, &mut recorder, None);
    let fields: Vec<_> = recorder
        .events
        .iter()
        .filter(|event| event.starts_with("enter Field"))
        .collect();
    assert_eq!(fields, ["enter Field a", "enter Field b"]);
}

#[test]
fn custom_key_map_limits_traversal() {
    let doc = parse("{ a(x: 1) }").unwrap();
    let mut key_map = KeyMap::new();
    key_map.insert(NodeKind::Field, vec!["name"]);
    let mut recorder = Recorder::default();
    visit(Node::from(&doc), &mut recorder, Some(&key_map));
    assert!(!recorder.events.iter().any(|event| event.contains("Argument")));
    assert!(recorder.events.iter().any(|event| event == "enter Name a"));
}

// =============================================================================
// Skip and break
// =============================================================================

#[test]
fn skip_prevents_descent() {
    let doc = parse("{ a { x } b }").unwrap();
    let mut recorder = Recorder {
        skip_field: Some("a"),
        ..Recorder::default()
    };
    visit(Node::from(&doc), &mut recorder, None);
    let events: Vec<_> = recorder
        .events
        .iter()
        .filter(|event| event.contains("Field"))
        .cloned()
        .collect();
    // A skipped node isn't left either.
    assert_eq!(events, ["enter Field a", "enter Field b", "leave Field b"]);
}

#[test]
fn break_stops_traversal() {
    let doc = parse("{ a b }").unwrap();
    let mut recorder = Recorder {
        break_on: Some(NodeKind::Name),
        ..Recorder::default()
    };
    let result = visit(Node::from(&doc), &mut recorder, None);
    assert_eq!(recorder.events.last().map(String::as_str), Some("enter Name a"));
    assert!(!recorder.events.iter().any(|event| event.starts_with("leave")));
    assert_eq!(result, Some(NodeOrList::One(Node::from(&doc))));
}

// =============================================================================
// Edits
// =============================================================================

fn edited_document(result: Option<NodeOrList<'_>>) -> ast::Document {
    let Some(NodeOrList::One(node)) = result else {
        panic!("expected a single root node");
    };
    ast::Document::try_from(node).unwrap()
}

/// Verifies that removing list elements shifts later siblings and leaves the
/// input untouched.
#[test]
fn remove_list_elements() {
    let doc = parse("{ a b c d }").unwrap();
    let result = visit(
        Node::from(&doc),
        VisitorOptions::new().on_leave_kind(NodeKind::Field, |node, _cx| {
            match node {
                Node::Field(field) if matches!(field.name.as_str(), "b" | "c") =>
                    VisitAction::Remove,
                _ => VisitAction::NoChange,
            }
        }),
        None,
    );
    let edited = edited_document(result);
    assert_eq!(print(&edited), "{\n  a\n  d\n}\n");
    assert_eq!(print(&doc), "{\n  a\n  b\n  c\n  d\n}\n");
}

/// Verifies that a node replaced on leave is written back into its parent.
#[test]
fn update_on_leave() {
    let doc = parse("{ a(x: 1) b }").unwrap();
    let result = visit(
        Node::from(&doc),
        VisitorOptions::new().on_leave_kind(NodeKind::IntValue, |node, _cx| {
            let Node::IntValue(value) = node else {
                return VisitAction::NoChange;
            };
            let doubled = value.value.parse::<i64>().unwrap_or(0) * 2;
            VisitAction::Update(Node::IntValue(Cow::Owned(ast::IntValue {
                value: doubled.to_string(),
                loc: None,
            })))
        }),
        None,
    );
    assert_eq!(print(&edited_document(result)), "{\n  a(x: 2)\n  b\n}\n");
}

/// Verifies that traversal descends into a node replaced on enter.
#[test]
fn update_on_enter_visits_replacement() {
    let doc = parse("{ a }").unwrap();
    let replacement = parse("{ b { c } }").unwrap();
    let ast::Selection::Field(replacement_field) =
        replacement.operations().next().unwrap().selection_set.selections[0].clone()
    else {
        panic!("expected a field");
    };

    let mut entered = vec![];
    let result = visit(
        Node::from(&doc),
        VisitorOptions::new().on_enter(|node, _cx| {
            entered.push(describe(node));
            match node {
                Node::Field(field) if field.name.as_str() == "a" =>
                    VisitAction::Update(Node::from(replacement_field.clone())),
                _ => VisitAction::NoChange,
            }
        }),
        None,
    );
    assert!(entered.contains(&"Field c".to_string()));
    assert!(!entered.contains(&"Name a".to_string()));
    assert_eq!(print(&edited_document(result)), "{\n  b {\n    c\n  }\n}\n");
}

/// Verifies that removing an optional child clears it.
#[test]
fn remove_optional_child() {
    let doc = parse("{ alias: a }").unwrap();
    let result = visit(
        Node::from(&doc),
        VisitorOptions::new().on_enter_kind(NodeKind::Name, |node, cx| {
            match (node, cx.key) {
                (Node::Name(_), Some(PathKey::Key("alias"))) => VisitAction::Remove,
                _ => VisitAction::NoChange,
            }
        }),
        None,
    );
    assert_eq!(print(&edited_document(result)), "{\n  a\n}\n");
}

#[test]
fn removing_the_root() {
    let doc = parse("{ a }").unwrap();
    let result = visit(
        Node::from(&doc),
        VisitorOptions::new().on_enter_kind(NodeKind::Document, |_, _| VisitAction::Remove),
        None,
    );
    assert_eq!(result, None);
}

// =============================================================================
// Callback selection
// =============================================================================

/// Verifies that the most specific registered callback is the one called.
#[test]
fn visitor_options_priority() {
    let doc = parse("{ a }").unwrap();
    let mut calls = vec![];
    {
        let calls = std::cell::RefCell::new(&mut calls);
        let options = VisitorOptions::new()
            .on_enter(|node, _| {
                calls.borrow_mut().push(format!("enter {}", node.kind()));
                VisitAction::NoChange
            })
            .on_enter_kind(NodeKind::SelectionSet, |_, _| {
                calls.borrow_mut().push("enter_kind SelectionSet".to_string());
                VisitAction::NoChange
            })
            .on_leave_kind(NodeKind::Field, |_, _| {
                calls.borrow_mut().push("leave_kind Field".to_string());
                VisitAction::NoChange
            })
            .on_kind(NodeKind::Field, NamedVisitFuncs::new().kind(|_, _| {
                calls.borrow_mut().push("kind Field".to_string());
                VisitAction::NoChange
            }))
            .on_kind(NodeKind::Name, NamedVisitFuncs::new().leave(|_, _| {
                calls.borrow_mut().push("named leave Name".to_string());
                VisitAction::NoChange
            }));
        visit(Node::from(&doc), options, None);
    }
    assert_eq!(calls, vec![
        "enter Document",
        "enter OperationDefinition",
        "enter_kind SelectionSet",
        "kind Field",
        "enter Name",
        "named leave Name",
        "leave_kind Field",
    ]);
}

// =============================================================================
// Parallel visiting
// =============================================================================

/// Verifies that a skip from one visitor doesn't affect the others, and
/// that the skipping visitor resumes after the skipped node.
#[test]
fn parallel_skip_is_per_visitor() {
    let doc = parse("{ a { x } b }").unwrap();
    let mut skipping = Recorder {
        skip_field: Some("a"),
        ..Recorder::default()
    };
    let mut full = Recorder::default();
    visit(
        Node::from(&doc),
        visit_in_parallel(vec![&mut skipping as &mut dyn Visitor<'_>, &mut full]),
        None,
    );

    assert!(!skipping.events.iter().any(|event| event.contains("Field x")));
    assert!(!skipping.events.iter().any(|event| event == "leave Field a"));
    assert!(skipping.events.iter().any(|event| event == "leave Field b"));
    assert!(full.events.iter().any(|event| event == "enter Field x"));
    assert!(full.events.iter().any(|event| event == "leave Field a"));
}

#[test]
fn parallel_break_is_per_visitor() {
    let doc = parse("{ a b }").unwrap();
    let mut breaking = Recorder {
        break_on: Some(NodeKind::Field),
        ..Recorder::default()
    };
    let mut full = Recorder::default();
    visit(
        Node::from(&doc),
        visit_in_parallel(vec![&mut breaking as &mut dyn Visitor<'_>, &mut full]),
        None,
    );
    assert_eq!(breaking.events.last().map(String::as_str), Some("enter Field a"));
    assert_eq!(full.events.last().map(String::as_str), Some("leave Document"));
    assert!(full.events.iter().any(|event| event == "enter Field b"));
}

// =============================================================================
// Depth
// =============================================================================

/// Verifies that very deep trees are traversed without recursion.
#[test]
fn deep_tree() {
    let depth = 5_000;
    let mut value = ast::Value::Int(ast::IntValue {
        value: "1".to_string(),
        loc: None,
    });
    for _ in 0..depth {
        value = ast::Value::List(ast::ListValue {
            values: vec![value],
            loc: None,
        });
    }

    let mut count = 0;
    visit(
        Node::from(&value),
        VisitorOptions::new().on_enter(|_, _| {
            count += 1;
            VisitAction::NoChange
        }),
        None,
    );
    assert_eq!(count, depth + 1);

    // Unwind iteratively so drop doesn't recurse either.
    let mut stack = vec![value];
    while let Some(value) = stack.pop() {
        if let ast::Value::List(list) = value {
            stack.extend(list.values);
        }
    }
}
