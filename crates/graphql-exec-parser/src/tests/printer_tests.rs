use crate::ast;
use crate::parse;
use crate::parse_type;
use crate::parse_value;
use crate::print;
use crate::print_value;
use crate::tests::utils::parse_without_locations;
use proptest::prelude::*;

const QUERY_KITCHEN_SINK: &str = r#"query Q($id: ID!, $list: [Int] = [1, 2]) @dir {
  alias: field(a: 1, b: "s\"", c: {x: ENUM, y: null, z: -1.5e3}) @include(if: $c) {
    ...Frag
    ... on User {
      id
    }
    ... @skip(if: true) {
      name
    }
  }
}

mutation {
  like(story: 123) @defer {
    story {
      id
    }
  }
}

subscription S {
  event
}

fragment Frag on Query @d {
  viewer
}
"#;

const SCHEMA_KITCHEN_SINK: &str = r#"schema {
  query: Query
  mutation: Mutation
}

type Foo implements Bar & Baz @obj {
  one: Type
  two(argument: InputType!): Type
  three(argument: InputType, other: String): Int
  four(argument: String = "string"): String
  five(argument: [String] = ["string", "string"]): String @deprecated(reason: "gone")
  six(argument: InputType = {key: "value"}): Type
}

type Empty

interface Bar {
  one: Type
}

union Feed = Story | Article | Advert

scalar CustomScalar @s

enum Site {
  DESKTOP
  MOBILE @deprecated
}

input InputType {
  key: String!
  answer: Int = 42
}

extend type Foo {
  seven(argument: [String]): Type
}

directive @skip(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT

directive @cost(value: Int = 1) repeatable on FIELD_DEFINITION
"#;

// =============================================================================
// Canonical output
// =============================================================================

/// Verifies that already-canonical query text prints back unchanged.
#[test]
fn prints_query_kitchen_sink() {
    let doc = parse(QUERY_KITCHEN_SINK).unwrap();
    assert_eq!(print(&doc), QUERY_KITCHEN_SINK);
}

/// Verifies that already-canonical SDL prints back unchanged.
#[test]
fn prints_schema_kitchen_sink() {
    let doc = parse(SCHEMA_KITCHEN_SINK).unwrap();
    assert_eq!(print(&doc), SCHEMA_KITCHEN_SINK);
}

/// Verifies that formatting differences and comments are normalized away.
#[test]
fn normalizes_whitespace() {
    let doc = parse(
        "query   Q ( $a : Int=1 ) {  # comment\n a ( x : [ 1 , 2 ] ) , b{c}}",
    ).unwrap();
    assert_eq!(
        print(&doc),
        "query Q($a: Int = 1) {\n  a(x: [1, 2])\n  b {\n    c\n  }\n}\n",
    );
}

/// Verifies that a query keeps its keyword when it has variables but no
/// name.
#[test]
fn anonymous_query_with_variables() {
    let doc = parse("query ($a: Int) { a }").unwrap();
    assert_eq!(print(&doc), "query ($a: Int) {\n  a\n}\n");
    assert_eq!(parse_without_locations(&print(&doc)), parse_without_locations("query ($a: Int) { a }"));
}

#[test]
fn prints_individual_nodes() {
    let doc = parse("{ a(x: 1) { b } }").unwrap();
    let ast::Definition::Operation(op) = &doc.definitions[0] else {
        panic!("expected an operation");
    };
    let ast::Selection::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field");
    };
    assert_eq!(print(field), "a(x: 1) {\n  b\n}");
    assert_eq!(print(&field.arguments[0]), "x: 1");
    assert_eq!(print(&parse_type("[Int!]!").unwrap()), "[Int!]!");
}

/// Verifies that control characters and line separators print as escapes.
#[test]
fn string_escapes() {
    let value = parse_value(r#""quote \" slash \\ \n\t \u0001 \u2028 \u2029 é""#).unwrap();
    let printed = print_value(&value);
    assert_eq!(printed, r#""quote \" slash \\ \n\t \u0001 \u2028 \u2029 é""#);
    assert!(!printed.contains('\u{2028}'), "{printed}");
}

/// Verifies that a document without definitions prints as empty text.
#[test]
fn empty_document() {
    let doc = ast::Document {
        definitions: vec![],
        loc: None,
    };
    assert_eq!(print(&doc), "");
}

// =============================================================================
// Round trip
// =============================================================================

fn string_literal() -> impl Strategy<Value = String> {
    "[a-z \"\\\\\n]{0,6}".prop_map(|content| {
        let escaped = content
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n");
        format!("\"{escaped}\"")
    })
}

fn value_text() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        "-?[1-9][0-9]{0,4}",
        "-?[0-9]\\.[0-9]{1,2}(e[0-9])?",
        string_literal(),
        Just("true".to_string()),
        Just("false".to_string()),
        Just("null".to_string()),
        "[A-Z][A-Z_]{0,3}",
        "\\$[a-z]{1,3}",
    ];
    leaf.prop_recursive(3, 16, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3)
                .prop_map(|values| format!("[{}]", values.join(", "))),
            prop::collection::vec(("[a-z]{1,3}", inner), 0..3).prop_map(|fields| {
                let fields: Vec<_> = fields
                    .into_iter()
                    .map(|(name, value)| format!("{name}: {value}"))
                    .collect();
                format!("{{{}}}", fields.join(", "))
            }),
        ]
    })
}

fn field_head() -> impl Strategy<Value = String> {
    (
        prop::option::of("[a-z]{1,4}"),
        "[a-z][a-zA-Z0-9_]{0,5}",
        prop::collection::vec(("[a-z]{1,3}", value_text()), 0..3),
        prop::option::of(prop::sample::select(vec!["@include(if: $v)", "@skip(if: false)", "@x"])),
    )
        .prop_map(|(alias, name, args, directive)| {
            let mut head = String::new();
            if let Some(alias) = alias {
                head.push_str(&format!("{alias}: "));
            }
            head.push_str(&name);
            if !args.is_empty() {
                let args: Vec<_> = args
                    .into_iter()
                    .map(|(name, value)| format!("{name}: {value}"))
                    .collect();
                head.push_str(&format!("({})", args.join(", ")));
            }
            if let Some(directive) = directive {
                head.push_str(&format!(" {directive}"));
            }
            head
        })
}

fn selection_set() -> impl Strategy<Value = String> {
    let leaf = prop::collection::vec(field_head(), 1..4)
        .prop_map(|fields| format!("{{ {} }}", fields.join(" ")));
    leaf.prop_recursive(4, 24, 4, |inner| {
        let selection = prop_oneof![
            (field_head(), prop::option::of(inner.clone())).prop_map(|(head, sub)| {
                match sub {
                    Some(sub) => format!("{head} {sub}"),
                    None => head,
                }
            }),
            inner.clone().prop_map(|sub| format!("... on T {sub}")),
            inner.prop_map(|sub| format!("... @include(if: true) {sub}")),
            Just("...Frag".to_string()),
        ];
        prop::collection::vec(selection, 1..4)
            .prop_map(|selections| format!("{{ {} }}", selections.join(" ")))
    })
}

fn document_text() -> impl Strategy<Value = String> {
    let header = prop::sample::select(vec![
        "",
        "query Q",
        "query Q($a: Int = 1, $b: [String!]!)",
        "mutation M @dir",
        "subscription",
    ]);
    (header, selection_set(), prop::option::of(selection_set())).prop_map(
        |(header, selections, fragment)| {
            let mut doc = format!("{header} {selections}");
            if let Some(fragment) = fragment {
                doc.push_str(&format!("\nfragment Frag on T {fragment}"));
            }
            doc
        },
    )
}

proptest! {
    /// Printing a parsed document and parsing the output again yields the
    /// same AST, and printing is idempotent.
    #[test]
    fn print_round_trips(text in document_text()) {
        let parsed = parse_without_locations(&text);
        let printed = print(&parsed);
        let reparsed = parse_without_locations(&printed);
        prop_assert_eq!(&reparsed, &parsed);
        prop_assert_eq!(print(&reparsed), printed);
    }
}
