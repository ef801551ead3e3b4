use crate::ast;
use crate::parse;

fn parse_definitions(body: &str) -> Vec<ast::Definition> {
    parse(body).unwrap().definitions
}

#[test]
fn object_type_with_fields_and_arguments() {
    let defs = parse_definitions(
        "type Hello implements Node & Greeter {
            world(flag: Boolean = true, names: [String!]! @deprecated): String!
            id: ID
        }",
    );
    let [ast::Definition::Object(object)] = defs.as_slice() else {
        panic!("expected one object type, got {defs:?}");
    };
    assert_eq!(object.name.as_str(), "Hello");
    let interfaces: Vec<_> = object.interfaces.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(interfaces, ["Node", "Greeter"]);
    assert_eq!(object.fields.len(), 2);

    let world = &object.fields[0];
    assert_eq!(world.field_type.to_string(), "String!");
    assert_eq!(world.arguments.len(), 2);
    assert!(matches!(
        world.arguments[0].default_value,
        Some(ast::Value::Boolean(ast::BooleanValue { value: true, .. })),
    ));
    assert_eq!(world.arguments[1].directives[0].name.as_str(), "deprecated");
}

/// Verifies the older comma/space separated `implements` list.
#[test]
fn implements_without_ampersand() {
    for body in ["type T implements A, B { f: Int }", "type T implements A B { f: Int }"] {
        let defs = parse_definitions(body);
        let ast::Definition::Object(object) = &defs[0] else {
            panic!("expected an object type");
        };
        let names: Vec<_> = object.interfaces.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["A", "B"], "{body}");
    }
}

/// Verifies that an object type may omit its field block.
#[test]
fn object_type_without_fields() {
    let defs = parse_definitions("type Empty @tag");
    let ast::Definition::Object(object) = &defs[0] else {
        panic!("expected an object type");
    };
    assert!(object.fields.is_empty());
    assert_eq!(object.directives.len(), 1);
}

#[test]
fn other_type_definitions() {
    let defs = parse_definitions(
        "scalar DateTime
         interface Node { id: ID! }
         union SearchResult = | Photo | Person
         enum Color { RED GREEN @deprecated(reason: \"no\") BLUE }
         input Point { x: Float = 0, y: Float }
         extend type Query { extra: Int }",
    );
    let kinds: Vec<_> = defs.iter().map(|def| def.kind()).collect();
    assert_eq!(kinds, vec![
        ast::NodeKind::ScalarDefinition,
        ast::NodeKind::InterfaceDefinition,
        ast::NodeKind::UnionDefinition,
        ast::NodeKind::EnumDefinition,
        ast::NodeKind::InputObjectDefinition,
        ast::NodeKind::TypeExtensionDefinition,
    ]);
    assert!(defs.iter().all(|def| !def.is_executable()));

    let ast::Definition::Union(union_def) = &defs[2] else { unreachable!() };
    let members: Vec<_> = union_def.types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(members, ["Photo", "Person"]);

    let ast::Definition::Enum(enum_def) = &defs[3] else { unreachable!() };
    let values: Vec<_> = enum_def.values.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(values, ["RED", "GREEN", "BLUE"]);
    assert_eq!(enum_def.values[1].directives.len(), 1);

    let ast::Definition::InputObject(input) = &defs[4] else { unreachable!() };
    assert_eq!(input.fields.len(), 2);
    assert!(input.fields[0].default_value.is_some());

    let ast::Definition::TypeExtension(extension) = &defs[5] else { unreachable!() };
    assert_eq!(extension.definition.name.as_str(), "Query");
}

#[test]
fn schema_and_directive_definitions() {
    let defs = parse_definitions(
        "schema { query: Q mutation: M }
         directive @cost(value: Int = 1) repeatable on FIELD_DEFINITION | OBJECT
         directive @flag on | FIELD",
    );
    let ast::Definition::Schema(schema) = &defs[0] else {
        panic!("expected a schema definition");
    };
    let roots: Vec<_> = schema
        .operation_types
        .iter()
        .map(|op| (op.operation, op.named_type.name.as_str()))
        .collect();
    assert_eq!(roots, [
        (ast::OperationType::Query, "Q"),
        (ast::OperationType::Mutation, "M"),
    ]);

    let ast::Definition::Directive(cost) = &defs[1] else {
        panic!("expected a directive definition");
    };
    assert_eq!(cost.name.as_str(), "cost");
    assert!(cost.repeatable);
    assert_eq!(cost.arguments.len(), 1);
    let locations: Vec<_> = cost.locations.iter().map(ast::Name::as_str).collect();
    assert_eq!(locations, ["FIELD_DEFINITION", "OBJECT"]);

    let ast::Definition::Directive(flag) = &defs[2] else {
        panic!("expected a directive definition");
    };
    assert!(!flag.repeatable);
    assert_eq!(flag.locations.len(), 1);
}

/// Verifies that executable and type system definitions may share a
/// document.
#[test]
fn mixed_document() {
    let defs = parse_definitions("type Query { a: Int } { a }");
    assert!(!defs[0].is_executable());
    assert!(defs[1].is_executable());
}

#[test]
fn schema_errors() {
    let cases = [
        ("type T { f }", "Expected :, found }"),
        ("union U = ", "Expected Name, found EOF"),
        ("enum E {}", "Expected Name, found }"),
        ("schema { query Q }", "Expected :, found Name \"Q\""),
        ("schema { other: Q }", "Unexpected Name \"other\""),
        ("directive @d", "Expected \"on\", found EOF"),
        ("extend scalar S", "Expected \"type\", found Name \"scalar\""),
    ];
    for (body, description) in cases {
        assert_eq!(parse(body).unwrap_err().description(), description, "{body}");
    }
}
