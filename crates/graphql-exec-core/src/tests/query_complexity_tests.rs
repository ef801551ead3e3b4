use crate::query_complexity;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::tests::utils::fragment_chain;
use crate::tests::utils::parse_doc;
use crate::types::Field;
use crate::types::InterfaceTypeBuilder;
use crate::types::ObjectTypeBuilder;
use crate::types::TypeAnnotation;
use crate::ExecuteParams;
use std::sync::Arc;

fn named(name: &str) -> TypeAnnotation {
    TypeAnnotation::named(name)
}

/// `Query.node` (cost 1) returns `Node`; `Post.title` costs 2,
/// `Post.author` 3, `User.name` 5 and `Query.free` nothing.
fn costed_schema() -> Arc<Schema> {
    let node = InterfaceTypeBuilder::new("Node")
        .field(Field::new("id", named("ID")).with_cost(1));
    let post = ObjectTypeBuilder::new("Post")
        .interface("Node")
        .field(Field::new("id", named("ID")).with_cost(1))
        .field(Field::new("title", named("String")).with_cost(2))
        .field(Field::new("author", named("User")).with_cost(3));
    let user = ObjectTypeBuilder::new("User")
        .interface("Node")
        .field(Field::new("id", named("ID")).with_cost(1))
        .field(Field::new("name", named("String")).with_cost(5));
    let query = ObjectTypeBuilder::new("Query")
        .field(Field::new("node", named("Node")).with_cost(1))
        .field(Field::new("post", named("Post")).with_cost(1))
        .field(Field::new("free", named("Int")));
    let schema = SchemaBuilder::new()
        .query(query)
        .register_type(node)
        .register_type(post)
        .register_type(user)
        .build()
        .unwrap();
    Arc::new(schema)
}

fn complexity(body: &str) -> u64 {
    let params = ExecuteParams::new(costed_schema(), Arc::new(parse_doc(body)));
    query_complexity(&params).unwrap()
}

#[test]
fn sums_nested_field_costs() {
    assert_eq!(complexity("{ free }"), 0);
    assert_eq!(complexity("{ post { title } }"), 3);
    assert_eq!(complexity("{ post { title author { name } } }"), 11);
}

/// Verifies that a fragment is counted once per spread.
#[test]
fn counts_fragments_per_spread() {
    let body = "{ post { ...T ...T author { name } } } fragment T on Post { title }";
    assert_eq!(complexity(body), 1 + 2 + 2 + 3 + 5);
}

/// Verifies that inline fragments on an interface only count when they
/// name an implementation.
#[test]
fn interface_inline_fragments() {
    assert_eq!(complexity("{ node { id ... on Post { title } } }"), 1 + 1 + 2);
    assert_eq!(complexity("{ node { ... on Query { free } } }"), 1);
    assert_eq!(complexity("{ node { ... { id } } }"), 2);
}

/// Verifies that unknown fields cost nothing and a missing operation is
/// an error.
#[test]
fn unknown_fields_and_operations() {
    assert_eq!(complexity("{ nope post { nope } }"), 1);

    let params = ExecuteParams::new(costed_schema(), Arc::new(parse_doc("query A { free }")))
        .with_operation_name("B");
    assert!(query_complexity(&params).is_err());
}

/// Verifies that a cyclic spread terminates.
#[test]
fn cyclic_fragments_terminate() {
    let body = "{ post { ...A } } fragment A on Post { title ...B } fragment B on Post { ...A }";
    assert_eq!(complexity(body), 1 + 2);
}

/// Verifies that a long chain of fragment spreads is costed.
#[test]
fn long_fragment_chain() {
    let body = format!("{{ post {{ ...F0 }} }}\n{}", fragment_chain(20_000, "Post", "title"));
    assert_eq!(complexity(&body), 1 + 2);
}

/// Verifies that fragments spread repeatedly at every level are costed
/// without walking each spread path.
#[test]
fn repeated_spreads_multiply() {
    let mut body = String::from("{ post { ...F0 } }\n");
    for i in 0..40 {
        body.push_str(&format!("fragment F{i} on Post {{ ...F{next} ...F{next} }}\n", next = i + 1));
    }
    body.push_str("fragment F40 on Post { title }\n");
    assert_eq!(complexity(&body), 1 + 2u64.pow(41));
}
