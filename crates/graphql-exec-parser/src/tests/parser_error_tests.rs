use crate::parse;
use crate::ParseParams;
use crate::Source;
use crate::SourceLocation;

fn parse_error_description(body: &str) -> String {
    parse(body).unwrap_err().description().to_string()
}

// =============================================================================
// Messages
// =============================================================================

#[test]
fn unexpected_tokens() {
    let cases = [
        ("{", "Expected Name, found EOF"),
        ("{ ...MissingOn }\nfragment MissingOn Type", "Expected \"on\", found Name \"Type\""),
        ("{ field: {} }", "Expected Name, found {"),
        ("notanoperation Foo { field }", "Unexpected Name \"notanoperation\""),
        ("...", "Unexpected ..."),
        ("{ a(b) }", "Expected :, found )"),
        ("query Q {}", "Expected Name, found }"),
        ("{ a(b: ) }", "Unexpected )"),
        ("\"a string\"", "Unexpected String \"a string\""),
    ];
    for (body, description) in cases {
        assert_eq!(parse_error_description(body), description, "{body}");
    }
}

/// Verifies that variables are rejected where only constants are allowed.
#[test]
fn variables_rejected_in_const_positions() {
    let cases = [
        "query Foo($x: Complex = { a: { b: [ $var ] } }) { field }",
        "query Foo($x: Int = $y) { field }",
        "type T { f(a: Int = $v): Int }",
        "type T @dir(a: $v) { f: Int }",
    ];
    for body in cases {
        assert_eq!(parse_error_description(body), "Unexpected $", "{body}");
    }
}

/// Verifies that `on` can't be used as a fragment name.
#[test]
fn fragment_named_on() {
    assert_eq!(
        parse_error_description("fragment on on on { on }"),
        "Unexpected Name \"on\"",
    );
    assert_eq!(
        parse_error_description("{ ...on }"),
        "Expected Name, found }",
    );
}

#[test]
fn lexer_errors_surface_through_parse() {
    assert_eq!(
        parse_error_description("{ a(s: \"unterminated) }"),
        "Unterminated string.",
    );
}

// =============================================================================
// Formatting
// =============================================================================

/// Verifies the full message format: name, location, description and the
/// caret-highlighted source line.
#[test]
fn message_highlights_single_line() {
    let err = parse("{ a(b) }").unwrap_err();
    assert_eq!(err.location(), SourceLocation::new(1, 6));
    assert_eq!(err.position(), 5);
    assert_eq!(err.source_name(), "GraphQL");
    assert_eq!(
        err.message(),
        "Syntax Error GraphQL (1:6) Expected :, found )\n\n1: { a(b) }\n        ^\n",
    );
    assert_eq!(err.to_string(), err.message());
}

/// Verifies that the surrounding lines are shown with aligned line numbers.
#[test]
fn message_highlights_neighbor_lines() {
    let source = Source::new("\n{\n  field(\n}\n", Some("MyQuery.graphql"));
    let err = parse(ParseParams::new(source)).unwrap_err();
    assert_eq!(err.location(), SourceLocation::new(4, 1));
    assert_eq!(
        err.message(),
        "Syntax Error MyQuery.graphql (4:1) Expected Name, found }\n\n\
         3:   field(\n\
         4: }\n   ^\n\
         5: \n",
    );
}

#[test]
fn message_pads_line_numbers() {
    let body = format!("{}{{ a(b) }}", "\n".repeat(8));
    let err = parse(body.as_str()).unwrap_err();
    assert_eq!(err.location(), SourceLocation::new(9, 6));
    assert_eq!(
        err.message(),
        "Syntax Error GraphQL (9:6) Expected :, found )\n\n 8: \n 9: { a(b) }\n         ^\n",
    );
}
