use crate::Source;
use crate::SourceLocation;
use crate::DEFAULT_SOURCE_NAME;

/// Verifies that a source created without a name uses the default name.
#[test]
fn default_name() {
    let source = Source::from("{ a }");
    assert_eq!(source.name(), DEFAULT_SOURCE_NAME);
    assert_eq!(source.name(), "GraphQL");

    let named = Source::new("{ a }", Some("query.graphql"));
    assert_eq!(named.name(), "query.graphql");
}

/// Verifies that offsets map to 1-based line and column numbers.
#[test]
fn location_at_single_and_multiple_lines() {
    let source = Source::from("ab\ncd");
    assert_eq!(source.location_at(0), SourceLocation::new(1, 1));
    assert_eq!(source.location_at(1), SourceLocation::new(1, 2));
    assert_eq!(source.location_at(3), SourceLocation::new(2, 1));
    assert_eq!(source.location_at(4), SourceLocation::new(2, 2));
}

/// Verifies that `\r\n` counts as a single line terminator while lone `\r`
/// and the unicode separators each start a new line.
#[test]
fn location_at_mixed_line_terminators() {
    let source = Source::from("a\r\nb\rc\u{2028}d");
    assert_eq!(source.location_at(3), SourceLocation::new(2, 1));
    assert_eq!(source.location_at(5), SourceLocation::new(3, 1));
    // U+2028 is 3 bytes long.
    assert_eq!(source.location_at(9), SourceLocation::new(4, 1));
}

/// Verifies that columns count characters rather than bytes.
#[test]
fn location_at_counts_chars() {
    let source = Source::from("\"é\" x");
    // `x` is at byte 5 (é is 2 bytes) but is the 5th char.
    assert_eq!(source.location_at(5), SourceLocation::new(1, 5));
}

/// Verifies that offsets beyond the body clamp to its end.
#[test]
fn location_at_past_end() {
    let source = Source::from("abc");
    assert_eq!(source.location_at(100), SourceLocation::new(1, 4));
}

#[test]
fn lines_splits_on_all_terminators() {
    let source = Source::from("a\r\nb\nc\rd\u{2029}e");
    assert_eq!(source.lines(), vec!["a", "b", "c", "d", "e"]);
    assert_eq!(Source::from("").lines(), vec![""]);
    assert_eq!(Source::from("x\n").lines(), vec!["x", ""]);
}

#[test]
fn source_location_display() {
    assert_eq!(SourceLocation::new(3, 14).to_string(), "3:14");
}
