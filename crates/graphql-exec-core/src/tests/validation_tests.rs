use crate::tests::utils::assert_rule_passes;
use crate::tests::utils::fragment_chain;
use crate::tests::utils::parse_doc;
use crate::tests::utils::pets_schema;
use crate::tests::utils::rule_errors;
use crate::tests::utils::validate_pets;
use crate::validation::specified_rules;
use crate::validation::validate;
use crate::validation::ValidationRule;

fn error(message: &str, locations: &[(usize, usize)]) -> (String, Vec<(usize, usize)>) {
    (message.to_string(), locations.to_vec())
}

// =============================================================================
// Runner
// =============================================================================

/// Verifies that a document exercising fragments, variables, directives
/// and abstract types passes every rule.
#[test]
fn valid_document_passes_all_rules() {
    let errors = validate_pets(r#"
        query Q($atOtherHomes: Boolean = true, $cmd: DogCommand) @onQuery {
          dog {
            ...DogFields
            isHousetrained(atOtherHomes: $atOtherHomes)
            doesKnowCommand(dogCommand: $cmd) @include(if: true)
          }
          catOrDog {
            __typename
            ... on Cat { meows }
            ... on Dog { barks }
          }
          pet { name @onField }
          complicatedArgs {
            multipleOptAndReq(req1: 1, req2: 2)
            complexArgField(complexArg: { requiredField: true, stringListField: ["a"] })
          }
        }

        fragment DogFields on Dog {
          name
          nickname
        }
    "#);
    assert!(errors.is_empty(), "unexpected errors: {errors:#?}");
}

/// Verifies that the specified rule list has all 24 rules, each named once.
#[test]
fn specified_rules_are_complete() {
    let rules = specified_rules();
    assert_eq!(rules.len(), 24);
    let mut names: Vec<&str> = rules.iter().map(|rule| rule.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 24);
}

/// Verifies that passing an explicit rule list runs only those rules.
#[test]
fn explicit_rule_list_limits_checks() {
    let rules: Vec<ValidationRule> = specified_rules()
        .iter()
        .filter(|rule| rule.name == "NoUnusedFragments")
        .cloned()
        .collect();
    let document = parse_doc("{ dog { meowVolume } } fragment F on Dog { name }");
    let errors = validate(&pets_schema(), &document, Some(rules.as_slice()));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].rule, "NoUnusedFragments");
}

/// Verifies that validating the same document twice yields the same
/// errors in the same order.
#[test]
fn validation_is_deterministic() {
    let body = "query Q($u: Int) { dog { meowVolume ...Missing } cat { name: meows } }";
    assert_eq!(validate_pets(body), validate_pets(body));
}

// =============================================================================
// Arguments and values
// =============================================================================

#[test]
fn arguments_of_correct_type() {
    assert_eq!(
        rule_errors("ArgumentsOfCorrectType", "{ dog { doesKnowCommand(dogCommand: 3) } }"),
        vec![error("Argument \"dogCommand\" expected type \"DogCommand\" but got: 3.", &[(1, 37)])],
    );
    assert_eq!(
        rule_errors(
            "ArgumentsOfCorrectType",
            "{ complicatedArgs { stringArgField(stringArg: 1) } }",
        ),
        vec![error("Argument \"stringArg\" expected type \"String\" but got: 1.", &[(1, 47)])],
    );
    assert_rule_passes(
        "ArgumentsOfCorrectType",
        "{ complicatedArgs { floatArgField(floatArg: 1) idArgField(idArg: 1) } }",
    );
}

/// Verifies that an input object literal missing a required field is
/// rejected.
#[test]
fn arguments_of_correct_type_checks_input_objects() {
    let errors = rule_errors(
        "ArgumentsOfCorrectType",
        "{ complicatedArgs { complexArgField(complexArg: { intField: 4 }) } }",
    );
    assert_eq!(errors.len(), 1);
    assert!(errors[0].0.starts_with("Argument \"complexArg\" expected type \"ComplexInput\""));
}

#[test]
fn default_values_of_correct_type() {
    assert_eq!(
        rule_errors("DefaultValuesOfCorrectType", "query Q($a: Int! = 1) { dog { name } }"),
        vec![error(
            "Variable \"$a\" of type \"Int!\" is required and will not use the default value. \
             Perhaps you meant to use type \"Int\".",
            &[(1, 20)],
        )],
    );
    assert_eq!(
        rule_errors(
            "DefaultValuesOfCorrectType",
            "query Q($a: Int = \"one\") { complicatedArgs { intArgField(intArg: $a) } }",
        ),
        vec![error("Variable \"$a\" of type \"Int\" has invalid default value: \"one\".", &[(1, 19)])],
    );
    assert_rule_passes(
        "DefaultValuesOfCorrectType",
        "query Q($a: Int = 1, $b: [String] = [\"x\"]) { dog { name } }",
    );
}

#[test]
fn known_argument_names() {
    assert_eq!(
        rule_errors(
            "KnownArgumentNames",
            "{ dog { isHousetrained(atOtherHomes: true, unknown: 1) } }",
        ),
        vec![error(
            "Unknown argument \"unknown\" on field \"isHousetrained\" of type \"Dog\".",
            &[(1, 44)],
        )],
    );
    assert_eq!(
        rule_errors("KnownArgumentNames", "{ dog { name @skip(unless: true) } }").len(),
        1,
    );
}

#[test]
fn provided_non_null_arguments() {
    assert_eq!(
        rule_errors("ProvidedNonNullArguments", "{ complicatedArgs { multipleReqs(req1: 1) } }"),
        vec![error(
            "Field \"multipleReqs\" argument \"req2\" of type \"Int!\" is required but not \
             provided.",
            &[(1, 21)],
        )],
    );
    assert_eq!(
        rule_errors("ProvidedNonNullArguments", "{ dog { name @include } }"),
        vec![error(
            "Directive \"@include\" argument \"if\" of type \"Boolean!\" is required but not \
             provided.",
            &[(1, 14)],
        )],
    );
}

#[test]
fn unique_argument_names() {
    assert_eq!(
        rule_errors("UniqueArgumentNames", "{ dog { isAtLocation(x: 1, x: 2) } }"),
        vec![error("There can be only one argument named \"x\".", &[(1, 22), (1, 28)])],
    );
}

#[test]
fn unique_input_field_names() {
    let body = "{ complicatedArgs { complexArgField(complexArg: { requiredField: true, \
                intField: 1, intField: 2 }) } }";
    assert_eq!(
        rule_errors("UniqueInputFieldNames", body),
        vec![error("There can be only one input field named \"intField\".", &[(1, 72), (1, 85)])],
    );
    assert_rule_passes(
        "UniqueInputFieldNames",
        "{ complicatedArgs { complexArgField(complexArg: { requiredField: true, \
         stringListField: [\"a\"] }) } }",
    );
}

// =============================================================================
// Fields and fragments
// =============================================================================

#[test]
fn fields_on_correct_type() {
    assert_eq!(
        rule_errors("FieldsOnCorrectType", "{ dog { meowVolume } }"),
        vec![error("Cannot query field \"meowVolume\" on \"Dog\".", &[(1, 9)])],
    );
    assert_rule_passes("FieldsOnCorrectType", "{ catOrDog { __typename } }");
}

/// Verifies that a field missing from an abstract type suggests the
/// possible types that do define it.
#[test]
fn fields_on_correct_type_suggests_fragments() {
    assert_eq!(
        rule_errors("FieldsOnCorrectType", "{ pet { ... on Pet { name } bark: barkVolume } }"),
        vec![error(
            "Cannot query field \"barkVolume\" on \"Pet\". Did you mean to use an inline \
             fragment on \"Dog\"?",
            &[(1, 29)],
        )],
    );
}

#[test]
fn fragments_on_composite_types() {
    let errors = rule_errors(
        "FragmentsOnCompositeTypes",
        "fragment scalarFragment on Boolean { bad } { dog { ...scalarFragment } }",
    );
    assert_eq!(
        errors,
        vec![error(
            "Fragment \"scalarFragment\" cannot condition on non composite type \"Boolean\".",
            &[(1, 28)],
        )],
    );
    assert_eq!(
        rule_errors("FragmentsOnCompositeTypes", "{ dog { ... on Boolean { x } } }")[0].0,
        "Fragment cannot condition on non composite type \"Boolean\".",
    );
}

#[test]
fn known_fragment_names() {
    assert_eq!(
        rule_errors("KnownFragmentNames", "{ dog { ...Missing } }"),
        vec![error("Unknown fragment \"Missing\".", &[(1, 12)])],
    );
}

#[test]
fn no_fragment_cycles() {
    let body = "{ dog { ...A } } fragment A on Dog { ...B } fragment B on Dog { ...A }";
    assert_eq!(
        rule_errors("NoFragmentCycles", body),
        vec![error("Cannot spread fragment \"A\" within itself via B.", &[(1, 38), (1, 65)])],
    );
    assert_eq!(
        rule_errors("NoFragmentCycles", "{ dog { ...A } } fragment A on Dog { ...A }")[0].0,
        "Cannot spread fragment \"A\" within itself.",
    );
    assert_rule_passes(
        "NoFragmentCycles",
        "{ dog { ...A ...B } } fragment A on Dog { ...B } fragment B on Dog { name }",
    );
}

#[test]
fn no_unused_fragments() {
    assert_eq!(
        rule_errors("NoUnusedFragments", "{ dog { name } } fragment Unused on Dog { name }"),
        vec![error("Fragment \"Unused\" is never used.", &[(1, 18)])],
    );
    assert_rule_passes(
        "NoUnusedFragments",
        "{ dog { ...A } } fragment A on Dog { ...B } fragment B on Dog { name }",
    );
}

#[test]
fn overlapping_fields_can_be_merged() {
    assert_eq!(
        rule_errors("OverlappingFieldsCanBeMerged", "{ dog { name: nickname name } }"),
        vec![error(
            "Fields \"name\" conflict because nickname and name are different fields.",
            &[(1, 9), (1, 24)],
        )],
    );
    assert_eq!(
        rule_errors(
            "OverlappingFieldsCanBeMerged",
            "{ dog { isAtLocation(x: 1) isAtLocation(x: 2) } }",
        ),
        vec![error(
            "Fields \"isAtLocation\" conflict because they have differing arguments.",
            &[(1, 9), (1, 28)],
        )],
    );
}

/// Verifies that same-named fields under mutually exclusive object types
/// may differ in arguments but not in shape.
#[test]
fn overlapping_fields_on_exclusive_types() {
    assert_rule_passes(
        "OverlappingFieldsCanBeMerged",
        "{ catOrDog { ... on Dog { name(surname: true) } ... on Cat { name } } }",
    );
    let errors = rule_errors(
        "OverlappingFieldsCanBeMerged",
        "{ catOrDog { ... on Dog { v: barkVolume } ... on Cat { v: nickname } } }",
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].0,
        "Fields \"v\" conflict because they return differing types Int and String.",
    );
}

/// Verifies that conflicts between sub-selections are reported on the
/// outer field.
#[test]
fn overlapping_fields_reports_subfield_conflicts() {
    let errors = rule_errors(
        "OverlappingFieldsCanBeMerged",
        "{ dog { name } dog { name: nickname } }",
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].0,
        "Fields \"dog\" conflict because subfields \"name\" conflict because name and \
         nickname are different fields.",
    );
}

#[test]
fn possible_fragment_spreads() {
    assert_eq!(
        rule_errors("PossibleFragmentSpreads", "{ dog { ... on Cat { meows } } }"),
        vec![error(
            "Fragment cannot be spread here as objects of type \"Dog\" can never be of type \
             \"Cat\".",
            &[(1, 9)],
        )],
    );
    assert_eq!(
        rule_errors(
            "PossibleFragmentSpreads",
            "{ dog { ...CatFields } } fragment CatFields on Cat { meows }",
        ),
        vec![error(
            "Fragment \"CatFields\" cannot be spread here as objects of type \"Dog\" can never \
             be of type \"Cat\".",
            &[(1, 9)],
        )],
    );
    assert_rule_passes(
        "PossibleFragmentSpreads",
        "{ pet { ... on Dog { barks } ... on CatOrDog { __typename } } }",
    );
}

#[test]
fn scalar_leafs() {
    assert_eq!(
        rule_errors("ScalarLeafs", "{ dog { barks { x } } }"),
        vec![error("Field \"barks\" of type \"Boolean\" must not have a sub selection.", &[(1, 15)])],
    );
    assert_eq!(
        rule_errors("ScalarLeafs", "{ human }"),
        vec![error("Field \"human\" of type \"Human\" must have a sub selection.", &[(1, 3)])],
    );
}

#[test]
fn unique_fragment_names() {
    let body = "fragment F on Dog { name } fragment F on Dog { nickname } { dog { ...F } }";
    assert_eq!(
        rule_errors("UniqueFragmentNames", body),
        vec![error("There can only be one fragment named \"F\".", &[(1, 10), (1, 37)])],
    );
}

/// Verifies that a long linear chain of fragment spreads passes every rule.
#[test]
fn long_fragment_chain_passes_all_rules() {
    let body = format!("{{ dog {{ ...F0 }} }}\n{}", fragment_chain(20_000, "Dog", "name"));
    let errors = validate_pets(&body);
    assert!(errors.is_empty(), "{errors:#?}");
}

/// Verifies that fragments spreading the next fragment twice at every level
/// validate without expanding each spread path.
#[test]
fn repeated_fragment_spreads_pass_all_rules() {
    let mut body = String::from("{ dog { ...F0 } }\n");
    for i in 0..40 {
        body.push_str(&format!("fragment F{i} on Dog {{ ...F{next} ...F{next} }}\n", next = i + 1));
    }
    body.push_str("fragment F40 on Dog { name nickname }\n");
    let errors = validate_pets(&body);
    assert!(errors.is_empty(), "{errors:#?}");
}

/// Verifies that a cycle closing a long chain of spreads is reported once.
#[test]
fn long_fragment_cycle_reported_once() {
    let body = format!("{{ dog {{ ...F0 }} }}\n{}", fragment_chain(5_000, "Dog", "...F0"));
    let errors = rule_errors("NoFragmentCycles", &body);
    assert_eq!(errors.len(), 1, "{errors:#?}");
    assert!(
        errors[0].0.starts_with("Cannot spread fragment \"F0\" within itself via F1, F2,"),
        "{}",
        errors[0].0,
    );
    assert_eq!(errors[0].1.len(), 5_000);
}

// =============================================================================
// Operations, types and directives
// =============================================================================

#[test]
fn lone_anonymous_operation() {
    assert_eq!(
        rule_errors("LoneAnonymousOperation", "{ dog { name } } query Named { cat { name } }"),
        vec![error("This anonymous operation must be the only defined operation.", &[(1, 1)])],
    );
    assert_eq!(rule_errors("LoneAnonymousOperation", "{ a: dog { name } } { cat { name } }").len(), 2);
    assert_rule_passes("LoneAnonymousOperation", "{ dog { name } }");
}

#[test]
fn unique_operation_names() {
    assert_eq!(
        rule_errors("UniqueOperationNames", "query A { dog { name } } query A { cat { name } }"),
        vec![error("There can only be one operation named \"A\".", &[(1, 7), (1, 32)])],
    );
}

#[test]
fn known_type_names() {
    let body = "query Q($v: Mystery) { dog { name } } fragment F on Unicorn { name }";
    assert_eq!(
        rule_errors("KnownTypeNames", body),
        vec![
            error("Unknown type \"Mystery\".", &[(1, 13)]),
            error("Unknown type \"Unicorn\".", &[(1, 53)]),
        ],
    );
}

#[test]
fn known_directives() {
    assert_eq!(
        rule_errors("KnownDirectives", "{ dog @unknown { name @onQuery } }"),
        vec![
            error("Unknown directive \"unknown\".", &[(1, 7)]),
            error("Directive \"onQuery\" may not be used on FIELD.", &[(1, 23)]),
        ],
    );
    assert_rule_passes("KnownDirectives", "query Q @onQuery { dog @skip(if: false) { name } }");
}

// =============================================================================
// Variables
// =============================================================================

#[test]
fn no_undefined_variables() {
    assert_eq!(
        rule_errors(
            "NoUndefinedVariables",
            "query Q($a: Int) { complicatedArgs { intArgField(intArg: $b) } }",
        ),
        vec![error("Variable \"$b\" is not defined.", &[(1, 58)])],
    );
}

/// Verifies that a variable used inside a fragment is reported against
/// the named operation that spreads it.
#[test]
fn no_undefined_variables_through_fragments() {
    assert_eq!(
        rule_errors(
            "NoUndefinedVariables",
            "query Q { dog { ...F } } fragment F on Dog { isAtLocation(x: $x) }",
        ),
        vec![error("Variable \"$x\" is not defined by operation \"Q\".", &[(1, 62), (1, 1)])],
    );
}

#[test]
fn no_unused_variables() {
    assert_eq!(
        rule_errors("NoUnusedVariables", "query Q($unused: Int) { dog { name } }"),
        vec![error("Variable \"$unused\" is never used.", &[(1, 9)])],
    );
    assert_rule_passes(
        "NoUnusedVariables",
        "query Q($x: Int) { dog { ...F } } fragment F on Dog { isAtLocation(x: $x) }",
    );
}

#[test]
fn unique_variable_names() {
    let errors = rule_errors(
        "UniqueVariableNames",
        "query Q($a: Int, $a: String) { dog { name } }",
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, "There can be only one variable named \"a\".");
    assert_eq!(errors[0].1.len(), 2);
}

#[test]
fn variables_are_input_types() {
    assert_eq!(
        rule_errors("VariablesAreInputTypes", "query Q($dog: Dog) { dog { name } }"),
        vec![error("Variable \"$dog\" cannot be non-input type \"Dog\".", &[(1, 15)])],
    );
    assert_rule_passes(
        "VariablesAreInputTypes",
        "query Q($a: [ComplexInput!], $b: FurColor) { dog { name } }",
    );
}

#[test]
fn variables_in_allowed_position() {
    assert_eq!(
        rule_errors(
            "VariablesInAllowedPosition",
            "query Q($v: Int) { complicatedArgs { nonNullIntArgField(nonNullIntArg: $v) } }",
        ),
        vec![error(
            "Variable \"$v\" of type \"Int\" used in position expecting type \"Int!\".",
            &[(1, 72)],
        )],
    );
    assert_rule_passes(
        "VariablesInAllowedPosition",
        "query Q($v: Int = 1) { complicatedArgs { nonNullIntArgField(nonNullIntArg: $v) } }",
    );
    assert_rule_passes(
        "VariablesInAllowedPosition",
        "query Q($v: [String!]!) { complicatedArgs { stringListArgField(stringListArg: $v) } }",
    );
}
