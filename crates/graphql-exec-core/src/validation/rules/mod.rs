mod arguments_of_correct_type;
mod default_values_of_correct_type;
mod fields_on_correct_type;
mod fragments_on_composite_types;
mod known_argument_names;
mod known_directives;
mod known_fragment_names;
mod known_type_names;
mod lone_anonymous_operation;
mod no_fragment_cycles;
mod no_undefined_variables;
mod no_unused_fragments;
mod no_unused_variables;
mod overlapping_fields_can_be_merged;
mod possible_fragment_spreads;
mod provided_non_null_arguments;
mod scalar_leafs;
mod unique_argument_names;
mod unique_fragment_names;
mod unique_input_field_names;
mod unique_operation_names;
mod unique_variable_names;
mod variables_are_input_types;
mod variables_in_allowed_position;

use crate::validation::ValidationRule;

static SPECIFIED_RULES: [ValidationRule; 24] = [
    ValidationRule::new("ArgumentsOfCorrectType", arguments_of_correct_type::create),
    ValidationRule::new("DefaultValuesOfCorrectType", default_values_of_correct_type::create),
    ValidationRule::new("FieldsOnCorrectType", fields_on_correct_type::create),
    ValidationRule::new("FragmentsOnCompositeTypes", fragments_on_composite_types::create),
    ValidationRule::new("KnownArgumentNames", known_argument_names::create),
    ValidationRule::new("KnownDirectives", known_directives::create),
    ValidationRule::new("KnownFragmentNames", known_fragment_names::create),
    ValidationRule::new("KnownTypeNames", known_type_names::create),
    ValidationRule::new("LoneAnonymousOperation", lone_anonymous_operation::create),
    ValidationRule::new("NoFragmentCycles", no_fragment_cycles::create),
    ValidationRule::new("NoUndefinedVariables", no_undefined_variables::create),
    ValidationRule::new("NoUnusedFragments", no_unused_fragments::create),
    ValidationRule::new("NoUnusedVariables", no_unused_variables::create),
    ValidationRule::new(
        "OverlappingFieldsCanBeMerged",
        overlapping_fields_can_be_merged::create,
    ),
    ValidationRule::new("PossibleFragmentSpreads", possible_fragment_spreads::create),
    ValidationRule::new("ProvidedNonNullArguments", provided_non_null_arguments::create),
    ValidationRule::new("ScalarLeafs", scalar_leafs::create),
    ValidationRule::new("UniqueArgumentNames", unique_argument_names::create),
    ValidationRule::new("UniqueFragmentNames", unique_fragment_names::create),
    ValidationRule::new("UniqueInputFieldNames", unique_input_field_names::create),
    ValidationRule::new("UniqueOperationNames", unique_operation_names::create),
    ValidationRule::new("UniqueVariableNames", unique_variable_names::create),
    ValidationRule::new("VariablesAreInputTypes", variables_are_input_types::create),
    ValidationRule::new("VariablesInAllowedPosition", variables_in_allowed_position::create),
];

/// The rules every executable document must satisfy, in the order they
/// report errors for the same node.
pub fn specified_rules() -> &'static [ValidationRule] {
    &SPECIFIED_RULES
}
