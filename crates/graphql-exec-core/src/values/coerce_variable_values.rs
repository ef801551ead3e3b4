use crate::error::CoercionError;
use crate::error::locations_of;
use crate::schema::Schema;
use crate::types::TypeAnnotation;
use crate::values::coerce_input_value;
use crate::values::value_from_ast;
use crate::Value;
use graphql_exec_parser::ast;
use indexmap::IndexMap;

/// Coerces the request's raw variable values according to an operation's
/// variable definitions.
///
/// Variables that are neither provided nor defaulted are left out of the
/// result, so "absent" and "explicitly null" stay distinguishable.
pub fn coerce_variable_values(
    schema: &Schema,
    definitions: &[ast::VariableDefinition],
    inputs: &IndexMap<String, Value>,
) -> Result<IndexMap<String, Value>, CoercionError> {
    let mut coerced = IndexMap::with_capacity(definitions.len());
    for definition in definitions {
        let var_name = &definition.variable.name.value;
        let var_type = TypeAnnotation::from_ast(&definition.var_type);
        let locations = || locations_of([definition.loc.as_ref()]);

        let is_input_type = schema
            .get_type(var_type.innermost_name())
            .is_some_and(|t| t.is_input_type());
        if !is_input_type {
            return Err(CoercionError::new(
                format!(
                    "Variable \"${var_name}\" expected value of type \"{var_type}\" which \
                    cannot be used as an input type."
                ),
                locations(),
            ));
        }

        let Some(input) = inputs.get(var_name) else {
            if let Some(default_literal) = &definition.default_value {
                if let Some(default_value) = value_from_ast(schema, &var_type, default_literal, None) {
                    coerced.insert(var_name.clone(), default_value);
                }
            } else if !var_type.nullable() {
                return Err(CoercionError::new(
                    format!("Variable \"${var_name}\" of required type \"{var_type}\" was not provided."),
                    locations(),
                ));
            }
            continue;
        };

        if input.is_null() && !var_type.nullable() {
            return Err(CoercionError::new(
                format!("Variable \"${var_name}\" of non-null type \"{var_type}\" must not be null."),
                locations(),
            ));
        }

        match coerce_input_value(schema, &var_type, input) {
            Ok(value) => {
                coerced.insert(var_name.clone(), value);
            },
            Err(problems) => {
                log::debug!("Rejected variable ${var_name}: {}", problems.join(" "));
                return Err(CoercionError::new(
                    format!(
                        "Variable \"${var_name}\" expected value of type \"{var_type}\" but got: \
                        {input}."
                    ),
                    locations(),
                ).with_cause(problems.join("\n")));
            },
        }
    }
    Ok(coerced)
}
